//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no build logic - that belongs in the [`crate::core`] module.

pub mod output;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::defaults;
use crate::config::settings::Settings;
use crate::core::flags::{BuildFlags, COVERAGE_FLAG, DEBUG_FLAG, TEST_FLAG};
use crate::core::orchestrator::BuildOrchestrator;
use crate::core::variant::BuildConfiguration;
use crate::error::{GbeBuildError, SetupError};
use crate::infra::process::{self, SystemRunner};

/// gbe-build - configure, compile and run the gbe emulator
///
/// Build flags may appear anywhere; every other argument is passed to the
/// emulator unchanged.
#[derive(Parser, Debug)]
#[command(name = "gbe-build")]
#[command(author, version, about, long_about = None)]
#[command(long_version = long_version())]
pub struct Cli {
    /// Build with the unit tests enabled (.build/test/...)
    #[arg(long, action = clap::ArgAction::Count)]
    pub test: u8,

    /// Build the Debug profile (.build/.../debug)
    #[arg(long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Run the tests and collect coverage (implies --test and --debug)
    #[arg(long, action = clap::ArgAction::Count)]
    pub coverage: u8,

    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (defaults to ./gbe-build.toml when present)
    #[arg(long, env = defaults::SETTINGS_ENV)]
    pub config: Option<PathBuf>,

    /// Arguments forwarded to the emulator
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
        let date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
        format!("{} (commit {sha}, built {date})", env!("CARGO_PKG_VERSION"))
    })
}

impl Cli {
    /// Build flags given before the first forwarded argument
    fn parsed_flags(&self) -> BuildFlags {
        BuildFlags {
            debug: self.debug > 0,
            test: self.test > 0,
            coverage: self.coverage > 0,
        }
    }

    /// Split into the final build flags and the emulator arguments
    ///
    /// Each build flag is consumed once. clap stops at the first forwarded
    /// argument, so a flag not seen before it is picked out of the
    /// remainder here. Repeats of a leading flag go to the emulator, ahead
    /// of the forwarded arguments.
    pub fn into_invocation(self) -> (BuildFlags, Vec<String>) {
        let parsed = self.parsed_flags();

        let mut arguments = Vec::with_capacity(self.args.len());
        for (flag, count) in [
            (TEST_FLAG, self.test),
            (DEBUG_FLAG, self.debug),
            (COVERAGE_FLAG, self.coverage),
        ] {
            let repeats = usize::from(count.saturating_sub(1));
            arguments.extend(std::iter::repeat(flag.to_string()).take(repeats));
        }
        arguments.extend(self.args);

        parsed.extract_unset(arguments)
    }

    /// Build, then run. Returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let config = self.config.clone();
        let (flags, arguments) = self.into_invocation();
        let configuration = flags.configuration();

        let project_root = std::env::current_dir().map_err(|e| SetupError::CurrentDir {
            error: e.to_string(),
        })?;

        let mut orchestrator = prepare(configuration, &project_root, config.as_deref())
            .with_context(|| format!("Failed to prepare {configuration} build"))?;
        if orchestrator.status() != 0 {
            output::display_build_failure(&orchestrator.error_message());
            return Ok(orchestrator.status());
        }
        output::display_build_success(&configuration.to_string());

        tracing::info!("Forwarding arguments: {arguments:?}");
        Ok(orchestrator.run(&arguments))
    }
}

/// Load settings and build `configuration` under `project_root`
pub fn prepare(
    configuration: BuildConfiguration,
    project_root: &Path,
    config: Option<&Path>,
) -> Result<BuildOrchestrator<SystemRunner>, GbeBuildError> {
    let settings = Settings::load(project_root, config)?;
    warn_missing_tools(&settings, configuration);

    let orchestrator =
        BuildOrchestrator::new(configuration, settings, project_root, SystemRunner::new())?;
    Ok(orchestrator)
}

fn warn_missing_tools(settings: &Settings, configuration: BuildConfiguration) {
    let mut tools = vec![&settings.tools.configure, &settings.tools.compile];
    if configuration.is_coverage() {
        tools.push(&settings.tools.test);
    }
    for tool in tools {
        if !process::is_tool_available(tool) {
            output::display_missing_tool(tool);
        }
    }
}
