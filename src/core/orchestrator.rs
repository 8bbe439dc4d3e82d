//! Build orchestration
//!
//! Prepares a variant directory, runs the configure and compile steps, and
//! then runs either the emulator or the test and coverage passes.
//!
//! Every external call is given its working directory explicitly; the
//! process current directory is never changed.

use std::path::{Path, PathBuf};

use crate::config::settings::Settings;
use crate::core::result::{BuildResult, BuildStage};
use crate::core::variant::BuildConfiguration;
use crate::error::SetupError;
use crate::infra::filesystem;
use crate::infra::process::{Invocation, ToolRunner};

/// Drives one build variant from setup to run
#[derive(Debug)]
pub struct BuildOrchestrator<R> {
    configuration: BuildConfiguration,
    settings: Settings,
    project_root: PathBuf,
    build_directory: PathBuf,
    executable: PathBuf,
    result: BuildResult,
    runner: R,
}

impl<R: ToolRunner> BuildOrchestrator<R> {
    /// Prepare, configure and compile `configuration` under `project_root`
    ///
    /// Filesystem setup errors are returned as `Err`. A configure or compile
    /// step exiting non-zero is not an error here; it is recorded in
    /// [`Self::result`] and the remaining steps are skipped.
    pub fn new(
        configuration: BuildConfiguration,
        settings: Settings,
        project_root: impl Into<PathBuf>,
        runner: R,
    ) -> Result<Self, SetupError> {
        let project_root = project_root.into();
        let build_directory =
            configuration.build_directory(&project_root.join(&settings.paths.build_root));
        let executable = build_directory.join(&settings.paths.executable);

        let mut orchestrator = Self {
            configuration,
            settings,
            project_root,
            build_directory,
            executable,
            result: BuildResult::Clean,
            runner,
        };
        orchestrator.prepare()?;
        orchestrator.build()?;
        Ok(orchestrator)
    }

    fn prepare(&self) -> Result<(), SetupError> {
        tracing::info!(
            "Preparing {} in {}",
            self.configuration,
            self.build_directory.display()
        );
        filesystem::create_dir_all(&self.build_directory)?;

        let assets = self.project_root.join(&self.settings.paths.assets);
        let copied = filesystem::merge_copy(&assets, &self.build_directory)?;
        tracing::info!("Copied {copied} asset files from {}", assets.display());
        Ok(())
    }

    fn build(&mut self) -> Result<(), SetupError> {
        let configure = self.configure_invocation();
        if !self.run_step(BuildStage::Configuration, &configure) {
            return Ok(());
        }

        // A leftover binary would let a failed compile look like a success.
        if filesystem::remove_file_if_exists(&self.executable)? {
            tracing::debug!("Removed stale {}", self.executable.display());
        }

        let compile = self.compile_invocation();
        self.run_step(BuildStage::Compilation, &compile);
        Ok(())
    }

    /// Run one build step, recording a failure. Returns whether it passed.
    fn run_step(&mut self, stage: BuildStage, invocation: &Invocation) -> bool {
        tracing::info!("Running {stage} step: {invocation}");
        let code = self.invoke(invocation);
        if code == 0 {
            return true;
        }

        tracing::warn!("{stage} step exited with {code}");
        self.result.record_failure(stage, code);
        false
    }

    fn invoke(&mut self, invocation: &Invocation) -> i32 {
        match self.runner.run(invocation) {
            Ok(code) => code,
            Err(e) => {
                tracing::error!("{e}");
                e.exit_code()
            }
        }
    }

    /// Configure command: source root, build type, then feature switches
    pub fn configure_invocation(&self) -> Invocation {
        let mut invocation = Invocation::new(&self.settings.tools.configure, &self.build_directory)
            .arg(&self.project_root)
            .arg(format!(
                "-DCMAKE_BUILD_TYPE={}",
                self.configuration.cmake_build_type()
            ));
        if self.configuration.is_test() {
            invocation = invocation.arg("-DTEST=ON");
        }
        if self.configuration.is_coverage() {
            invocation = invocation.arg("-DCOVERAGE=ON");
        }
        invocation.args(self.settings.build.extra_configure_args.iter().cloned())
    }

    /// Compile command, run in the build directory with no arguments
    pub fn compile_invocation(&self) -> Invocation {
        Invocation::new(&self.settings.tools.compile, &self.build_directory)
    }

    fn test_runner_invocation(&self, mode: &str) -> Invocation {
        Invocation::new(&self.settings.tools.test, &self.project_root)
            .args(["-T", mode, "--test-dir"])
            .arg(&self.build_directory)
    }

    /// Run the build
    ///
    /// In coverage mode `arguments` are ignored: the tests run first and the
    /// coverage pass runs only if they succeed. Otherwise the executable
    /// runs in the build directory with `arguments` forwarded as-is.
    ///
    /// Check [`Self::status`] first; after a failed build there is no
    /// executable to run.
    pub fn run(&mut self, arguments: &[String]) -> i32 {
        if self.configuration.is_coverage() {
            if !arguments.is_empty() {
                tracing::debug!("Ignoring {} arguments in coverage mode", arguments.len());
            }

            let tests = self.test_runner_invocation("test");
            tracing::info!("Running tests: {tests}");
            let code = self.invoke(&tests);
            if code != 0 {
                tracing::warn!("Tests exited with {code}, skipping coverage");
                return code;
            }

            let coverage = self.test_runner_invocation("coverage");
            tracing::info!("Collecting coverage: {coverage}");
            return self.invoke(&coverage);
        }

        tracing::info!("Running {} with arguments {arguments:?}", self.executable.display());
        let invocation =
            Invocation::new(&self.executable, &self.build_directory).args(arguments);
        self.invoke(&invocation)
    }

    /// 0 on success, otherwise the exit code of the failed step
    pub fn status(&self) -> i32 {
        self.result.status()
    }

    /// `OK`, or `[ERROR <status>] -> <stage>` after a failure
    pub fn error_message(&self) -> String {
        self.result.error_message()
    }

    /// Variant directory the build ran in
    pub fn build_directory(&self) -> &Path {
        &self.build_directory
    }

    #[cfg(test)]
    fn result(&self) -> BuildResult {
        self.result
    }

    #[cfg(test)]
    fn executable(&self) -> &Path {
        &self.executable
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }
}
