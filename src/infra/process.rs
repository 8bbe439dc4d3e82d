//! External process invocation
//!
//! Every external tool call goes through [`ToolRunner`]. An [`Invocation`]
//! carries its own working directory, so nothing here touches the process
//! current directory.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use crate::error::ToolError;

/// One external tool call
///
/// Program and arguments are OS strings so paths reach the child byte for
/// byte, even when they are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name or path
    pub program: OsString,
    /// Arguments, passed verbatim
    pub args: Vec<OsString>,
    /// Working directory for the child
    pub cwd: PathBuf,
}

impl Invocation {
    /// Create an invocation with no arguments
    pub fn new(program: impl Into<OsString>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
        }
    }

    /// Append one argument
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        write!(f, " (in {})", self.cwd.display())
    }
}

/// Runs external tools to completion
pub trait ToolRunner {
    /// Run `invocation`, blocking until it exits, and return its exit code
    fn run(&mut self, invocation: &Invocation) -> Result<i32, ToolError>;
}

/// Runs tools as child processes with inherited stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a system runner
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<i32, ToolError> {
        let program = resolve_program(&invocation.program)?;
        tracing::debug!("Running {invocation}");

        let status = Command::new(&program)
            .args(&invocation.args)
            .current_dir(&invocation.cwd)
            .status()
            .map_err(|e| ToolError::Spawn {
                program: invocation.program.to_string_lossy().into_owned(),
                error: e.to_string(),
            })?;

        let code = exit_code(status);
        tracing::debug!("{} exited with {code}", invocation.program.to_string_lossy());
        Ok(code)
    }
}

/// Locate `program` on PATH, or accept it as-is when it is a path
fn resolve_program(program: &OsStr) -> Result<PathBuf, ToolError> {
    let not_found = || ToolError::NotFound {
        program: program.to_string_lossy().into_owned(),
    };

    let path = Path::new(program);
    if path.components().count() > 1 || path.is_absolute() {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(not_found());
    }

    which::which(program).map_err(|_| not_found())
}

/// Exit code of a finished child, with signals mapped to `128 + signal`
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Whether `program` can be found
pub fn is_tool_available(program: &str) -> bool {
    resolve_program(OsStr::new(program)).is_ok()
}
