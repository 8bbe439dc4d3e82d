//! Build result
//!
//! A build is either clean or failed at exactly one stage. Once failed, the
//! first failure is kept; later failures are dropped.

use std::fmt;

use crate::config::defaults;

/// External step that can fail a build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStage {
    /// Configure step (cmake)
    Configuration,
    /// Compile step (make)
    Compilation,
}

impl BuildStage {
    /// Human-readable failure description
    pub fn description(self) -> &'static str {
        match self {
            BuildStage::Configuration => "configuration failed",
            BuildStage::Compilation => "compilation failed",
        }
    }
}

impl fmt::Display for BuildStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildStage::Configuration => write!(f, "configure"),
            BuildStage::Compilation => write!(f, "compile"),
        }
    }
}

/// Outcome of the configure and compile steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildResult {
    /// No step has failed
    #[default]
    Clean,
    /// A step exited non-zero
    Failed {
        /// Step that failed
        stage: BuildStage,
        /// Its exit code (never zero)
        exit_code: i32,
    },
}

impl BuildResult {
    /// Record a failure unless one is already recorded
    ///
    /// Returns `true` when this call changed the result.
    pub fn record_failure(&mut self, stage: BuildStage, exit_code: i32) -> bool {
        if exit_code == 0 || self.is_failed() {
            return false;
        }
        *self = BuildResult::Failed { stage, exit_code };
        true
    }

    /// Whether a failure has been recorded
    pub fn is_failed(&self) -> bool {
        matches!(self, BuildResult::Failed { .. })
    }

    /// 0 when clean, otherwise the failing step's exit code
    pub fn status(&self) -> i32 {
        match self {
            BuildResult::Clean => 0,
            BuildResult::Failed { exit_code, .. } => *exit_code,
        }
    }

    /// Failed stage, if any
    pub fn stage(&self) -> Option<BuildStage> {
        match self {
            BuildResult::Clean => None,
            BuildResult::Failed { stage, .. } => Some(*stage),
        }
    }

    /// `OK` when clean, otherwise `[ERROR <status>] -> <stage description>`
    pub fn error_message(&self) -> String {
        match self {
            BuildResult::Clean => defaults::NO_ERROR_MESSAGE.to_string(),
            BuildResult::Failed { stage, exit_code } => {
                format!("[ERROR {exit_code}] -> {}", stage.description())
            }
        }
    }
}
