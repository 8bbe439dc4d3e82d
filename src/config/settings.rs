//! Project settings
//!
//! Reads optional overrides from `gbe-build.toml` in the invocation
//! directory. Every field falls back to [`crate::config::defaults`], so an
//! absent file behaves exactly like an empty one.
//!
//! ```toml
//! [tools]
//! configure = "cmake"
//! compile = "make"
//! test = "ctest"
//!
//! [paths]
//! assets = "assets"
//! build_root = ".build"
//! executable = "gbe"
//!
//! [build]
//! extra_configure_args = ["-G", "Unix Makefiles"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::defaults;
use crate::error::SettingsError;

/// Settings for one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// External tool names or paths
    #[serde(default)]
    pub tools: ToolSettings,

    /// Input and output locations
    #[serde(default)]
    pub paths: PathSettings,

    /// Extra knobs for the configure step
    #[serde(default)]
    pub build: BuildSettings,
}

/// External tools invoked by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolSettings {
    /// Configure tool (cmake)
    pub configure: String,
    /// Compile tool (make)
    pub compile: String,
    /// Test and coverage runner (ctest)
    pub test: String,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            configure: defaults::CONFIGURE_TOOL.to_string(),
            compile: defaults::COMPILE_TOOL.to_string(),
            test: defaults::TEST_TOOL.to_string(),
        }
    }
}

/// Locations, relative to the invocation directory unless absolute
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathSettings {
    /// Assets tree merged into every build directory
    pub assets: PathBuf,
    /// Root under which variant directories are created
    pub build_root: PathBuf,
    /// Executable name inside the build directory
    pub executable: String,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            assets: PathBuf::from(defaults::ASSETS_DIR),
            build_root: PathBuf::from(defaults::BUILD_ROOT),
            executable: defaults::EXECUTABLE_NAME.to_string(),
        }
    }
}

/// Configure-step extras
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildSettings {
    /// Appended to the configure command after the generated flags
    pub extra_configure_args: Vec<String>,
}

impl Settings {
    /// Parse settings from TOML content
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, SettingsError> {
        toml::from_str(content).map_err(|e| SettingsError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load settings for a project
    ///
    /// An explicit path must exist. Without one, `gbe-build.toml` in
    /// `project_root` is used when present and defaults otherwise.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match explicit {
            Some(path) => project_root.join(path),
            None => {
                let candidate = project_root.join(defaults::SETTINGS_FILE);
                if !candidate.is_file() {
                    tracing::debug!("No {} found, using defaults", defaults::SETTINGS_FILE);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        tracing::debug!("Loading settings from {}", path.display());
        let content = fs::read_to_string(&path).map_err(|e| SettingsError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;
        Self::from_toml(&content, &path)
    }
}
