//! Default configuration values

/// Root of every build variant, relative to the invocation directory
pub const BUILD_ROOT: &str = ".build";

/// Static assets merged into the build directory before configuring
pub const ASSETS_DIR: &str = "assets";

/// Name of the executable produced by the compile step
pub const EXECUTABLE_NAME: &str = "gbe";

/// Meta-build configure tool
pub const CONFIGURE_TOOL: &str = "cmake";

/// Native compile tool
pub const COMPILE_TOOL: &str = "make";

/// Test and coverage runner
pub const TEST_TOOL: &str = "ctest";

/// Per-project settings file, looked up in the invocation directory
pub const SETTINGS_FILE: &str = "gbe-build.toml";

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "GBE_BUILD_CONFIG";

/// Error message reported while no step has failed
pub const NO_ERROR_MESSAGE: &str = "OK";
