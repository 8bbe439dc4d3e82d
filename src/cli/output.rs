//! Output formatting
//!
//! Status lines for the user. Everything goes to stderr so the emulator's
//! own stdout stays untouched.

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Print an error and its causes
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}

/// Print the captured message of a failed build
pub fn display_build_failure(message: &str) {
    eprintln!("{} {message}", status::ERROR);
}

/// Print a finished build
pub fn display_build_success(variant: &str) {
    eprintln!("{} Built {variant}", status::SUCCESS);
}

/// Print a warning about a missing tool before the build starts
pub fn display_missing_tool(program: &str) {
    eprintln!("{} '{program}' was not found in PATH", status::WARNING);
}
