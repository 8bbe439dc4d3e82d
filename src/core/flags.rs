//! Build flag extraction
//!
//! Build flags may appear anywhere on the command line, mixed in with the
//! arguments meant for the emulator. They are removed from the list and the
//! rest is forwarded untouched.

use crate::core::variant::BuildConfiguration;

/// Flag selecting the test build
pub const TEST_FLAG: &str = "--test";

/// Flag selecting the debug profile
pub const DEBUG_FLAG: &str = "--debug";

/// Flag selecting a coverage run (implies test and debug)
pub const COVERAGE_FLAG: &str = "--coverage";

/// Remove the first exact occurrence of `flag` from `arguments`
///
/// Returns whether the flag was present. Later duplicates stay in place.
pub fn extract_flag(flag: &str, arguments: &mut Vec<String>) -> bool {
    match arguments.iter().position(|arg| arg == flag) {
        Some(index) => {
            arguments.remove(index);
            true
        }
        None => false,
    }
}

/// Build flags found on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildFlags {
    /// `--debug`
    pub debug: bool,
    /// `--test`
    pub test: bool,
    /// `--coverage`
    pub coverage: bool,
}

impl BuildFlags {
    /// Pull the build flags out of `arguments`
    ///
    /// Returns the flags and the arguments left for the emulator.
    pub fn extract(arguments: Vec<String>) -> (Self, Vec<String>) {
        Self::default().extract_unset(arguments)
    }

    /// Pull out only the flags not already set in `self`
    ///
    /// A flag that is already set was consumed elsewhere, so any occurrence
    /// left in `arguments` belongs to the emulator and stays. `self` must
    /// hold the flags as given, before coverage implies the other two.
    pub fn extract_unset(self, mut arguments: Vec<String>) -> (Self, Vec<String>) {
        let test = self.test || extract_flag(TEST_FLAG, &mut arguments);
        let debug = self.debug || extract_flag(DEBUG_FLAG, &mut arguments);
        let coverage = self.coverage || extract_flag(COVERAGE_FLAG, &mut arguments);

        let flags = Self {
            debug,
            test,
            coverage,
        };
        (flags.normalized(), arguments)
    }

    fn normalized(self) -> Self {
        if self.coverage {
            Self {
                debug: true,
                test: true,
                coverage: true,
            }
        } else {
            self
        }
    }

    /// Build configuration for these flags
    pub fn configuration(self) -> BuildConfiguration {
        BuildConfiguration::new(self.debug, self.test, self.coverage)
    }
}
