//! Build variants
//!
//! A build variant is one cell of {desktop, test} x {debug, release}. Each
//! variant owns its own directory under the build root, so switching
//! between variants never reuses another variant's configure cache.

use std::fmt;
use std::path::{Path, PathBuf};

/// Output tree selected by the test axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Regular emulator build
    Desktop,
    /// Build with the unit tests enabled
    Test,
}

impl Platform {
    /// Directory segment for this platform
    pub fn segment(self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Test => "test",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Compilation profile selected by the debug axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Unoptimized build with debug info
    Debug,
    /// Optimized build
    Release,
}

impl Profile {
    /// Directory segment for this profile
    pub fn segment(self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }

    /// Value passed as `CMAKE_BUILD_TYPE`
    pub fn cmake_build_type(self) -> &'static str {
        match self {
            Profile::Debug => "Debug",
            Profile::Release => "Release",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Requested build, fixed for the lifetime of an orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BuildConfiguration {
    debug: bool,
    test: bool,
    coverage: bool,
}

impl BuildConfiguration {
    /// Create a configuration
    ///
    /// Coverage needs an instrumented test build, so it forces both `debug`
    /// and `test` on regardless of what was passed.
    pub fn new(debug: bool, test: bool, coverage: bool) -> Self {
        Self {
            debug: debug || coverage,
            test: test || coverage,
            coverage,
        }
    }

    /// Debug profile requested
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Test build requested
    pub fn is_test(&self) -> bool {
        self.test
    }

    /// Coverage run requested
    pub fn is_coverage(&self) -> bool {
        self.coverage
    }

    /// Output tree for this configuration
    pub fn platform(&self) -> Platform {
        if self.test {
            Platform::Test
        } else {
            Platform::Desktop
        }
    }

    /// Compilation profile for this configuration
    pub fn profile(&self) -> Profile {
        if self.debug {
            Profile::Debug
        } else {
            Profile::Release
        }
    }

    /// Variant directory under `root`: `<root>/<platform>/<profile>`
    pub fn build_directory(&self, root: &Path) -> PathBuf {
        root.join(self.platform().segment())
            .join(self.profile().segment())
    }

    /// Variant directory under the default build root
    #[cfg(test)]
    fn relative_build_directory(&self) -> PathBuf {
        self.build_directory(Path::new(crate::config::defaults::BUILD_ROOT))
    }

    /// Value passed as `CMAKE_BUILD_TYPE`
    pub fn cmake_build_type(&self) -> &'static str {
        self.profile().cmake_build_type()
    }
}

impl fmt::Display for BuildConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform(), self.profile())?;
        if self.coverage {
            write!(f, " (coverage)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_directory_table() {
        let cases = [
            (false, false, ".build/desktop/release"),
            (true, false, ".build/desktop/debug"),
            (false, true, ".build/test/release"),
            (true, true, ".build/test/debug"),
        ];

        for (debug, test, expected) in cases {
            let config = BuildConfiguration::new(debug, test, false);
            assert_eq!(
                config.relative_build_directory(),
                PathBuf::from(expected),
                "debug={debug} test={test}"
            );
        }
    }

    #[test]
    fn test_cmake_build_type() {
        assert_eq!(BuildConfiguration::new(true, false, false).cmake_build_type(), "Debug");
        assert_eq!(BuildConfiguration::new(false, false, false).cmake_build_type(), "Release");
    }

    #[test]
    fn test_display() {
        assert_eq!(BuildConfiguration::new(false, false, false).to_string(), "desktop/release");
        assert_eq!(
            BuildConfiguration::new(false, false, true).to_string(),
            "test/debug (coverage)"
        );
    }

    #[test]
    fn test_default_is_desktop_release() {
        let config = BuildConfiguration::default();

        assert_eq!(config.platform(), Platform::Desktop);
        assert_eq!(config.profile(), Profile::Release);
        assert!(!config.is_coverage());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the directory depends only on the two axes
        #[test]
        fn prop_directory_is_pure(debug in any::<bool>(), test in any::<bool>(), root in "[a-z]{1,8}") {
            let config = BuildConfiguration::new(debug, test, false);
            let root = PathBuf::from(root);

            let expected = root
                .join(if test { "test" } else { "desktop" })
                .join(if debug { "debug" } else { "release" });

            prop_assert_eq!(config.build_directory(&root), expected.clone());
            prop_assert_eq!(
                BuildConfiguration::new(debug, test, false).build_directory(&root),
                expected
            );
        }

        /// Property: coverage lands in test/debug whatever else was asked for
        #[test]
        fn prop_coverage_forces_test_debug(debug in any::<bool>(), test in any::<bool>()) {
            let config = BuildConfiguration::new(debug, test, true);

            prop_assert!(config.is_debug());
            prop_assert!(config.is_test());
            prop_assert_eq!(
                config.relative_build_directory(),
                BuildConfiguration::new(true, true, false).relative_build_directory()
            );
        }
    }
}
