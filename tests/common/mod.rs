//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests. Each test
//! project gets fake configure, compile and test tools written as small
//! shell scripts, wired in through `gbe-build.toml`.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use assert_fs::prelude::*;
use assert_fs::TempDir;

/// Configure tool that records its arguments and succeeds
pub const CONFIGURE_OK: &str = r#"echo "$@" > configure-args.txt"#;

/// Compile tool that produces an executable recording its arguments and cwd
pub const COMPILE_OK: &str = r#"touch compiled
cat > gbe <<'EOS'
#!/bin/sh
echo "$@" > run-args.txt
pwd >> run-args.txt
exit 7
EOS
chmod +x gbe"#;

/// Test runner that logs each call in the invocation directory
pub const CTEST_OK: &str = r#"echo "$@" >> ctest-calls.txt"#;

/// Test project context
///
/// Creates a temporary directory with an assets tree and a `tools/`
/// directory for fake toolchain scripts.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project with a minimal assets tree
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        dir.child("assets/fonts/mono.ttf")
            .write_str("font")
            .expect("Failed to write asset");
        Self { dir }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write an executable shell script under `tools/` and return its path
    #[cfg(unix)]
    pub fn tool(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.dir.child(format!("tools/{name}"));
        script
            .write_str(&format!("#!/bin/sh\n{body}\n"))
            .expect("Failed to write tool script");
        std::fs::set_permissions(script.path(), std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
        script.path().to_path_buf()
    }

    /// Point the build at fake tools with the given script bodies
    #[cfg(unix)]
    pub fn use_tools(&self, configure: &str, compile: &str, test: &str) {
        let configure = self.tool("cmake", configure);
        let compile = self.tool("make", compile);
        let test = self.tool("ctest", test);
        self.create_file(
            "gbe-build.toml",
            &format!(
                "[tools]\nconfigure = '{}'\ncompile = '{}'\ntest = '{}'\n",
                configure.display(),
                compile.display(),
                test.display()
            ),
        );
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        self.dir
            .child(name)
            .write_str(content)
            .expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Run gbe-build in the project directory
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_gbe-build"))
            .current_dir(self.path())
            .args(args)
            .env_remove("GBE_BUILD_CONFIG")
            .env_remove("GBE_LOG")
            .output()
            .expect("Failed to execute gbe-build")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Stderr of a finished command as a string
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
