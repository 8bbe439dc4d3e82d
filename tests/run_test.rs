//! Integration tests for running the built emulator and coverage passes

#![cfg(unix)]

mod common;

use common::{TestProject, COMPILE_OK, CONFIGURE_OK, CTEST_OK};

#[test]
fn test_run_forwards_arguments_in_build_directory() {
    let project = TestProject::new();
    project.use_tools(CONFIGURE_OK, COMPILE_OK, CTEST_OK);

    let output = project.run(&["--debug", "rom.gb", "--scale", "2"]);

    assert_eq!(output.status.code(), Some(7));
    let recorded = project.read_file(".build/desktop/debug/run-args.txt");
    let mut lines = recorded.lines();
    assert_eq!(lines.next(), Some("rom.gb --scale 2"));
    let cwd = std::path::Path::new(lines.next().unwrap()).canonicalize().unwrap();
    assert_eq!(
        cwd,
        project.path().join(".build/desktop/debug").canonicalize().unwrap()
    );
}

#[test]
fn test_flags_after_forwarded_arguments_select_variant() {
    let project = TestProject::new();
    project.use_tools(CONFIGURE_OK, COMPILE_OK, CTEST_OK);

    project.run(&["rom.gb", "--test"]);

    assert_eq!(
        project.read_file(".build/test/release/run-args.txt").lines().next(),
        Some("rom.gb")
    );
}

#[test]
fn test_coverage_runs_tests_then_coverage() {
    let project = TestProject::new();
    project.use_tools(CONFIGURE_OK, COMPILE_OK, CTEST_OK);

    let output = project.run(&["--coverage", "rom.gb"]);

    assert_eq!(output.status.code(), Some(0));
    let configure = project.read_file(".build/test/debug/configure-args.txt");
    assert!(configure.contains("-DCOVERAGE=ON"), "args: {configure}");

    let calls = project.read_file("ctest-calls.txt");
    let calls: Vec<&str> = calls.lines().collect();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with("-T test --test-dir "));
    assert!(calls[0].ends_with(".build/test/debug"));
    assert!(calls[1].starts_with("-T coverage --test-dir "));
    assert!(!project.file_exists(".build/test/debug/run-args.txt"));
}

#[test]
fn test_coverage_stops_when_tests_fail() {
    let project = TestProject::new();
    project.use_tools(
        CONFIGURE_OK,
        COMPILE_OK,
        r#"echo "$@" >> ctest-calls.txt
[ "$2" = "test" ] && exit 9
exit 0"#,
    );

    let output = project.run(&["--coverage"]);

    assert_eq!(output.status.code(), Some(9));
    assert_eq!(project.read_file("ctest-calls.txt").lines().count(), 1);
}

#[test]
fn test_coverage_failure_exit_code() {
    let project = TestProject::new();
    project.use_tools(
        CONFIGURE_OK,
        COMPILE_OK,
        r#"echo "$@" >> ctest-calls.txt
[ "$2" = "coverage" ] && exit 5
exit 0"#,
    );

    let output = project.run(&["--coverage"]);

    assert_eq!(output.status.code(), Some(5));
    assert_eq!(project.read_file("ctest-calls.txt").lines().count(), 2);
}
