//! gbe-build - build driver for the gbe emulator
//!
//! Configures and compiles one build variant of the emulator with
//! CMake and make, then runs the result or its test and coverage passes.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line parsing and output
//! - [`core`] - Variant naming, flag handling and build orchestration
//! - [`infra`] - Filesystem and external process operations
//! - [`config`] - Defaults and project settings
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
