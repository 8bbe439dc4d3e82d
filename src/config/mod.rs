//! Configuration and constants
//!
//! - [`defaults`] - Built-in paths and tool names
//! - [`settings`] - Optional per-project `gbe-build.toml`

pub mod defaults;
pub mod settings;
