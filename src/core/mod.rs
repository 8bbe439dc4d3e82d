//! Core build logic
//!
//! Everything here is deterministic given its inputs. Side effects go
//! through [`crate::infra`].
//!
//! # Submodules
//!
//! - [`variant`] - Build variant naming and directory layout
//! - [`flags`] - Build flag extraction from the command line
//! - [`result`] - Sticky first-failure build result
//! - [`orchestrator`] - Setup, configure, compile and run sequence

pub mod flags;
pub mod orchestrator;
pub mod result;
pub mod variant;
