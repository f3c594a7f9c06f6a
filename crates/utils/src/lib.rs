//! Shared utilities for polyrun
//!
//! Small, side-effect-scoped helpers used across the workspace: atomic file
//! writes for the cache, scoped directories for the sandbox, XDG path
//! resolution, and tracing setup for the CLI.

pub mod atomic_file;
pub mod cleanup;
pub mod tracing;
pub mod xdg;

pub use atomic_file::*;
pub use cleanup::*;
pub use xdg::*;
