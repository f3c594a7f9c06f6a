//! Scoped resource cleanup

pub mod handler;

pub use handler::WorkspaceGuard;
