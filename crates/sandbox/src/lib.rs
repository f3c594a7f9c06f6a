//! Execution of generated JavaScript in a disposable directory
//!
//! Each execution gets its own `polyrun-<uuid>` directory holding a single
//! `main.js`. The directory is removed on every exit path, including panics
//! and cancelled futures.

pub mod artifact;
pub mod subprocess;

pub use artifact::render_artifact;
pub use subprocess::SubprocessSandbox;

use async_trait::async_trait;
use polyrun_core::{GeneratedJs, Result};

/// Runs generated JavaScript to completion
#[async_trait]
pub trait ExecutionSandbox: Send + Sync {
    /// Run `js`, recording `provenance_id` in the artifact.
    ///
    /// `Ok(())` means the program exited successfully.
    async fn execute(&self, js: &GeneratedJs, provenance_id: &str) -> Result<()>;
}
