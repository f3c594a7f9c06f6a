//! Sandbox that runs a JavaScript runtime as a child process

use crate::artifact::render_artifact;
use crate::ExecutionSandbox;
use async_trait::async_trait;
use polyrun_core::{
    Error, GeneratedJs, Result, DEFAULT_RUNTIME, SCRIPT_FILE_NAME, WORKSPACE_PREFIX,
};
use polyrun_utils::WorkspaceGuard;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// Runs generated code with an external runtime such as `node`.
///
/// The child inherits stdin, stdout, stderr and the current directory. It is
/// killed if the future driving [`ExecutionSandbox::execute`] is dropped.
#[derive(Debug, Clone)]
pub struct SubprocessSandbox {
    runtime: String,
    workspace_root: PathBuf,
}

impl Default for SubprocessSandbox {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME)
    }
}

impl SubprocessSandbox {
    pub fn new(runtime: impl Into<String>) -> Self {
        Self {
            runtime: runtime.into(),
            workspace_root: std::env::temp_dir(),
        }
    }

    /// Directory under which per-execution workspaces are created
    pub fn with_workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = root.into();
        self
    }

    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    fn resolve_runtime(&self) -> Result<PathBuf> {
        which::which(&self.runtime).map_err(|e| {
            Error::execution_spawn(
                &self.runtime,
                "JavaScript runtime not found",
                io::Error::new(io::ErrorKind::NotFound, e.to_string()),
            )
        })
    }

    async fn run(&self, runtime_path: &Path, script: &Path) -> Result<()> {
        let mut child = Command::new(runtime_path)
            .arg(script)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| Error::execution_spawn(&self.runtime, "failed to start runtime", e))?;

        let status = child
            .wait()
            .await
            .map_err(|e| Error::execution_spawn(&self.runtime, "failed to wait for runtime", e))?;

        self.check_status(status)
    }

    fn check_status(&self, status: ExitStatus) -> Result<()> {
        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(Error::execution(
                &self.runtime,
                Some(code),
                "generated program failed",
            )),
            None => Err(Error::execution(
                &self.runtime,
                None,
                describe_abnormal_exit(status),
            )),
        }
    }
}

#[async_trait]
impl ExecutionSandbox for SubprocessSandbox {
    async fn execute(&self, js: &GeneratedJs, provenance_id: &str) -> Result<()> {
        let runtime_path = self.resolve_runtime()?;

        let workspace = WorkspaceGuard::create(&self.workspace_root, WORKSPACE_PREFIX)?;
        let script = workspace.path().join(SCRIPT_FILE_NAME);
        tokio::fs::write(&script, render_artifact(js, provenance_id))
            .await
            .map_err(|e| Error::file_system(script.clone(), "write generated script", e))?;

        tracing::info!(
            runtime = %runtime_path.display(),
            script = %script.display(),
            "executing generated program"
        );
        let outcome = self.run(&runtime_path, &script).await;

        if let Err(e) = workspace.close() {
            tracing::warn!(error = %e, "failed to clean up workspace");
        }
        outcome
    }
}

#[cfg(unix)]
fn describe_abnormal_exit(status: ExitStatus) -> String {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => format!("generated program terminated by signal {signal}"),
        None => "generated program terminated abnormally".to_string(),
    }
}

#[cfg(not(unix))]
fn describe_abnormal_exit(_status: ExitStatus) -> String {
    "generated program terminated abnormally".to_string()
}
