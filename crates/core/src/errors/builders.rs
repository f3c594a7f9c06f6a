//! Builder methods for creating errors with context

use super::types::Error;
use std::path::PathBuf;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a translation error carrying the endpoint's status and body
    #[must_use]
    pub fn translation(status: Option<u16>, body: impl Into<String>) -> Self {
        Error::Translation {
            status,
            body: body.into(),
        }
    }

    /// Create an error for a completion that yielded no code
    #[must_use]
    pub fn empty_translation(source_id: impl Into<String>) -> Self {
        Error::EmptyTranslation {
            source_id: source_id.into(),
        }
    }

    /// Create an execution error for a program that ran and failed
    #[must_use]
    pub fn execution(
        runtime: impl Into<String>,
        exit_code: Option<i32>,
        message: impl Into<String>,
    ) -> Self {
        Error::Execution {
            runtime: runtime.into(),
            exit_code,
            message: message.into(),
            source: None,
        }
    }

    /// Create an execution error for a program that never started
    #[must_use]
    pub fn execution_spawn(
        runtime: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::Execution {
            runtime: runtime.into(),
            exit_code: None,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create a network error
    #[must_use]
    pub fn network(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Network {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timeout(operation: impl Into<String>, duration: std::time::Duration) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration,
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Exit code of the generated program, when it ran to completion
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::Execution { exit_code, .. } => *exit_code,
            _ => None,
        }
    }
}
