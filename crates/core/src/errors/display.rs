//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::Translation { status, body } => match status {
                Some(code) => write!(f, "translation request failed with status {code}: {body}"),
                None => write!(f, "translation request failed: {body}"),
            },
            Error::EmptyTranslation { source_id } => {
                write!(f, "translation of '{source_id}' produced no JavaScript")
            }
            Error::Execution {
                runtime,
                exit_code,
                message,
                ..
            } => match exit_code {
                Some(code) => write!(
                    f,
                    "execution with '{runtime}' failed with exit code {code}: {message}"
                ),
                None => write!(f, "execution with '{runtime}' failed: {message}"),
            },
            Error::Network { endpoint, message } => {
                write!(f, "network error for '{endpoint}': {message}")
            }
            Error::Timeout {
                operation,
                duration,
            } => {
                write!(f, "operation '{operation}' timed out after {duration:?}")
            }
            Error::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "file system {} operation failed for '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            Error::Json { message, .. } => {
                write!(f, "JSON error: {message}")
            }
        }
    }
}
