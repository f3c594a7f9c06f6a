//! Core error type definitions

use std::path::PathBuf;

/// Result type alias for polyrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for polyrun operations using thiserror
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid configuration, e.g. no API credential
    Configuration { message: String },

    /// The completion endpoint answered with a failure status or an unusable payload
    Translation {
        status: Option<u16>,
        body: String,
    },

    /// The completion succeeded but no JavaScript could be extracted from it
    EmptyTranslation { source_id: String },

    /// The generated program exited non-zero or could not be started
    Execution {
        runtime: String,
        exit_code: Option<i32>,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Network-level failures talking to the completion endpoint
    Network { endpoint: String, message: String },

    /// Operation timeout errors
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },

    /// File system operations
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}
