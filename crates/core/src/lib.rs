//! Core domain types, errors, and constants for `polyrun`.
//!
//! Every other crate in the workspace builds on the pieces defined here:
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by the cache,
//!   translation, and sandbox layers.
//! - **`types`**: `SourceUnit`, the immutable input to the pipeline, and
//!   `GeneratedJs`, the validated output of a translation.
//! - **`constants`**: environment variable names, defaults, and fixed tokens.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
