//! polyrun: run arbitrary source text by translating it to JavaScript

pub mod commands;
pub mod input;
pub mod pipeline;

pub use commands::{Commands, ConfigArgs, RunArgs};
pub use pipeline::{ArtifactOrigin, Pipeline, PreparedArtifact};
