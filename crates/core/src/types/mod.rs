//! Domain types flowing through the translate–cache–execute pipeline

mod generated;
mod source;

pub use generated::GeneratedJs;
pub use source::SourceUnit;
