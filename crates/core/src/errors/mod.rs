//! Error types for polyrun operations

mod builders;
mod conversions;
mod display;
mod types;

pub use types::{Error, Result};
