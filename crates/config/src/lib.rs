//! Configuration for polyrun
//!
//! Settings are layered with the precedence CLI flags > environment >
//! config file (`polyrun.json`) > built-in defaults.

pub mod config;
pub mod loader;


pub use config::*;
pub use loader::*;
