//! Translation cache for polyrun
//!
//! Translations are stored one JSON record per key under a root directory:
//! - Keys are SHA-256 digests over length-prefixed fields
//! - Records live at `<root>/<first two hex chars>/<key>.json`
//! - Writes are atomic; reads treat anything unusable as a miss

pub mod entry;
pub mod key;
pub mod store;

pub use entry::CacheEntry;
pub use key::{compute_key, compute_request_key, CacheKey, TranslatorIdentity};
pub use store::CacheStore;
