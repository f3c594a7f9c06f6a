//! Persisted cache record

use chrono::{DateTime, Utc};
use polyrun_core::{GeneratedJs, SourceUnit};
use serde::{Deserialize, Serialize};

/// One translation outcome as stored on disk.
///
/// `generated_js` goes through [`GeneratedJs`] validation when decoded, so a
/// record with blank code fails to parse and is treated as a miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntry {
    pub created_at: DateTime<Utc>,
    pub source_id: String,
    pub language_hint: Option<String>,
    pub generated_js: GeneratedJs,
}

impl CacheEntry {
    /// Record the translation of `unit`, stamped with the current time
    pub fn new(unit: &SourceUnit, generated_js: &GeneratedJs) -> Self {
        Self {
            created_at: Utc::now(),
            source_id: unit.id().to_string(),
            language_hint: unit.language_hint().map(str::to_string),
            generated_js: generated_js.clone(),
        }
    }
}
