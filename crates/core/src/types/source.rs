use crate::constants::{STDIN_SOURCE_ID, UNKNOWN_LANGUAGE};
use serde::{Deserialize, Serialize};

/// A unit of source text submitted for translation.
///
/// The `id` is a stable identifier (a resolved file path, or
/// [`STDIN_SOURCE_ID`] for standard input). It takes part in cache keying and
/// is recorded as provenance in the generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    text: String,
    language_hint: Option<String>,
    id: String,
}

impl SourceUnit {
    pub fn new(
        text: impl Into<String>,
        language_hint: Option<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            language_hint,
            id: id.into(),
        }
    }

    /// Source read from standard input
    pub fn from_stdin(text: impl Into<String>, language_hint: Option<String>) -> Self {
        Self::new(text, language_hint, STDIN_SOURCE_ID)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language_hint(&self) -> Option<&str> {
        self.language_hint.as_deref()
    }

    /// The hint as shown to the model, `unknown` when absent
    pub fn language_label(&self) -> &str {
        self.language_hint.as_deref().unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}
