//! Newtype for translated JavaScript

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::ops::Deref;

/// JavaScript source produced by a translation. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GeneratedJs(String);

impl GeneratedJs {
    /// Returns `None` when `code` is blank
    pub fn new(code: impl Into<String>) -> Option<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            None
        } else {
            Some(Self(code))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GeneratedJs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for GeneratedJs {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<String> for GeneratedJs {
    type Error = String;

    fn try_from(code: String) -> std::result::Result<Self, Self::Error> {
        Self::new(code).ok_or_else(|| "generated JavaScript must not be blank".to_string())
    }
}

impl From<GeneratedJs> for String {
    fn from(js: GeneratedJs) -> Self {
        js.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_blank_code() {
        assert!(GeneratedJs::new("").is_none());
        assert!(GeneratedJs::new(" \n\t ").is_none());
    }

    #[test]
    fn test_keeps_code_verbatim() {
        let js = GeneratedJs::new("  console.log(1);\n").unwrap();
        assert_eq!(js.as_str(), "  console.log(1);\n");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<GeneratedJs>("\"   \"").is_err());
        let js: GeneratedJs = serde_json::from_str("\"1+1\"").unwrap();
        assert_eq!(&*js, "1+1");
    }
}
