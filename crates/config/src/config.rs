//! Resolved configuration values
//!
//! `Settings` is immutable after construction and is what the CLI hands to the
//! cache, translation, and sandbox layers. `TranslatorConfig` is the subset the
//! translation service reads.

use polyrun_core::{DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_RUNTIME, DEFAULT_TIMEOUT_SECS};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Connection settings for the completion endpoint.
///
/// `base_url` and `model` stay optional here; [`TranslatorConfig::base_url`]
/// and [`TranslatorConfig::model`] apply the documented defaults. The API key
/// has no default: translation refuses to start without it.
#[derive(Clone, PartialEq, Eq)]
pub struct TranslatorConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub timeout: Duration,
}

impl TranslatorConfig {
    /// The credential, if present and not blank
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .filter(|model| !model.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Builder-style setter, mostly for tests
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

// Hand-written so the credential never ends up in logs
impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub translator: TranslatorConfig,
    /// Explicit language hint; overrides extension inference
    pub language: Option<String>,
    pub no_cache: bool,
    pub print_js: bool,
    pub force_llm: bool,
    /// JavaScript runtime executable used by the sandbox
    pub runtime: String,
    pub cache_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translator: TranslatorConfig::default(),
            language: None,
            no_cache: false,
            print_js: false,
            force_llm: false,
            runtime: DEFAULT_RUNTIME.to_string(),
            cache_dir: polyrun_utils::XdgPaths::translations_dir(),
        }
    }
}
