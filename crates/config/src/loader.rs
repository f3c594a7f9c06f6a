//! Configuration loader for polyrun
//!
//! Collects the three configuration sources (config file, environment, CLI
//! overrides) and folds them into a [`Settings`] value.

use crate::config::{Settings, TranslatorConfig};
use polyrun_core::{
    constants::*,
    Error, Result,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Contents of `polyrun.json`. Unknown keys are rejected.
///
/// The API key is deliberately absent: credentials only come from the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub lang: Option<String>,
    pub no_cache: Option<bool>,
    pub print_js: Option<bool>,
    pub force_llm: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub runtime: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

/// Values read from environment variables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub lang: Option<String>,
    pub no_cache: Option<bool>,
    pub print_js: Option<bool>,
    pub force_llm: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub runtime: Option<String>,
    pub cache_dir: Option<PathBuf>,
}

impl EnvConfig {
    /// Read from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let flag = |name: &str| parse_or_warn(name, non_empty(name)?, parse_bool);
        let seconds =
            |name: &str| parse_or_warn(name, non_empty(name)?, |v| v.trim().parse().ok());

        Self {
            api_key: non_empty(OPENAI_API_KEY_VAR),
            base_url: non_empty(OPENAI_BASE_URL_VAR),
            model: non_empty(POLYRUN_MODEL_VAR),
            lang: non_empty(POLYRUN_LANG_VAR),
            no_cache: flag(POLYRUN_NO_CACHE_VAR),
            print_js: flag(POLYRUN_PRINT_JS_VAR),
            force_llm: flag(POLYRUN_FORCE_LLM_VAR),
            timeout_secs: seconds(POLYRUN_TIMEOUT_SECS_VAR),
            runtime: non_empty(POLYRUN_RUNTIME_VAR),
            cache_dir: non_empty(POLYRUN_CACHE_DIR_VAR).map(PathBuf::from),
        }
    }
}

/// Values supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub lang: Option<String>,
    pub no_cache: Option<bool>,
    pub print_js: Option<bool>,
    pub force_llm: Option<bool>,
}

/// Load `polyrun.json`.
///
/// With an explicit path the file must exist. Without one, `<cwd>/polyrun.json`
/// is used when present and `Ok(None)` is returned otherwise.
pub fn load_file_config(explicit_path: Option<&Path>, cwd: &Path) -> Result<Option<FileConfig>> {
    let path = match explicit_path {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(None);
            }
            candidate
        }
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|e| Error::file_system(path.clone(), "read config file", e))?;
    let parsed: FileConfig = serde_json::from_str(&raw).map_err(|e| {
        Error::configuration(format!("failed to parse {}: {e}", path.display()))
    })?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(parsed))
}

/// Fold the sources into settings, highest precedence first
pub fn resolve_settings(
    cli: &CliOverrides,
    env_cfg: &EnvConfig,
    file_cfg: Option<&FileConfig>,
) -> Settings {
    let base = Settings::default();

    let timeout_secs = env_cfg
        .timeout_secs
        .or_else(|| file_cfg.and_then(|c| c.timeout_secs))
        .filter(|secs| *secs > 0);

    let translator = TranslatorConfig {
        api_key: env_cfg.api_key.clone(),
        base_url: cli
            .base_url
            .clone()
            .or_else(|| env_cfg.base_url.clone())
            .or_else(|| file_cfg.and_then(|c| c.base_url.clone())),
        model: cli
            .model
            .clone()
            .or_else(|| env_cfg.model.clone())
            .or_else(|| file_cfg.and_then(|c| c.model.clone())),
        timeout: timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(base.translator.timeout),
    };

    Settings {
        translator,
        language: cli
            .lang
            .clone()
            .or_else(|| env_cfg.lang.clone())
            .or_else(|| file_cfg.and_then(|c| c.lang.clone()))
            .or(base.language),
        no_cache: cli
            .no_cache
            .or(env_cfg.no_cache)
            .or(file_cfg.and_then(|c| c.no_cache))
            .unwrap_or(base.no_cache),
        print_js: cli
            .print_js
            .or(env_cfg.print_js)
            .or(file_cfg.and_then(|c| c.print_js))
            .unwrap_or(base.print_js),
        force_llm: cli
            .force_llm
            .or(env_cfg.force_llm)
            .or(file_cfg.and_then(|c| c.force_llm))
            .unwrap_or(base.force_llm),
        runtime: env_cfg
            .runtime
            .clone()
            .or_else(|| file_cfg.and_then(|c| c.runtime.clone()))
            .unwrap_or(base.runtime),
        cache_dir: env_cfg
            .cache_dir
            .clone()
            .or_else(|| file_cfg.and_then(|c| c.cache_dir.clone()))
            .unwrap_or(base.cache_dir),
    }
}

/// Configuration loader that handles all startup configuration
#[derive(Debug, Default)]
pub struct ConfigLoader {
    directory: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: CliOverrides,
    env: Option<EnvConfig>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for `polyrun.json` (defaults to the current directory)
    pub fn directory(mut self, dir: PathBuf) -> Self {
        self.directory = Some(dir);
        self
    }

    /// Explicit config file; must exist
    pub fn config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    pub fn overrides(mut self, overrides: CliOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Use these values instead of reading the process environment
    pub fn env(mut self, env: EnvConfig) -> Self {
        self.env = Some(env);
        self
    }

    pub fn load(self) -> Result<Settings> {
        let working_dir = match self.directory {
            Some(dir) => dir,
            None => std::env::current_dir()
                .map_err(|e| Error::file_system(".", "get current directory", e))?,
        };

        let file_cfg = load_file_config(self.config_file.as_deref(), &working_dir)?;
        let env_cfg = self.env.unwrap_or_else(EnvConfig::from_env);

        Ok(resolve_settings(&self.overrides, &env_cfg, file_cfg.as_ref()))
    }
}

/// Parse an environment value; an unparsable value is ignored with a warning
fn parse_or_warn<T>(name: &str, raw: String, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    let parsed = parse(&raw);
    if parsed.is_none() {
        tracing::warn!(
            variable = name,
            value = %raw,
            "ignoring invalid value for environment variable"
        );
    }
    parsed
}

fn parse_bool(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
