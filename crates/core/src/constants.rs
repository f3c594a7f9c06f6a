/// Constants used throughout the polyrun codebase
// Source identifiers
pub const STDIN_SOURCE_ID: &str = "<stdin>";
pub const EVAL_SOURCE_ID: &str = "<eval>";
pub const UNKNOWN_LANGUAGE: &str = "unknown";
pub const JAVASCRIPT_LANGUAGE: &str = "javascript";

// Bumped whenever the prompt template changes so old translations stop matching
pub const PROMPT_VERSION: &str = "v1";

// Translation defaults
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Execution defaults
pub const DEFAULT_RUNTIME: &str = "node";
pub const SCRIPT_FILE_NAME: &str = "main.js";
pub const WORKSPACE_PREFIX: &str = "polyrun-";

// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "polyrun.json";

// Environment variable names
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";
pub const POLYRUN_MODEL_VAR: &str = "POLYRUN_MODEL";
pub const POLYRUN_LANG_VAR: &str = "POLYRUN_LANG";
pub const POLYRUN_NO_CACHE_VAR: &str = "POLYRUN_NO_CACHE";
pub const POLYRUN_PRINT_JS_VAR: &str = "POLYRUN_PRINT_JS";
pub const POLYRUN_FORCE_LLM_VAR: &str = "POLYRUN_FORCE_LLM";
pub const POLYRUN_TIMEOUT_SECS_VAR: &str = "POLYRUN_TIMEOUT_SECS";
pub const POLYRUN_RUNTIME_VAR: &str = "POLYRUN_RUNTIME";
pub const POLYRUN_CACHE_DIR_VAR: &str = "POLYRUN_CACHE_DIR";
pub const POLYRUN_LOG_VAR: &str = "POLYRUN_LOG";
