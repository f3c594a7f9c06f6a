use clap::{Args, Subcommand};
use polyrun_config::{CliOverrides, ConfigLoader, Settings};
use polyrun_core::Result;
use std::path::PathBuf;

pub mod cache;
pub mod eval;
pub mod run;

use self::cache::CacheCommands;

#[derive(Subcommand)]
pub enum Commands {
    /// Translate a source file to JavaScript and run it (the default)
    Run(RunArgs),

    /// Run a JavaScript snippet directly, without translation
    Eval {
        /// JavaScript source to run
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Inspect or clear the translation cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

/// Options shared by every command that resolves settings
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to a polyrun.json config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Source file to run; reads standard input when omitted or `-`
    pub file: Option<PathBuf>,

    /// Language of the source (inferred from the file extension otherwise)
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Model used for translation
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Skip the translation cache entirely
    #[arg(long)]
    pub no_cache: bool,

    /// Print the generated JavaScript to stderr before running it
    #[arg(long)]
    pub print_js: bool,

    /// Translate JavaScript sources instead of running them directly
    #[arg(long)]
    pub force_llm: bool,

    /// Write the generated JavaScript to PATH instead of running it
    #[arg(long, value_name = "PATH")]
    pub emit: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            lang: self.lang.clone(),
            no_cache: self.no_cache.then_some(true),
            print_js: self.print_js.then_some(true),
            force_llm: self.force_llm.then_some(true),
        }
    }
}

/// Resolve settings from the config file, the environment and `overrides`
pub fn load_settings(config: &ConfigArgs, overrides: CliOverrides) -> Result<Settings> {
    ConfigLoader::new()
        .config_file(config.config.clone())
        .overrides(overrides)
        .load()
}

impl Commands {
    pub async fn execute(self, config: &ConfigArgs) -> Result<()> {
        match self {
            Commands::Run(args) => {
                let settings = load_settings(config, args.overrides())?;
                run::execute(&args, &settings).await
            }
            Commands::Eval { code } => {
                let settings = load_settings(config, CliOverrides::default())?;
                eval::execute(&code, &settings).await
            }
            Commands::Cache { command } => {
                let settings = load_settings(config, CliOverrides::default())?;
                command.execute(&settings).await
            }
        }
    }
}
