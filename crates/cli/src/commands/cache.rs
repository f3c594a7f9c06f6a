use clap::Subcommand;
use polyrun_cache::CacheStore;
use polyrun_config::Settings;
use polyrun_core::Result;

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Print the cache directory
    Path,
    /// Delete every cached translation
    Clear,
}

impl CacheCommands {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        let store = CacheStore::new(settings.cache_dir.clone());
        match self {
            CacheCommands::Path => {
                println!("{}", store.root().display());
                Ok(())
            }
            CacheCommands::Clear => {
                store.clear().await?;
                tracing::info!(path = %store.root().display(), "cache cleared");
                eprintln!("Cleared {}", store.root().display());
                Ok(())
            }
        }
    }
}
