use std::env;
use std::path::PathBuf;

/// XDG cache locations for polyrun
pub struct XdgPaths;

impl XdgPaths {
    /// `$XDG_CACHE_HOME/polyrun`, falling back to `~/.cache/polyrun`
    pub fn cache_dir() -> PathBuf {
        env::var_os("XDG_CACHE_HOME")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
            .unwrap_or_else(|| PathBuf::from(".cache"))
            .join("polyrun")
    }

    /// Default root of the translation cache
    pub fn translations_dir() -> PathBuf {
        Self::cache_dir().join("translations")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_translations_dir_follows_xdg_cache_home() {
        let original = env::var_os("XDG_CACHE_HOME");

        env::set_var("XDG_CACHE_HOME", "/tmp/cache");
        assert_eq!(XdgPaths::cache_dir(), PathBuf::from("/tmp/cache/polyrun"));
        assert_eq!(
            XdgPaths::translations_dir(),
            PathBuf::from("/tmp/cache/polyrun/translations")
        );

        env::set_var("XDG_CACHE_HOME", "");
        assert!(XdgPaths::translations_dir().ends_with(".cache/polyrun/translations"));

        match original {
            Some(val) => env::set_var("XDG_CACHE_HOME", val),
            None => env::remove_var("XDG_CACHE_HOME"),
        }
    }
}
