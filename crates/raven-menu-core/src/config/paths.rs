use std::path::PathBuf;

/// Expand a leading `~` to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(path),
    }
}

/// Configuration paths for the menu
pub struct ConfigPaths {
    pub config_file: PathBuf,
}

impl ConfigPaths {
    pub fn new() -> Self {
        let config_dir = dirs::config_dir().unwrap_or_else(|| expand_tilde("~/.config"));

        Self {
            config_file: config_dir.join("raven-menu/config.toml"),
        }
    }

    /// Use `path` (as given on the command line) instead of the default file
    pub fn with_config_file(path: &str) -> Self {
        Self {
            config_file: expand_tilde(path),
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::new()
    }
}
