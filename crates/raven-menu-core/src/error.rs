use compact_str::CompactString;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions raised by the menu engine
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("input contains no menu items")]
    EmptyInput,

    #[error("tag not found: {0}")]
    TagNotFound(CompactString),

    #[error("submenu '{0}' has no content")]
    NoContent(CompactString),

    #[error("clicked outside menu")]
    ClickedOutside,

    #[error("right clicked")]
    RightClicked,

    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
