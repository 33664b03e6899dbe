use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong outside of pure presentation logic.
///
/// All of these degrade gracefully: a photo that fails to read or decode
/// leaves its cell blacked out until the next cycle, an unreadable config
/// file falls back to defaults.
#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
