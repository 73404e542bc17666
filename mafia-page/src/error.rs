//! Error types

use std::path::PathBuf;

/// Errors that can occur while loading a [`crate::PageConfig`].
///
/// Page behaviours themselves never fail; malformed markup degrades to
/// defaults instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for [`crate::PageConfig`].
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// `countdown.tick_ms` is zero; the ticker needs a non-zero period.
    #[error("Invalid config: countdown.tick_ms must be greater than 0")]
    ZeroTickPeriod,
}
