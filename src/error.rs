use thiserror::Error;

/// Library error type for vitrine operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A container or media box with a non-positive or non-finite dimension
    /// (e.g. video metadata not loaded yet). The caller should retry once the
    /// intrinsic size is known.
    #[error("invalid size {width}x{height}: dimensions must be positive and finite")]
    InvalidSize { width: f64, height: f64 },

    /// Slot mapping was asked to wrap over an empty item list.
    #[error("slot mapping requires at least one item")]
    NoItems,

    /// A background asset failed to preload. Index mapping is unaffected;
    /// the previously resolved asset stays on screen.
    #[error("failed to preload background for item {index}: {reason}")]
    Preload { index: usize, reason: String },

    /// Underlying IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML/serde configuration error.
    #[error(transparent)]
    Config(#[from] serde_yaml::Error),
}
