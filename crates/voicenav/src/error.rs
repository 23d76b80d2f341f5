use std::path::PathBuf;

/// Unified error type for the voicenav crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The active platform adapter does not provide this operation.
    #[error("not implemented")]
    NotImplemented,

    /// Invalid input provided by the caller.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A string tag that names no known action.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The operation exists but cannot run on this host.
    #[error("unsupported: {0}")]
    Unsupported(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("path not found: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias using [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;
