use std::path::PathBuf;

/// Convenience result type used across ggxcube.
pub type GgxResult<T> = Result<T, GgxError>;

/// Top-level error taxonomy used by the convolver APIs.
#[derive(thiserror::Error, Debug)]
pub enum GgxError {
    /// Input data the convolver cannot work with (wrong pixel format, not a cube map, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid run options (thread count, chunk size).
    #[error("config error: {0}")]
    Config(String),

    /// Malformed or unsupported container bytes.
    #[error("format error: {0}")]
    Format(String),

    /// File IO failure, tagged with the path that failed.
    #[error("io error on '{}': {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GgxError {
    /// Build a [`GgxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GgxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`GgxError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`GgxError::Io`] value for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
