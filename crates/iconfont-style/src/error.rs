//! Error types for stylesheet installation.

use std::path::PathBuf;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or installing the icon stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file I/O error.
    #[error("Failed to read icon font config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML or does not match the schema.
    #[error("Invalid icon font config: {0}")]
    Config(#[from] toml::de::Error),

    /// Stylesheet URL could not be parsed.
    #[error("Invalid stylesheet URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Stylesheet resource is malformed or ambiguous.
    #[error("Invalid stylesheet resource: {0}")]
    InvalidResource(String),

    /// The host rendering context refused the stylesheet.
    #[error("Host failed to add stylesheet: {0}")]
    Host(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a URL error.
    pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            source,
        }
    }

    /// Create a resource error.
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource(message.into())
    }

    /// Create a host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }
}
