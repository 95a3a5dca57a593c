//! Error types for icon and variant resolution.

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a symbolic name is outside the closed catalogs.
///
/// Code that uses [`Icon`](crate::Icon) and [`IconVariant`](crate::IconVariant)
/// values directly never sees these; they only surface when resolving names
/// that arrive as text (configuration, templates, user input).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The icon identifier is not part of the catalog.
    #[error("Unknown icon '{identifier}'")]
    UnknownIcon { identifier: String },

    /// The variant identifier is not part of the catalog.
    #[error("Unknown icon variant '{identifier}'")]
    UnknownVariant { identifier: String },
}

impl Error {
    /// Create an unknown icon error.
    pub fn unknown_icon(identifier: impl Into<String>) -> Self {
        Self::UnknownIcon {
            identifier: identifier.into(),
        }
    }

    /// Create an unknown variant error.
    pub fn unknown_variant(identifier: impl Into<String>) -> Self {
        Self::UnknownVariant {
            identifier: identifier.into(),
        }
    }
}
