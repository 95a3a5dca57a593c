//! Stylesheet resource handles.

use std::fmt;

use url::Url;

use crate::{Error, Result};

/// Versioned CDN location of the Font Awesome stylesheet matching the catalog.
pub const CDN_STYLESHEET: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.2.0/css/font-awesome.min.css";

/// Location of an icon font stylesheet.
///
/// Production deployments usually serve a trimmed font subset from their own
/// theme instead of the CDN, which is what [`StylesheetResource::Theme`] is for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StylesheetResource {
    /// Absolute URL, fetched by the browser.
    External(Url),
    /// Path relative to the host's theme directory.
    Theme(String),
}

impl StylesheetResource {
    /// The default CDN stylesheet.
    pub fn cdn() -> Result<Self> {
        Self::external(CDN_STYLESHEET)
    }

    /// Create an external resource from an absolute URL.
    pub fn external(url: &str) -> Result<Self> {
        Url::parse(url)
            .map(Self::External)
            .map_err(|e| Error::invalid_url(url, e))
    }

    /// Create a theme-relative resource.
    ///
    /// The path is kept as given. It must be non-blank and relative: absolute
    /// paths (`/fa.css`, `\\fa.css`, `C:\\fa.css`) and `..` segments would
    /// leave the theme directory and are rejected.
    pub fn theme(path: impl Into<String>) -> Result<Self> {
        let path = path.into();

        if path.trim().is_empty() {
            return Err(Error::invalid_resource("theme path is empty"));
        }
        if is_absolute_path(&path) || path.split(['/', '\\']).any(|segment| segment == "..") {
            return Err(Error::invalid_resource(format!(
                "theme path '{}' leaves the theme directory",
                path
            )));
        }

        Ok(Self::Theme(path))
    }

    /// Get the reference a page uses to load the stylesheet.
    pub fn href(&self) -> &str {
        match self {
            StylesheetResource::External(url) => url.as_str(),
            StylesheetResource::Theme(path) => path,
        }
    }

    /// Check whether the stylesheet is fetched from outside the application.
    pub fn is_external(&self) -> bool {
        matches!(self, StylesheetResource::External(_))
    }
}

/// Root-relative (`/`, `\\`) or drive-prefixed (`C:`) paths.
fn is_absolute_path(path: &str) -> bool {
    let bytes = path.as_bytes();
    matches!(bytes.first(), Some(b'/' | b'\\'))
        || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

impl fmt::Display for StylesheetResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.href())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdn_is_versioned() {
        let cdn = StylesheetResource::cdn().unwrap();
        assert!(cdn.is_external());
        assert_eq!(cdn.href(), CDN_STYLESHEET);
        assert!(cdn.href().contains(iconfont_core::FONT_AWESOME_VERSION));
    }

    #[test]
    fn external_requires_absolute_url() {
        assert!(StylesheetResource::external("https://example.com/fa.css").is_ok());
        let err = StylesheetResource::external("font-awesome.css").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn theme_paths() {
        let theme = StylesheetResource::theme("font-awesome/css/font-awesome.min.css").unwrap();
        assert!(!theme.is_external());
        assert_eq!(theme.href(), "font-awesome/css/font-awesome.min.css");
        assert_eq!(theme.to_string(), theme.href());

        assert!(matches!(
            StylesheetResource::theme("   "),
            Err(Error::InvalidResource(_))
        ));
        assert!(matches!(
            StylesheetResource::theme("../secrets/fa.css"),
            Err(Error::InvalidResource(_))
        ));
        // Dots inside a name are fine.
        assert!(StylesheetResource::theme("fa..min.css").is_ok());
    }

    #[test]
    fn theme_rejects_absolute_paths() {
        for path in ["/etc/fa.css", "\\\\server\\fa.css", "C:\\fa.css", "c:/fa.css"] {
            assert!(
                matches!(StylesheetResource::theme(path), Err(Error::InvalidResource(_))),
                "{path}"
            );
        }
        // Paths are not silently rewritten.
        assert_eq!(
            StylesheetResource::theme("fa/fa.css ").unwrap().href(),
            "fa/fa.css "
        );
    }
}
