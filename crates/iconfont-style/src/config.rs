//! Icon font configuration.
//!
//! The stylesheet location is usually a deployment decision, so it can be
//! read from a TOML file instead of being hard-coded:
//!
//! ```toml
//! [stylesheet]
//! theme = "font-awesome/css/font-awesome.min.css"
//! ```
//!
//! or
//!
//! ```toml
//! [stylesheet]
//! url = "https://static.example.com/fa/4.2.0/font-awesome.min.css"
//! ```
//!
//! Without a `[stylesheet]` table (or with an empty one) the CDN default is used.

use std::path::Path;

use serde::Deserialize;

use crate::loader::install_from;
use crate::resource::StylesheetResource;
use crate::sink::StyleSink;
use crate::{Error, Result};

/// Top-level icon font configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IconFontConfig {
    /// Where to load the stylesheet from.
    #[serde(default)]
    pub stylesheet: Option<StylesheetConfig>,
}

/// The `[stylesheet]` table. At most one of the keys may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylesheetConfig {
    /// Absolute stylesheet URL.
    pub url: Option<String>,
    /// Stylesheet path relative to the theme directory.
    pub theme: Option<String>,
}

impl IconFontConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(toml::from_str(toml)?)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Resolve the configured stylesheet location.
    pub fn resource(&self) -> Result<StylesheetResource> {
        let Some(stylesheet) = &self.stylesheet else {
            return StylesheetResource::cdn();
        };

        match (&stylesheet.url, &stylesheet.theme) {
            (None, None) => StylesheetResource::cdn(),
            (Some(url), None) => StylesheetResource::external(url),
            (None, Some(theme)) => StylesheetResource::theme(theme.as_str()),
            (Some(_), Some(_)) => Err(Error::invalid_resource(
                "stylesheet sets both 'url' and 'theme'",
            )),
        }
    }

    /// Install the configured stylesheet into a sink.
    pub fn install<S: StyleSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        install_from(sink, &self.resource()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::resource::CDN_STYLESHEET;
    use crate::sink::PageStyles;

    #[test]
    fn empty_config_uses_cdn() {
        let config = IconFontConfig::from_toml_str("").unwrap();
        assert_eq!(config, IconFontConfig::default());
        assert_eq!(config.resource().unwrap().href(), CDN_STYLESHEET);

        let config = IconFontConfig::from_toml_str("[stylesheet]").unwrap();
        assert_eq!(config.resource().unwrap().href(), CDN_STYLESHEET);
    }

    #[test]
    fn theme_config() {
        let config = IconFontConfig::from_toml_str(
            r#"
            [stylesheet]
            theme = "font-awesome/css/font-awesome.min.css"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.resource().unwrap(),
            StylesheetResource::Theme("font-awesome/css/font-awesome.min.css".to_string())
        );
    }

    #[test]
    fn url_config() {
        let config = IconFontConfig::from_toml_str(
            r#"
            [stylesheet]
            url = "https://static.example.com/fa.css"
            "#,
        )
        .unwrap();

        let resource = config.resource().unwrap();
        assert!(resource.is_external());
        assert_eq!(resource.href(), "https://static.example.com/fa.css");
    }

    #[test]
    fn conflicting_keys_rejected() {
        let config = IconFontConfig::from_toml_str(
            r#"
            [stylesheet]
            url = "https://static.example.com/fa.css"
            theme = "fa.css"
            "#,
        )
        .unwrap();

        assert!(matches!(config.resource(), Err(Error::InvalidResource(_))));
    }

    #[test]
    fn unknown_keys_rejected() {
        let result = IconFontConfig::from_toml_str(
            r#"
            [stylesheet]
            href = "fa.css"
            "#,
        );
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn from_file_and_install() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[stylesheet]").unwrap();
        writeln!(file, "theme = \"fa/fa.css\"").unwrap();

        let config = IconFontConfig::from_file(file.path()).unwrap();
        let mut page = PageStyles::new();
        config.install(&mut page).unwrap();
        config.install(&mut page).unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page.to_link_tags(), "<link rel=\"stylesheet\" href=\"fa/fa.css\">");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = IconFontConfig::from_file(dir.path().join("missing.toml"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
