//! Stylesheet installation for the iconfont icon catalog.
//!
//! Icon markup only renders once the page has loaded the icon font's
//! stylesheet. This crate provides:
//!
//! - **Resources**: [`StylesheetResource`], the CDN default or a location of
//!   the application's choosing
//! - **Sinks**: [`StyleSink`], the rendering context a stylesheet is added to,
//!   with [`PageStyles`] as an in-memory implementation
//! - **Installation**: [`install_default`] and [`install_from`]
//! - **Configuration**: [`IconFontConfig`], the stylesheet location read from TOML
//!
//! # Example
//!
//! ```
//! use iconfont_style::{IconFontConfig, PageStyles};
//!
//! let config = IconFontConfig::from_toml_str(r#"
//! [stylesheet]
//! theme = "font-awesome/css/font-awesome.min.css"
//! "#)?;
//!
//! let mut page = PageStyles::new();
//! config.install(&mut page)?;
//! assert_eq!(
//!     page.to_link_tags(),
//!     r#"<link rel="stylesheet" href="font-awesome/css/font-awesome.min.css">"#,
//! );
//! # Ok::<(), iconfont_style::Error>(())
//! ```

pub mod config;
pub mod loader;
pub mod resource;
pub mod sink;

mod error;

pub use config::{IconFontConfig, StylesheetConfig};
pub use error::{Error, Result};
pub use loader::{install_default, install_from};
pub use resource::{CDN_STYLESHEET, StylesheetResource};
pub use sink::{PageStyles, SharedSink, StyleSink};
