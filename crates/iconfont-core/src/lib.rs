//! Typed Font Awesome icon catalog for HTML content.
//!
//! This crate maps the Font Awesome icon font to Rust values:
//!
//! - **Icons**: [`Icon`], a closed enum of every glyph and alias, each bound to
//!   its code point and presentation class
//! - **Variants**: [`IconVariant`], size, rotation, animation and stacking
//!   modifiers, each bound to a literal class
//! - **Markup**: [`compose`] and [`IconMarkup`], turning an icon and its
//!   variants into the `<i class="...">` fragment a stylesheet renders
//!
//! Names that arrive as text are resolved with [`Icon::resolve`] and
//! [`IconVariant::resolve`], which fail with [`Error`] outside the catalog.
//!
//! # Example
//!
//! ```
//! use iconfont_core::{Icon, IconVariant};
//!
//! let html = Icon::refresh
//!     .markup()
//!     .with(IconVariant::Spin)
//!     .with(IconVariant::SizeLarge)
//!     .to_string();
//! assert_eq!(html, r#"<i class="fa fa-refresh fa-spin fa-lg"></i>"#);
//! ```

pub mod canonical;
pub mod icon;
pub mod markup;
pub mod variant;

mod error;

pub use canonical::{canonicalize, presentation_class};
pub use error::{Error, Result};
pub use icon::{FONT_AWESOME_VERSION, Icon, IconDescriptor};
pub use markup::{IconMarkup, compose};
pub use variant::{IconVariant, VariantGroup};

// Catalog values are shared freely across threads.
static_assertions::assert_impl_all!(Icon: Copy, Send, Sync);
static_assertions::assert_impl_all!(IconVariant: Copy, Send, Sync);
static_assertions::assert_impl_all!(IconDescriptor: Send, Sync);
