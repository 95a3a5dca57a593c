//! Font Awesome icons as typed Rust values.
//!
//! Use the icon font to embed scalable icons anywhere HTML content is
//! accepted. The icons are glyphs, so they scale and take colors like the
//! surrounding text.
//!
//! By default [`install_default`](style::install_default) loads the font and
//! stylesheet from a CDN so pages can use icons right away. Production
//! deployments usually serve a trimmed font subset instead and point
//! [`install_from`](style::install_from) at it.
//!
//! # Example
//!
//! ```
//! use iconfont::prelude::*;
//!
//! let mut page = PageStyles::new();
//! install_default(&mut page)?;
//!
//! let html = Icon::spinner.variant(&[IconVariant::Spin, IconVariant::Size2x]);
//! assert_eq!(html, r#"<i class="fa fa-spinner fa-spin fa-2x"></i>"#);
//! # Ok::<(), iconfont::style::Error>(())
//! ```

pub use iconfont_core as catalog;
pub use iconfont_style as style;

pub use iconfont_core::{
    FONT_AWESOME_VERSION, Icon, IconDescriptor, IconMarkup, IconVariant, VariantGroup,
    canonicalize, compose,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use iconfont_core::{Icon, IconMarkup, IconVariant, compose};
    pub use iconfont_style::{
        IconFontConfig, PageStyles, StyleSink, StylesheetResource, install_default, install_from,
    };
}
