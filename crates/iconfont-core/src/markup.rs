//! HTML markup composition.
//!
//! An icon renders as an empty `<i>` element whose class list selects the
//! glyph and styles it. The glyph itself comes from the font through the
//! stylesheet, so the code point is not part of the markup.

use std::fmt;

use crate::icon::Icon;
use crate::variant::IconVariant;

/// Compose the markup for an icon with variants applied in order.
///
/// Variants are neither de-duplicated nor checked for compatibility.
///
/// ```
/// use iconfont_core::{Icon, IconVariant, compose};
///
/// assert_eq!(compose(Icon::star, &[]), r#"<i class="fa fa-star"></i>"#);
/// assert_eq!(
///     compose(Icon::spinner, &[IconVariant::Spin, IconVariant::Size2x]),
///     r#"<i class="fa fa-spinner fa-spin fa-2x"></i>"#,
/// );
/// ```
pub fn compose(icon: Icon, variants: &[IconVariant]) -> String {
    IconMarkup::new(icon)
        .with_all(variants.iter().copied())
        .to_string()
}

/// Builder for icon markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconMarkup {
    icon: Icon,
    variants: Vec<IconVariant>,
}

impl IconMarkup {
    /// Create markup for an icon with no variants.
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            variants: Vec::new(),
        }
    }

    /// Append a variant.
    pub fn with(mut self, variant: IconVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Append several variants, keeping their order.
    pub fn with_all(mut self, variants: impl IntoIterator<Item = IconVariant>) -> Self {
        self.variants.extend(variants);
        self
    }

    /// Get the icon.
    pub fn icon(&self) -> Icon {
        self.icon
    }

    /// Get the variants in application order.
    pub fn variants(&self) -> &[IconVariant] {
        &self.variants
    }

    /// Get the value of the class attribute.
    pub fn class_list(&self) -> String {
        let mut classes = self.icon.style_name();
        for variant in &self.variants {
            classes.push(' ');
            classes.push_str(variant.class_name());
        }
        classes
    }
}

impl From<Icon> for IconMarkup {
    fn from(icon: Icon) -> Self {
        Self::new(icon)
    }
}

impl fmt::Display for IconMarkup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<i class=\"{}\"></i>", self.class_list())
    }
}
