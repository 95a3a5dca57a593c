//! Icon catalog.
//!
//! This module provides the closed set of Font Awesome icons as the [`Icon`]
//! enum. Each icon is bound to a glyph code point and derives its
//! presentation class from its symbolic identifier:
//!
//! - **Identifiers**: the font's class names in snake_case (`star_o`)
//! - **Code points**: the glyph's Unicode scalar value (`'\u{f006}'`)
//! - **Aliases**: secondary identifiers for the same glyph (`remove`, `close`
//!   for `times`), each a full icon reference with its own class
//!
//! # Example
//!
//! ```
//! use iconfont_core::{Icon, IconVariant};
//!
//! assert_eq!(Icon::star.style_name(), "fa fa-star");
//! assert_eq!(Icon::star.code_point(), '\u{f005}');
//!
//! let html = Icon::spinner.variant(&[IconVariant::Spin, IconVariant::Size2x]);
//! assert_eq!(html, r#"<i class="fa fa-spinner fa-spin fa-2x"></i>"#);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::canonical::{ICON_CLASS_PREFIX, canonicalize, presentation_class, suffix_matches};
use crate::markup::{IconMarkup, compose};
use crate::variant::IconVariant;
use crate::{Error, Result};

/// Generates the [`Icon`] enum, its identifier lookup and the descriptor
/// table from a single list of rows. Enum order and table order are the
/// same, so a discriminant indexes its descriptor.
macro_rules! icon_catalog {
    (@alias) => {
        None
    };
    (@alias $canonical:ident) => {
        Some(Icon::$canonical)
    };
    ($( $name:ident = $code_point:literal $(=> $canonical:ident)? ),* $(,)?) => {
        /// Font Awesome icon.
        ///
        /// Variants are named by the font's own class names (in snake_case)
        /// so the catalog reads like the icon cheatsheet. `try_` carries a
        /// trailing underscore because `try` is a Rust keyword; its class is
        /// still `fa-try`.
        ///
        /// [`Display`](std::fmt::Display) renders the icon's markup with no
        /// variants.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Icon {
            $( $name, )*
        }

        impl Icon {
            /// Every icon in catalog order, aliases included.
            pub const ALL: &'static [Icon] = &[$( Icon::$name, )*];

            /// Look up an icon by its symbolic identifier (`star_o`, `try_`).
            pub fn from_identifier(identifier: &str) -> Option<Icon> {
                match identifier {
                    $( stringify!($name) => Some(Icon::$name), )*
                    _ => None,
                }
            }
        }

        pub(crate) static DESCRIPTORS: &[IconDescriptor] = &[
            $(
                IconDescriptor {
                    identifier: stringify!($name),
                    code_point: $code_point,
                    alias_of: icon_catalog!(@alias $( $canonical )?),
                },
            )*
        ];
    };
}

mod catalog;

pub use catalog::Icon;
use catalog::DESCRIPTORS;

/// Font Awesome release the catalog is a snapshot of.
pub const FONT_AWESOME_VERSION: &str = "4.2.0";

/// Static data bound to one icon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDescriptor {
    identifier: &'static str,
    code_point: char,
    alias_of: Option<Icon>,
}

impl IconDescriptor {
    /// Symbolic identifier, unique within the catalog.
    pub fn identifier(&self) -> &'static str {
        self.identifier
    }

    /// Glyph code point in the icon font.
    pub fn code_point(&self) -> char {
        self.code_point
    }

    /// Canonical icon this identifier is an alias of, if any.
    pub fn alias_of(&self) -> Option<Icon> {
        self.alias_of
    }
}

impl Icon {
    /// Get the static descriptor for this icon.
    pub fn descriptor(self) -> &'static IconDescriptor {
        &DESCRIPTORS[self as usize]
    }

    /// Get the symbolic identifier.
    pub fn identifier(self) -> &'static str {
        self.descriptor().identifier
    }

    /// Get the glyph code point.
    pub fn code_point(self) -> char {
        self.descriptor().code_point
    }

    /// Get the HTML character reference for the glyph, e.g. `&#xf005;`.
    ///
    /// Useful for custom markup that places the glyph as text inside an
    /// element styled with the font, instead of relying on the class.
    pub fn entity(self) -> String {
        format!("&#x{:x};", u32::from(self.code_point()))
    }

    /// Get the class name suffix (`star-o` for [`Icon::star_o`]).
    pub fn class_suffix(self) -> String {
        canonicalize(self.identifier())
    }

    /// Get the presentation class, e.g. `fa fa-star-o`.
    pub fn style_name(self) -> String {
        presentation_class(self.identifier())
    }

    /// Get the canonical icon this one is an alias of.
    pub fn alias_of(self) -> Option<Icon> {
        self.descriptor().alias_of
    }

    /// Check whether this identifier is an alias.
    pub fn is_alias(self) -> bool {
        self.alias_of().is_some()
    }

    /// Resolve aliases to the canonical icon; canonical icons map to themselves.
    pub fn canonical(self) -> Icon {
        self.alias_of().unwrap_or(self)
    }

    /// All other identifiers naming the same glyph.
    pub fn aliases(self) -> impl Iterator<Item = Icon> {
        let canonical = self.canonical();
        Self::iter().filter(move |icon| *icon != self && icon.canonical() == canonical)
    }

    /// Iterate over the catalog in table order.
    pub fn iter() -> impl Iterator<Item = Icon> {
        Self::ALL.iter().copied()
    }

    /// Resolve a symbolic identifier, failing for names outside the catalog.
    pub fn resolve(identifier: &str) -> Result<Icon> {
        Self::from_identifier(identifier).ok_or_else(|| {
            tracing::debug!("Unknown icon identifier: {}", identifier);
            Error::unknown_icon(identifier)
        })
    }

    /// Look up an icon by class name, with or without the `fa-` prefix.
    pub fn from_class_name(class: &str) -> Option<Icon> {
        let suffix = class.strip_prefix(ICON_CLASS_PREFIX).unwrap_or(class);
        Self::iter().find(|icon| suffix_matches(icon.identifier(), suffix))
    }

    /// Get the icon markup with the given variants added, in order.
    ///
    /// Multiple variants can be used, but not all combinations make sense;
    /// see [`IconVariant::conflicts_with`].
    pub fn variant(self, variants: &[IconVariant]) -> String {
        compose(self, variants)
    }

    /// Start a markup builder for this icon.
    pub fn markup(self) -> IconMarkup {
        IconMarkup::new(self)
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&IconMarkup::new(*self), f)
    }
}

impl FromStr for Icon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for Icon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        Icon::resolve(&identifier).map_err(serde::de::Error::custom)
    }
}
