//! Icon display variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Result};

/// Icon variant; multiple can be applied, but not all combinations make sense.
///
/// Each variant adds one class to the icon element. The class names are
/// stored verbatim since they do not follow the icon naming convention
/// (`pull-left` has no `fa-` prefix, sizes are multipliers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconVariant {
    /// A larger icon (33% increase)
    SizeLarge,
    /// 2x sized icon
    Size2x,
    /// 3x sized icon
    Size3x,
    /// 4x sized icon
    Size4x,
    /// 5x sized icon
    Size5x,
    /// Fixed width, for aligning icons in nav lists
    FixedWidth,
    /// List bullet; the parent list needs `fa-ul`
    List,
    /// Spinning animation, most useful with [`Icon::spinner`](crate::Icon::spinner)
    Spin,
    /// Border around the icon
    Border,
    /// Float left, for pull quotes and article graphics
    PullLeft,
    /// Float right, for pull quotes and article graphics
    PullRight,
    /// Rotate 90 degrees
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees
    Rotate270,
    /// Mirror horizontally
    FlipHorizontal,
    /// Mirror vertically
    FlipVertical,
    /// Stacking container; goes on the parent element
    Stack,
    /// Regularly sized icon inside a stack
    Stack1x,
    /// Larger icon inside a stack
    Stack2x,
    /// Alternative (inverted) icon color
    Inverse,
}

/// What aspect of the icon a variant changes.
///
/// Two different variants in the same group override each other, except
/// [`VariantGroup::Stack`] where the container and its layers belong on
/// different elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantGroup {
    Size,
    Width,
    List,
    Animation,
    Border,
    Pull,
    Transform,
    Stack,
    Color,
}

impl IconVariant {
    /// Every variant in declaration order.
    pub const ALL: [IconVariant; 20] = [
        IconVariant::SizeLarge,
        IconVariant::Size2x,
        IconVariant::Size3x,
        IconVariant::Size4x,
        IconVariant::Size5x,
        IconVariant::FixedWidth,
        IconVariant::List,
        IconVariant::Spin,
        IconVariant::Border,
        IconVariant::PullLeft,
        IconVariant::PullRight,
        IconVariant::Rotate90,
        IconVariant::Rotate180,
        IconVariant::Rotate270,
        IconVariant::FlipHorizontal,
        IconVariant::FlipVertical,
        IconVariant::Stack,
        IconVariant::Stack1x,
        IconVariant::Stack2x,
        IconVariant::Inverse,
    ];

    /// Get the CSS class this variant adds.
    pub fn class_name(self) -> &'static str {
        match self {
            IconVariant::SizeLarge => "fa-lg",
            IconVariant::Size2x => "fa-2x",
            IconVariant::Size3x => "fa-3x",
            IconVariant::Size4x => "fa-4x",
            IconVariant::Size5x => "fa-5x",
            IconVariant::FixedWidth => "fa-fw",
            IconVariant::List => "fa-li",
            IconVariant::Spin => "fa-spin",
            IconVariant::Border => "fa-border",
            IconVariant::PullLeft => "pull-left",
            IconVariant::PullRight => "pull-right",
            IconVariant::Rotate90 => "fa-rotate-90",
            IconVariant::Rotate180 => "fa-rotate-180",
            IconVariant::Rotate270 => "fa-rotate-270",
            IconVariant::FlipHorizontal => "fa-flip-horizontal",
            IconVariant::FlipVertical => "fa-flip-vertical",
            IconVariant::Stack => "fa-stack",
            IconVariant::Stack1x => "fa-stack-1x",
            IconVariant::Stack2x => "fa-stack-2x",
            IconVariant::Inverse => "fa-inverse",
        }
    }

    /// Get the symbolic identifier (`SIZE_2X`).
    pub fn identifier(self) -> &'static str {
        match self {
            IconVariant::SizeLarge => "SIZE_LARGE",
            IconVariant::Size2x => "SIZE_2X",
            IconVariant::Size3x => "SIZE_3X",
            IconVariant::Size4x => "SIZE_4X",
            IconVariant::Size5x => "SIZE_5X",
            IconVariant::FixedWidth => "FIXED_WIDTH",
            IconVariant::List => "LIST",
            IconVariant::Spin => "SPIN",
            IconVariant::Border => "BORDER",
            IconVariant::PullLeft => "PULL_LEFT",
            IconVariant::PullRight => "PULL_RIGHT",
            IconVariant::Rotate90 => "ROTATE_90",
            IconVariant::Rotate180 => "ROTATE_180",
            IconVariant::Rotate270 => "ROTATE_270",
            IconVariant::FlipHorizontal => "FLIP_HORIZONTAL",
            IconVariant::FlipVertical => "FLIP_VERTICAL",
            IconVariant::Stack => "STACK",
            IconVariant::Stack1x => "STACK_1X",
            IconVariant::Stack2x => "STACK_2X",
            IconVariant::Inverse => "INVERSE",
        }
    }

    /// Get the group this variant belongs to.
    pub fn group(self) -> VariantGroup {
        match self {
            IconVariant::SizeLarge
            | IconVariant::Size2x
            | IconVariant::Size3x
            | IconVariant::Size4x
            | IconVariant::Size5x => VariantGroup::Size,
            IconVariant::FixedWidth => VariantGroup::Width,
            IconVariant::List => VariantGroup::List,
            IconVariant::Spin => VariantGroup::Animation,
            IconVariant::Border => VariantGroup::Border,
            IconVariant::PullLeft | IconVariant::PullRight => VariantGroup::Pull,
            IconVariant::Rotate90
            | IconVariant::Rotate180
            | IconVariant::Rotate270
            | IconVariant::FlipHorizontal
            | IconVariant::FlipVertical => VariantGroup::Transform,
            IconVariant::Stack | IconVariant::Stack1x | IconVariant::Stack2x => {
                VariantGroup::Stack
            }
            IconVariant::Inverse => VariantGroup::Color,
        }
    }

    /// Check whether combining this variant with `other` on one element is
    /// meaningless (one overrides the other, or they belong on different
    /// elements).
    ///
    /// Informational only: composition never rejects a combination.
    pub fn conflicts_with(self, other: IconVariant) -> bool {
        self != other && self.group() == other.group()
    }

    /// Resolve a symbolic identifier, ignoring ASCII case.
    pub fn resolve(identifier: &str) -> Result<IconVariant> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.identifier().eq_ignore_ascii_case(identifier))
            .ok_or_else(|| {
                tracing::debug!("Unknown icon variant: {}", identifier);
                Error::unknown_variant(identifier)
            })
    }

    /// Look up a variant by the class it adds (`fa-spin`, `pull-left`).
    pub fn from_class_name(class: &str) -> Option<IconVariant> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.class_name() == class)
    }
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl FromStr for IconVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

impl Serialize for IconVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for IconVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let identifier = String::deserialize(deserializer)?;
        IconVariant::resolve(&identifier).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn class_names() {
        assert_eq!(IconVariant::SizeLarge.class_name(), "fa-lg");
        assert_eq!(IconVariant::Size2x.class_name(), "fa-2x");
        assert_eq!(IconVariant::PullLeft.class_name(), "pull-left");
        assert_eq!(IconVariant::Rotate270.class_name(), "fa-rotate-270");
        assert_eq!(IconVariant::Stack1x.class_name(), "fa-stack-1x");
        assert_eq!(IconVariant::Spin.to_string(), "fa-spin");
    }

    #[test]
    fn class_names_and_identifiers_unique() {
        let classes: HashSet<_> = IconVariant::ALL.iter().map(|v| v.class_name()).collect();
        let identifiers: HashSet<_> = IconVariant::ALL.iter().map(|v| v.identifier()).collect();
        assert_eq!(classes.len(), IconVariant::ALL.len());
        assert_eq!(identifiers.len(), IconVariant::ALL.len());
    }

    #[test]
    fn resolve_identifier() {
        assert_eq!(IconVariant::resolve("SIZE_2X"), Ok(IconVariant::Size2x));
        assert_eq!(IconVariant::resolve("spin"), Ok(IconVariant::Spin));
        assert_eq!("Flip_Vertical".parse::<IconVariant>(), Ok(IconVariant::FlipVertical));
        for variant in IconVariant::ALL {
            assert_eq!(IconVariant::resolve(variant.identifier()), Ok(variant));
        }
    }

    #[test]
    fn resolve_unknown() {
        assert_eq!(
            IconVariant::resolve("SIZE_6X"),
            Err(Error::unknown_variant("SIZE_6X"))
        );
        // Class names are not identifiers.
        assert_eq!(
            IconVariant::resolve("fa-spin"),
            Err(Error::unknown_variant("fa-spin"))
        );
        assert!(IconVariant::resolve("").is_err());
    }

    #[test]
    fn from_class_name() {
        assert_eq!(IconVariant::from_class_name("fa-spin"), Some(IconVariant::Spin));
        assert_eq!(IconVariant::from_class_name("pull-right"), Some(IconVariant::PullRight));
        assert_eq!(IconVariant::from_class_name("fa-6x"), None);
    }

    #[test]
    fn conflicts() {
        assert!(IconVariant::SizeLarge.conflicts_with(IconVariant::Size3x));
        assert!(IconVariant::PullLeft.conflicts_with(IconVariant::PullRight));
        assert!(IconVariant::Rotate90.conflicts_with(IconVariant::FlipHorizontal));
        assert!(IconVariant::Stack.conflicts_with(IconVariant::Stack2x));
        assert!(!IconVariant::Spin.conflicts_with(IconVariant::Size2x));
        assert!(!IconVariant::Size2x.conflicts_with(IconVariant::Size2x));
        assert!(!IconVariant::Border.conflicts_with(IconVariant::Inverse));
    }

    #[test]
    fn serde_uses_identifier() {
        assert_eq!(
            serde_json::to_string(&IconVariant::Rotate90).unwrap(),
            "\"ROTATE_90\""
        );
        let variants: Vec<IconVariant> = serde_json::from_str(r#"["spin", "SIZE_LARGE"]"#).unwrap();
        assert_eq!(variants, vec![IconVariant::Spin, IconVariant::SizeLarge]);
    }
}
