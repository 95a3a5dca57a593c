//! Derivation of presentation class names from symbolic identifiers.
//!
//! Icon identifiers are the font's class names written in snake_case, so the
//! class name is recovered by a pure rewrite of the identifier. Identifiers
//! that would collide with a Rust keyword carry a trailing underscore
//! (`try_`), which is dropped before hyphenation so the emitted class matches
//! the stylesheet (`fa-try`).

/// Class carried by every icon element; selects the icon font itself.
pub const BASE_CLASS: &str = "fa";

/// Prefix of the per-glyph class.
pub const ICON_CLASS_PREFIX: &str = "fa-";

/// Trailing marker on identifiers that collide with Rust keywords.
pub const RESERVED_MARKER: char = '_';

/// Convert a symbolic icon identifier into its class suffix.
///
/// Only a single trailing [`RESERVED_MARKER`] is treated as the marker; every
/// other underscore is a word separator.
///
/// The input is expected to be a catalog identifier such as
/// [`Icon::identifier`](crate::Icon::identifier). Other text is rewritten
/// mechanically without validation, so `""` yields `""`.
///
/// # Examples
///
/// ```
/// use iconfont_core::canonicalize;
///
/// assert_eq!(canonicalize("arrow_circle_o_right"), "arrow-circle-o-right");
/// assert_eq!(canonicalize("try_"), "try");
/// ```
pub fn canonicalize(identifier: &str) -> String {
    identifier
        .strip_suffix(RESERVED_MARKER)
        .unwrap_or(identifier)
        .replace('_', "-")
}

/// Full presentation class (`fa fa-<suffix>`) for a symbolic identifier.
///
/// Like [`canonicalize`], this expects a catalog identifier; use
/// [`Icon::style_name`](crate::Icon::style_name) when starting from an icon.
pub fn presentation_class(identifier: &str) -> String {
    format!("{BASE_CLASS} {ICON_CLASS_PREFIX}{}", canonicalize(identifier))
}

/// Check whether `identifier` canonicalizes to `suffix`, without allocating.
pub(crate) fn suffix_matches(identifier: &str, suffix: &str) -> bool {
    let name = identifier.strip_suffix(RESERVED_MARKER).unwrap_or(identifier);
    name.len() == suffix.len()
        && name
            .bytes()
            .zip(suffix.bytes())
            .all(|(a, b)| if a == b'_' { b == b'-' } else { a == b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_is_unchanged() {
        assert_eq!(canonicalize("star"), "star");
        assert_eq!(canonicalize("html5"), "html5");
    }

    #[test]
    fn separators_become_hyphens() {
        assert_eq!(canonicalize("star_half_o"), "star-half-o");
        assert_eq!(canonicalize("sort_amount_desc"), "sort-amount-desc");
    }

    #[test]
    fn reserved_marker_is_stripped() {
        assert_eq!(canonicalize("try_"), "try");
        assert_eq!(presentation_class("try_"), "fa fa-try");
    }

    #[test]
    fn marker_only_stripped_at_end() {
        // Internal underscores and lookalike fragments stay separators.
        assert_eq!(canonicalize("try_it"), "try-it");
        assert_eq!(canonicalize("file_FI_text"), "file-FI-text");
        assert_eq!(canonicalize("a__b"), "a--b");
        // Only one trailing marker is removed.
        assert_eq!(canonicalize("type__"), "type-");
    }

    #[test]
    fn suffix_matching_follows_canonicalize() {
        assert!(suffix_matches("star_half_o", "star-half-o"));
        assert!(suffix_matches("try_", "try"));
        assert!(suffix_matches("html5", "html5"));
        assert!(!suffix_matches("star_o", "star_o"));
        assert!(!suffix_matches("try_", "try-"));
        assert!(!suffix_matches("star", "star-o"));
        for (identifier, suffix) in [("a__b", "a--b"), ("type__", "type-"), ("glass", "glass")] {
            assert_eq!(suffix_matches(identifier, suffix), canonicalize(identifier) == suffix);
        }
    }

    #[test]
    fn unvalidated_input_is_rewritten_mechanically() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(presentation_class(""), "fa fa-");
    }

    #[test]
    fn presentation_class_has_base_class() {
        assert_eq!(presentation_class("star"), "fa fa-star");
        assert_eq!(presentation_class("th_large"), "fa fa-th-large");
    }
}
