//! Path normalization.
//!
//! References and catalog entries spell the same file in several ways:
//! with or without a protocol prefix, with or without the `data/` root
//! segment, and with any accepted folder-name variant in any case. This
//! module rewrites all of them into one category-relative canonical form so
//! the resolver can compare paths directly. Comparison is case-insensitive
//! at every step, but only the rewritten folder segment changes spelling;
//! everything else keeps its original case. Normalizing an already
//! canonical path is a no-op.

use crate::registry::{Category, CategoryRegistry, ROOT_SEGMENT};

/// Canonicalizes `path` for comparison within `category`.
///
/// Steps, in order: strip any registered protocol prefix; strip one leading
/// root segment; if the remainder starts with one of the category's folder
/// variants followed by `/`, rewrite that segment to the canonical variant.
/// Paths that fit none of the conventions pass through unchanged and will
/// simply never match a catalog entry.
pub fn normalize_path(registry: &CategoryRegistry, path: &str, category: Category) -> String {
    if path.is_empty() {
        return String::new();
    }

    let stripped = registry.strip_protocol(path);
    let stripped = strip_root_segment(stripped);

    for variant in registry.variants(category) {
        if let Some(rest) = strip_segment_ignore_case(stripped, variant) {
            let canonical = registry.canonical_folder(category);
            return format!("{canonical}/{rest}");
        }
    }

    stripped.to_string()
}

fn strip_root_segment(path: &str) -> &str {
    strip_segment_ignore_case(path, ROOT_SEGMENT).unwrap_or(path)
}

/// Strips `segment` plus its trailing separator from the front of `path`,
/// comparing case-insensitively. Returns the remainder on a match.
fn strip_segment_ignore_case<'a>(path: &'a str, segment: &str) -> Option<&'a str> {
    let (head, rest) = path.split_once('/')?;
    if head.eq_ignore_ascii_case(segment) {
        Some(rest)
    } else {
        None
    }
}
