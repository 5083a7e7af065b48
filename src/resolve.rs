//! Reference resolution against the catalog.
//!
//! Existence is decided on the normalized category-relative form: same file
//! name (case-insensitive) and the same subfolder structure. A file name
//! match with a different structure is not a match and never ends the scan
//! early; a better-placed entry with the same name may still exist further
//! along. Only exhausting the category's entries makes a reference
//! missing.

use crate::catalog::AssetCatalog;
use crate::normalize::normalize_path;
use crate::registry::{Category, CategoryRegistry};

/// Shape a normalized reference path implies on disk.
#[derive(Debug, PartialEq, Eq)]
struct PathShape<'a> {
    file_name: &'a str,
    /// Subfolder segment between the category folder and the file, if the
    /// path is deep enough to have one.
    subfolder: Option<&'a str>,
}

impl<'a> PathShape<'a> {
    /// Splits `category folder / [subfolder /] file`. Fewer than three
    /// segments means the file sits directly in the category folder.
    fn of(normalized: &'a str) -> Self {
        let segments: Vec<&str> = normalized.split('/').collect();
        PathShape {
            file_name: segments.last().copied().unwrap_or(normalized),
            subfolder: if segments.len() > 2 {
                Some(segments[1])
            } else {
                None
            },
        }
    }
}

/// Whether `path` names a file present in the catalog with matching
/// structure. An empty path is vacuously present.
pub fn reference_exists(
    registry: &CategoryRegistry,
    catalog: &AssetCatalog,
    category: Category,
    path: &str,
) -> bool {
    if path.is_empty() {
        return true;
    }

    let normalized = normalize_path(registry, path, category);
    let shape = PathShape::of(&normalized);

    for entry in catalog.entries(category) {
        if !entry.file_name().eq_ignore_ascii_case(shape.file_name) {
            continue;
        }
        match (shape.subfolder, entry.in_subfolder) {
            (None, false) => return true,
            (Some(wanted), true) if wanted.eq_ignore_ascii_case(&entry.subfolder) => {
                return true;
            }
            // Structure differs; keep scanning, a matching entry may
            // exist elsewhere in the category.
            _ => continue,
        }
    }

    false
}
