//! Directory scan building the [`AssetCatalog`].
//!
//! One recursive walk over the root. A file belongs to a category when any
//! segment of its parent's root-relative path spells one of that category's
//! folder variants, case-insensitively; the first matching segment (left to
//! right) fixes the category and stops the search, so a file is never
//! counted twice. Folders matching no category are ignored along with
//! their files.

use crate::catalog::{AssetCatalog, CatalogEntry};
use crate::registry::{ASSET_EXTENSION, Category, CategoryRegistry, ROOT_SEGMENT};
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

impl AssetCatalog {
    /// Scans `root` and classifies every `.warudo` file beneath it.
    ///
    /// A root that does not exist is not an error: the scan degrades to an
    /// empty catalog and every existence check against it reports missing.
    pub fn scan(registry: &CategoryRegistry, root: &Path) -> Result<Self> {
        let mut by_category: BTreeMap<Category, Vec<CatalogEntry>> = Category::ALL
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();

        if !root.is_dir() {
            return Ok(Self::new(root.to_path_buf(), by_category));
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok());

        for entry in walker {
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|ext| ext.to_str()) != Some(ASSET_EXTENSION) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(root) else {
                continue;
            };
            let segments: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            if let Some(catalog_entry) = classify(registry, entry.path(), &segments) {
                by_category
                    .entry(catalog_entry.category)
                    .or_default()
                    .push(catalog_entry);
            }
        }

        Ok(Self::new(root.to_path_buf(), by_category))
    }
}

/// Builds the entry for one file, or `None` when no directory segment
/// matches a category folder. `segments` is the root-relative path split
/// into components; the final segment is the file name.
fn classify(
    registry: &CategoryRegistry,
    full_path: &Path,
    segments: &[String],
) -> Option<CatalogEntry> {
    let (file_name, dir_segments) = segments.split_last()?;

    let (match_idx, category) = dir_segments
        .iter()
        .enumerate()
        .find_map(|(idx, segment)| {
            registry
                .match_folder_segment(segment)
                .map(|category| (idx, category))
        })?;

    let in_subfolder = match_idx + 1 < dir_segments.len();
    let subfolder = if in_subfolder {
        dir_segments[match_idx + 1].clone()
    } else {
        String::new()
    };

    let mut tail: Vec<&str> = dir_segments[match_idx + 1..]
        .iter()
        .map(String::as_str)
        .collect();
    tail.push(file_name);
    let category_path = tail.join("/");

    let uri_variants = registry
        .variants(category)
        .iter()
        .map(|variant| {
            format!(
                "{protocol}{root}/{variant}/{category_path}",
                protocol = registry.protocol(category),
                root = ROOT_SEGMENT,
            )
        })
        .collect();

    let name = file_name
        .strip_suffix(&format!(".{ASSET_EXTENSION}"))
        .unwrap_or(file_name)
        .to_string();

    Some(CatalogEntry {
        category,
        name,
        full_path: full_path.to_path_buf(),
        rel_path: segments.join("/"),
        category_path,
        in_subfolder,
        subfolder,
        uri_variants,
    })
}
