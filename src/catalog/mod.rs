//! Asset catalog.
//!
//! The catalog is the on-disk truth a scene is checked against: every
//! `.warudo` file found under a StreamingAssets root, classified by the
//! category folder it sits beneath. It is rebuilt from scratch on every
//! scan and read-only afterwards; the resolver queries it but never
//! mutates it.

pub mod scan;

use crate::registry::Category;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// One asset file discovered during a scan.
#[derive(Clone, Debug, Serialize)]
pub struct CatalogEntry {
    pub category: Category,
    /// File stem, extension stripped.
    pub name: String,
    pub full_path: PathBuf,
    /// Path relative to the scan root, `/`-separated.
    pub rel_path: String,
    /// Path relative to the matched category folder. Its final segment is
    /// always the file name.
    pub category_path: String,
    /// True iff the file sits one folder (or more) below the category
    /// folder; only the first level is tracked.
    pub in_subfolder: bool,
    /// First subfolder segment, empty when `in_subfolder` is false.
    pub subfolder: String,
    /// Equivalent canonical URIs, one per accepted folder variant,
    /// canonical spelling first.
    pub uri_variants: Vec<String>,
}

impl CatalogEntry {
    /// File name including extension: the final category-path segment.
    pub fn file_name(&self) -> &str {
        self.category_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.category_path)
    }

    /// The URI a well-formed scene would use for this file.
    pub fn default_uri(&self) -> &str {
        &self.uri_variants[0]
    }
}

/// All entries from one scan, keyed by category. Every category is present,
/// possibly empty (a missing root yields an all-empty catalog).
#[derive(Debug, Serialize)]
pub struct AssetCatalog {
    root: PathBuf,
    by_category: BTreeMap<Category, Vec<CatalogEntry>>,
}

impl AssetCatalog {
    pub(crate) fn new(root: PathBuf, by_category: BTreeMap<Category, Vec<CatalogEntry>>) -> Self {
        Self { root, by_category }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    /// Per-category file counts, for summary display.
    pub fn summary(&self) -> BTreeMap<Category, usize> {
        self.by_category
            .iter()
            .map(|(category, entries)| (*category, entries.len()))
            .collect()
    }
}
