//! Scene reference checker for Warudo asset trees.
//!
//! A Warudo scene is a JSON document whose nodes reference external assets
//! through typed URIs (`prop://data/Props/Chair.warudo`). This crate
//! extracts those references, catalogs the real files under a
//! StreamingAssets root, and reconciles the two: which references resolve,
//! which point at files misplaced in subfolders, and which are missing
//! outright. The engine returns structured data only; front-ends (the
//! bundled CLI, or anything else) decide how to render it.
//!
//! A full run is synchronous and single-pass: scan the root once, walk the
//! document once, reconcile in memory. Nothing is cached across runs.

pub mod analyze;
pub mod catalog;
pub mod extract;
pub mod normalize;
pub mod registry;
pub mod resolve;

pub use analyze::{AnalysisReport, GroupedReference, MissingFileIssue, SubfolderIssue, analyze};
pub use catalog::{AssetCatalog, CatalogEntry};
pub use extract::{Reference, extract_references};
pub use normalize::normalize_path;
pub use registry::{ASSET_EXTENSION, Category, CategoryRegistry, ROOT_SEGMENT};
pub use resolve::reference_exists;

use anyhow::{Context, Result};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment fallback for the assets root when no flag is given.
pub const ASSETS_ROOT_ENV: &str = "WARUDO_ASSETS_ROOT";

/// Reads and parses a scene file.
///
/// Both unreadable files and malformed JSON are hard failures with the
/// offending path in context; a parse error is never folded into "scene
/// with zero references".
pub fn load_scene(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scene file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing scene file {}", path.display()))
}

/// Assets root from `WARUDO_ASSETS_ROOT`, if set and non-empty.
pub fn assets_root_from_env() -> Option<PathBuf> {
    match env::var(ASSETS_ROOT_ENV) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}
