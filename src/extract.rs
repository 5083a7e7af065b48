//! Reference extraction from a parsed scene document.
//!
//! A scene is an arbitrarily nested JSON tree. Asset references live in
//! objects shaped like `{"value": "prop://data/Props/Chair.warudo"}`; the
//! extractor walks the whole tree once and collects every such string whose
//! prefix matches a registered protocol. Strings with no registered prefix
//! are not references and are skipped. `serde_json::Value` is acyclic, so
//! the recursion always terminates.

use crate::registry::{ASSET_EXTENSION, Category, CategoryRegistry};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key whose string value is checked for a protocol prefix.
const REFERENCE_KEY: &str = "value";

/// One asset reference found in the document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub category: Category,
    /// Raw URI as it appears in the scene, quotes trimmed.
    pub path: String,
    /// Final path segment with the asset extension stripped.
    pub name: String,
}

/// Walks the document and returns references in traversal order, keyed by
/// category. Every category is present, possibly with an empty list.
pub fn extract_references(
    registry: &CategoryRegistry,
    document: &Value,
) -> BTreeMap<Category, Vec<Reference>> {
    let mut found: BTreeMap<Category, Vec<Reference>> = Category::ALL
        .iter()
        .map(|category| (*category, Vec::new()))
        .collect();
    walk(registry, document, &mut found);
    found
}

fn walk(
    registry: &CategoryRegistry,
    node: &Value,
    found: &mut BTreeMap<Category, Vec<Reference>>,
) {
    match node {
        Value::Object(map) => {
            if let Some(Value::String(raw)) = map.get(REFERENCE_KEY) {
                let candidate = trim_quotes(raw);
                if let Some(category) = registry.resolve_protocol(candidate) {
                    found.entry(category).or_default().push(Reference {
                        category,
                        path: candidate.to_string(),
                        name: display_name(candidate),
                    });
                }
            }
            // Matched strings are leaves; descending into them is a no-op,
            // so every member can be walked uniformly.
            for value in map.values() {
                walk(registry, value, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                walk(registry, item, found);
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {}
    }
}

/// Removes one layer of surrounding double quotes, if present. Scene
/// exporters occasionally double-encode reference strings.
fn trim_quotes(raw: &str) -> &str {
    let trimmed = raw.strip_prefix('"').unwrap_or(raw);
    trimmed.strip_suffix('"').unwrap_or(trimmed)
}

/// Display name for a reference path: the final segment with the asset
/// extension stripped, or `Unknown` for an empty path.
pub fn display_name(path: &str) -> String {
    if path.is_empty() {
        return "Unknown".to_string();
    }
    let base = path.rsplit('/').next().unwrap_or(path);
    let suffix = format!(".{ASSET_EXTENSION}");
    base.strip_suffix(&suffix).unwrap_or(base).to_string()
}
