#![allow(dead_code)]

// Shared fixtures: throwaway StreamingAssets trees and scene documents.

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary assets root populated with the given relative files.
pub struct AssetTree {
    dir: TempDir,
}

impl AssetTree {
    /// Creates every `rel_path` (slash-separated) as an empty file under a
    /// fresh temp root, building intermediate directories as needed.
    pub fn with_files(rel_paths: &[&str]) -> Result<Self> {
        let dir = TempDir::new().context("creating temp assets root")?;
        for rel in rel_paths {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            fs::write(&path, b"").with_context(|| format!("writing {}", path.display()))?;
        }
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Scene document wrapping each URI in the `{"value": ...}` node shape the
/// extractor looks for, nested the way real scenes nest plugin data.
pub fn scene_with_refs(uris: &[&str]) -> Value {
    let nodes: Vec<Value> = uris.iter().map(|uri| json!({"value": uri})).collect();
    json!({
        "scene": {
            "name": "test scene",
            "plugins": [
                {"settings": {"entries": nodes}}
            ]
        }
    })
}
