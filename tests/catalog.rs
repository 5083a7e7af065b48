// Catalog scanner guard rails: classification, variants, subfolders, and
// degraded modes.

mod support;

use anyhow::Result;
use scene_check::{AssetCatalog, Category, CategoryRegistry};
use std::path::Path;
use support::AssetTree;

#[test]
fn scan_classifies_files_by_category_folder() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&[
        "Props/Chair.warudo",
        "Props/Table.warudo",
        "Environment/Stage.warudo",
        "Characters/Hero.warudo",
        "Particles/Snow.warudo",
    ])?;

    let catalog = AssetCatalog::scan(&registry, tree.root())?;
    assert_eq!(catalog.entries(Category::Prop).len(), 2);
    assert_eq!(catalog.entries(Category::Environment).len(), 1);
    assert_eq!(catalog.entries(Category::Character).len(), 1);
    assert_eq!(catalog.entries(Category::Particle).len(), 1);

    let chair = &catalog.entries(Category::Prop)[0];
    assert_eq!(chair.name, "Chair");
    assert_eq!(chair.rel_path, "Props/Chair.warudo");
    assert_eq!(chair.category_path, "Chair.warudo");
    assert!(!chair.in_subfolder);
    assert_eq!(chair.default_uri(), "prop://data/Props/Chair.warudo");
    Ok(())
}

#[test]
fn scan_tolerates_variant_and_case_folder_names() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&[
        "character/Hero.warudo",
        "ENVIRONMENTS/Stage.warudo",
        "prop/Chair.warudo",
    ])?;

    let catalog = AssetCatalog::scan(&registry, tree.root())?;
    assert_eq!(catalog.entries(Category::Character).len(), 1);
    assert_eq!(catalog.entries(Category::Environment).len(), 1);
    assert_eq!(catalog.entries(Category::Prop).len(), 1);

    // URIs always use the registered spellings, not the on-disk ones.
    let hero = &catalog.entries(Category::Character)[0];
    assert_eq!(
        hero.uri_variants,
        vec![
            "character://data/Characters/Hero.warudo".to_string(),
            "character://data/Character/Hero.warudo".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn scan_records_first_level_subfolders() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&["Props/Furniture/Wood/Chair.warudo"])?;

    let catalog = AssetCatalog::scan(&registry, tree.root())?;
    let entry = &catalog.entries(Category::Prop)[0];
    assert!(entry.in_subfolder);
    assert_eq!(entry.subfolder, "Furniture");
    assert_eq!(entry.category_path, "Furniture/Wood/Chair.warudo");
    assert_eq!(entry.file_name(), "Chair.warudo");
    Ok(())
}

#[test]
fn category_folders_nested_below_other_directories_still_match() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&["Packs/Winter/Particles/Snow.warudo"])?;

    let catalog = AssetCatalog::scan(&registry, tree.root())?;
    let entry = &catalog.entries(Category::Particle)[0];
    assert_eq!(entry.category_path, "Snow.warudo");
    assert!(!entry.in_subfolder);
    Ok(())
}

#[test]
fn non_category_folders_and_foreign_extensions_are_ignored() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&[
        "Textures/Wood.warudo",
        "Props/Chair.png",
        "README.warudo.txt",
    ])?;

    let catalog = AssetCatalog::scan(&registry, tree.root())?;
    assert!(catalog.is_empty());
    Ok(())
}

#[test]
fn missing_root_degrades_to_empty_catalog() -> Result<()> {
    let registry = CategoryRegistry::new();
    let catalog = AssetCatalog::scan(&registry, Path::new("/nonexistent/StreamingAssets"))?;
    assert!(catalog.is_empty());
    for category in Category::ALL {
        assert!(catalog.entries(category).is_empty());
    }
    Ok(())
}

#[test]
fn summary_counts_every_category() -> Result<()> {
    let registry = CategoryRegistry::new();
    let tree = AssetTree::with_files(&["Props/A.warudo", "Props/B.warudo"])?;
    let catalog = AssetCatalog::scan(&registry, tree.root())?;

    let summary = catalog.summary();
    assert_eq!(summary[&Category::Prop], 2);
    assert_eq!(summary[&Category::Environment], 0);
    assert_eq!(summary.len(), Category::ALL.len());
    Ok(())
}
