//! Check a Warudo scene file against a StreamingAssets tree.
//!
//! Usage:
//!   scene-check MyScene.warudo --assets-root /path/to/StreamingAssets
//!   scene-check MyScene.warudo --json
//!
//! Without an assets root (flag or WARUDO_ASSETS_ROOT) the run lists and
//! groups references but skips existence checks.
//!
//! Exit status: 0 clean, 1 when issues were found, 2 on a hard failure
//! such as an unreadable or malformed scene file.

use anyhow::Result;
use clap::Parser;
use scene_check::{
    AnalysisReport, AssetCatalog, Category, CategoryRegistry, analyze, assets_root_from_env,
    load_scene,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "scene-check")]
#[command(about = "Check a Warudo scene's asset references against a StreamingAssets tree")]
struct Cli {
    /// Scene file to analyze.
    scene: PathBuf,
    /// StreamingAssets root to verify references against. Falls back to
    /// WARUDO_ASSETS_ROOT; when neither is set, existence checks are
    /// skipped.
    #[arg(long)]
    assets_root: Option<PathBuf>,
    /// Emit the full report as pretty-printed JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(clean) => {
            if clean {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the scene came back issue-free.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    let registry = CategoryRegistry::new();

    let scene = load_scene(&cli.scene)?;
    let assets_root = cli.assets_root.or_else(assets_root_from_env);
    let catalog = match &assets_root {
        Some(root) => Some(AssetCatalog::scan(&registry, root)?),
        None => None,
    };

    let report = analyze(&registry, &scene, catalog.as_ref());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_text(&registry, &report, catalog.as_ref());
    }

    Ok(!report.has_issues())
}

fn render_text(registry: &CategoryRegistry, report: &AnalysisReport, catalog: Option<&AssetCatalog>) {
    if let Some(catalog) = catalog {
        println!("Assets under {}:", catalog.root().display());
        for (category, count) in catalog.summary() {
            println!(
                "  {folder}: {count} file(s)",
                folder = registry.canonical_folder(category)
            );
        }
        println!();
    } else {
        println!("No assets root configured; existence checks skipped.\n");
    }

    println!("References ({} total):", report.total_references());
    for category in Category::ALL {
        let groups = &report.references[&category];
        if groups.is_empty() {
            continue;
        }
        println!("  {}:", registry.canonical_folder(category));
        for group in groups {
            let times = if group.count > 1 {
                format!(" (x{})", group.count)
            } else {
                String::new()
            };
            println!("    {name}{times}  {path}", name = group.name, path = group.path);
        }
    }

    if !report.subfolder_issues.is_empty() {
        println!("\nMisplaced assets:");
        for issue in &report.subfolder_issues {
            println!(
                "  {category} '{name}' is referenced inside subfolder '{folder}'; move it directly under {parent}/",
                category = issue.category,
                name = issue.name,
                folder = issue.folder,
                parent = issue.category_folder,
            );
        }
    }

    if !report.missing_files.is_empty() {
        println!("\nMissing files:");
        for issue in &report.missing_files {
            println!(
                "  {category} '{name}' not found: {path}",
                category = issue.category,
                name = issue.name,
                path = issue.path,
            );
        }
    }

    if !report.has_issues() {
        println!("\nNo issues found.");
    }
}
