//! Scene reconciliation.
//!
//! Pairs every reference extracted from a scene with the asset catalog and
//! produces the full analysis: grouped reference counts per category,
//! subfolder-misplacement issues, and missing-file issues. Issues are
//! advisory structured facts; rendering them into sentences is the
//! front-end's job. Passing no catalog skips verification entirely, the
//! documented mode for runs without a configured assets root.

use crate::catalog::AssetCatalog;
use crate::extract::{Reference, extract_references};
use crate::normalize::normalize_path;
use crate::registry::{Category, CategoryRegistry};
use crate::resolve::reference_exists;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// A distinct referenced path and how many times the scene uses it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupedReference {
    pub path: String,
    /// Display name from the first occurrence.
    pub name: String,
    pub count: usize,
}

/// An asset referenced one folder deeper than its category folder allows.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SubfolderIssue {
    pub category: Category,
    pub name: String,
    /// Offending subfolder segment right after the category folder.
    pub folder: String,
    /// Canonical category folder the file should sit directly under.
    pub category_folder: String,
}

/// A referenced file with no structurally matching catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissingFileIssue {
    pub category: Category,
    pub name: String,
    pub path: String,
    /// Canonical form the path was compared under; debug detail for the
    /// front-end.
    pub normalized: String,
}

/// Complete output of one reconciliation pass.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// Grouped references per category, first-seen order. Every category
    /// is present.
    pub references: BTreeMap<Category, Vec<GroupedReference>>,
    pub subfolder_issues: Vec<SubfolderIssue>,
    pub missing_files: Vec<MissingFileIssue>,
}

impl AnalysisReport {
    pub fn has_issues(&self) -> bool {
        !self.subfolder_issues.is_empty() || !self.missing_files.is_empty()
    }

    pub fn total_references(&self) -> usize {
        self.references
            .values()
            .flatten()
            .map(|group| group.count)
            .sum()
    }
}

/// Runs the whole pass: extract, group, then both issue checks. `catalog`
/// of `None` means no assets root was configured; existence checks are
/// skipped and only subfolder issues can surface.
pub fn analyze(
    registry: &CategoryRegistry,
    document: &Value,
    catalog: Option<&AssetCatalog>,
) -> AnalysisReport {
    let extracted = extract_references(registry, document);

    let references = extracted
        .iter()
        .map(|(category, refs)| (*category, group_by_path(refs)))
        .collect();
    let subfolder_issues = check_subfolders(registry, &extracted);
    let missing_files = match catalog {
        Some(catalog) => check_missing(registry, catalog, &extracted),
        None => Vec::new(),
    };

    AnalysisReport {
        references,
        subfolder_issues,
        missing_files,
    }
}

/// Groups references by raw path, preserving first-seen order and taking
/// the display name from the first occurrence.
fn group_by_path(refs: &[Reference]) -> Vec<GroupedReference> {
    let mut groups: Vec<GroupedReference> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();

    for reference in refs {
        match index.get(reference.path.as_str()) {
            Some(&at) => groups[at].count += 1,
            None => {
                index.insert(reference.path.as_str(), groups.len());
                groups.push(GroupedReference {
                    path: reference.path.clone(),
                    name: reference.name.clone(),
                    count: 1,
                });
            }
        }
    }

    groups
}

/// Flags references whose path continues past the category folder into a
/// subfolder. Matching is against the canonical folder name, tolerating a
/// missing trailing `s` and any case. Deduplicated by the issue's fields.
fn check_subfolders(
    registry: &CategoryRegistry,
    extracted: &BTreeMap<Category, Vec<Reference>>,
) -> Vec<SubfolderIssue> {
    let mut issues = Vec::new();
    let mut reported: BTreeSet<SubfolderIssue> = BTreeSet::new();

    for (category, refs) in extracted {
        let canonical = registry.canonical_folder(*category);
        for reference in refs {
            let stripped = registry.strip_protocol(&reference.path);
            let segments: Vec<&str> = stripped.split('/').collect();
            let Some(at) = segments
                .iter()
                .position(|segment| folder_matches(segment, canonical))
            else {
                continue;
            };
            // Needs a subfolder segment plus a file name beyond the match.
            if segments.len() < at + 3 {
                continue;
            }
            let issue = SubfolderIssue {
                category: *category,
                name: reference.name.clone(),
                folder: segments[at + 1].to_string(),
                category_folder: canonical.to_string(),
            };
            if reported.insert(issue.clone()) {
                issues.push(issue);
            }
        }
    }

    issues
}

fn folder_matches(segment: &str, canonical: &str) -> bool {
    segment.eq_ignore_ascii_case(canonical)
        || segment.eq_ignore_ascii_case(canonical.trim_end_matches(['s', 'S']))
}

/// Resolves each distinct referenced path once per category and reports
/// the ones with no structurally matching file. Deduplicated by raw path,
/// independently of the subfolder dedup.
fn check_missing(
    registry: &CategoryRegistry,
    catalog: &AssetCatalog,
    extracted: &BTreeMap<Category, Vec<Reference>>,
) -> Vec<MissingFileIssue> {
    let mut issues = Vec::new();

    for (category, refs) in extracted {
        let mut reported: BTreeSet<&str> = BTreeSet::new();
        for reference in refs {
            if !reported.insert(reference.path.as_str()) {
                continue;
            }
            if reference_exists(registry, catalog, *category, &reference.path) {
                continue;
            }
            issues.push(MissingFileIssue {
                category: *category,
                name: reference.name.clone(),
                path: reference.path.clone(),
                normalized: normalize_path(registry, &reference.path, *category),
            });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn refs(paths: &[&str]) -> Vec<Reference> {
        paths
            .iter()
            .map(|path| Reference {
                category: Category::Prop,
                path: path.to_string(),
                name: crate::extract::display_name(path),
            })
            .collect()
    }

    #[test]
    fn grouping_preserves_order_and_conserves_counts() {
        let input = refs(&[
            "prop://data/Props/Chair.warudo",
            "prop://data/Props/Table.warudo",
            "prop://data/Props/Chair.warudo",
            "prop://data/Props/Chair.warudo",
        ]);
        let groups = group_by_path(&input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Chair");
        assert_eq!(groups[0].count, 3);
        assert_eq!(groups[1].name, "Table");
        assert_eq!(groups[1].count, 1);
        let total: usize = groups.iter().map(|g| g.count).sum();
        assert_eq!(total, input.len());
    }

    #[test]
    fn subfolder_issue_found_and_deduplicated() {
        let registry = CategoryRegistry::new();
        let mut extracted: BTreeMap<Category, Vec<Reference>> = BTreeMap::new();
        extracted.insert(
            Category::Prop,
            refs(&[
                "prop://data/Props/Sub/Chair.warudo",
                "prop://data/Props/Sub/Chair.warudo",
                "prop://data/Prop/Sub/Chair.warudo",
                "prop://data/Props/Chair.warudo",
            ]),
        );
        let issues = check_subfolders(&registry, &extracted);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].name, "Chair");
        assert_eq!(issues[0].folder, "Sub");
        assert_eq!(issues[0].category_folder, "Props");
    }

    #[test]
    fn singular_folder_segment_still_flagged() {
        let registry = CategoryRegistry::new();
        let mut extracted: BTreeMap<Category, Vec<Reference>> = BTreeMap::new();
        extracted.insert(
            Category::Character,
            vec![Reference {
                category: Category::Character,
                path: "character://data/Character/Crowd/Hero.warudo".to_string(),
                name: "Hero".to_string(),
            }],
        );
        let issues = check_subfolders(&registry, &extracted);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].folder, "Crowd");
        assert_eq!(issues[0].category_folder, "Characters");
    }

    #[test]
    fn analyze_without_catalog_skips_existence_checks() {
        let registry = CategoryRegistry::new();
        let document = json!({
            "value": "prop://data/Props/Ghost.warudo"
        });
        let report = analyze(&registry, &document, None);
        assert!(report.missing_files.is_empty());
        assert_eq!(report.total_references(), 1);
        assert_eq!(report.references[&Category::Prop][0].name, "Ghost");
    }

    #[test]
    fn report_always_lists_all_categories() {
        let registry = CategoryRegistry::new();
        let report = analyze(&registry, &json!({}), None);
        assert_eq!(report.references.len(), Category::ALL.len());
        assert!(!report.has_issues());
    }
}
