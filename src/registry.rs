//! Asset category registry.
//!
//! Warudo scenes reference assets through typed URI prefixes
//! (`prop://data/Props/Chair.warudo`), while the StreamingAssets tree names
//! category folders with singular/plural and case variants. This module is
//! the one table mapping both conventions onto the four categories; every
//! other component consults it instead of hard-coding spellings. The
//! registry is an immutable value constructed once and passed explicitly,
//! never ambient state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level directory that all asset URIs address into.
pub const ROOT_SEGMENT: &str = "data";

/// File extension (without dot) marking an asset the scanner catalogs.
pub const ASSET_EXTENSION: &str = "warudo";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Environment,
    Prop,
    Character,
    Particle,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Environment,
        Category::Prop,
        Category::Character,
        Category::Particle,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Environment => "environment",
            Category::Prop => "prop",
            Category::Character => "character",
            Category::Particle => "particle",
        };
        f.write_str(name)
    }
}

/// Naming conventions for one category.
#[derive(Debug)]
pub struct CategorySpec {
    pub category: Category,
    /// URI prefix including the `://` separator.
    pub protocol: &'static str,
    /// Accepted folder spellings, canonical first. Compared case-insensitively.
    pub folder_variants: &'static [&'static str],
}

const CATEGORY_SPECS: &[CategorySpec] = &[
    CategorySpec {
        category: Category::Environment,
        protocol: "environment://",
        folder_variants: &["Environment", "Environments"],
    },
    CategorySpec {
        category: Category::Prop,
        protocol: "prop://",
        folder_variants: &["Props", "Prop"],
    },
    CategorySpec {
        category: Category::Character,
        protocol: "character://",
        folder_variants: &["Characters", "Character"],
    },
    CategorySpec {
        category: Category::Particle,
        protocol: "particle://",
        folder_variants: &["Particles", "Particle"],
    },
];

/// Lookup table over [`CategorySpec`]s. Cheap to construct and hold by
/// reference; components take `&CategoryRegistry` rather than reaching for
/// a global.
#[derive(Debug, Default)]
pub struct CategoryRegistry;

impl CategoryRegistry {
    pub fn new() -> Self {
        CategoryRegistry
    }

    pub fn specs(&self) -> &'static [CategorySpec] {
        CATEGORY_SPECS
    }

    pub fn spec(&self, category: Category) -> &'static CategorySpec {
        match category {
            Category::Environment => &CATEGORY_SPECS[0],
            Category::Prop => &CATEGORY_SPECS[1],
            Category::Character => &CATEGORY_SPECS[2],
            Category::Particle => &CATEGORY_SPECS[3],
        }
    }

    /// URI protocol prefix for a category, including `://`.
    pub fn protocol(&self, category: Category) -> &'static str {
        self.spec(category).protocol
    }

    /// Accepted folder spellings for a category, canonical first.
    pub fn variants(&self, category: Category) -> &'static [&'static str] {
        self.spec(category).folder_variants
    }

    /// The single spelling used when comparing normalized paths.
    pub fn canonical_folder(&self, category: Category) -> &'static str {
        self.spec(category).folder_variants[0]
    }

    /// Category whose protocol prefixes `value`, or `None` when the string
    /// is not an asset reference.
    pub fn resolve_protocol(&self, value: &str) -> Option<Category> {
        CATEGORY_SPECS
            .iter()
            .find(|spec| value.starts_with(spec.protocol))
            .map(|spec| spec.category)
    }

    /// Strips whichever registered protocol prefixes `value`, if any.
    pub fn strip_protocol<'a>(&self, value: &'a str) -> &'a str {
        for spec in CATEGORY_SPECS {
            if let Some(rest) = value.strip_prefix(spec.protocol) {
                return rest;
            }
        }
        value
    }

    /// Matches one path segment against every category's folder variants,
    /// case-insensitively. First category whose variant matches wins.
    pub fn match_folder_segment(&self, segment: &str) -> Option<Category> {
        for spec in CATEGORY_SPECS {
            if spec
                .folder_variants
                .iter()
                .any(|variant| variant.eq_ignore_ascii_case(segment))
            {
                return Some(spec.category);
            }
        }
        None
    }
}
