use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Travel destination category.
///
/// The six named variants are the closed set the store recognizes. Rows
/// can still arrive with a category outside that set (the table column is
/// free text); those deserialize into `Other` and render without a color
/// rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    City,
    Nature,
    Beach,
    Adventure,
    Culture,
    Relaxation,
    Other(String),
}

/// All known categories, in the order the original UI lists them.
pub const KNOWN_CATEGORIES: [Category; 6] = [
    Category::City,
    Category::Nature,
    Category::Beach,
    Category::Adventure,
    Category::Culture,
    Category::Relaxation,
];

impl Category {
    pub fn name(&self) -> &str {
        match self {
            Category::City => "city",
            Category::Nature => "nature",
            Category::Beach => "beach",
            Category::Adventure => "adventure",
            Category::Culture => "culture",
            Category::Relaxation => "relaxation",
            Category::Other(name) => name,
        }
    }

    /// Display color as a `0xRRGGBB` triple, `None` for unrecognized
    /// categories (degraded-but-non-fatal rendering).
    pub fn color(&self) -> Option<(u8, u8, u8)> {
        match self {
            Category::City => Some((0x3b, 0x82, 0xf6)),
            Category::Nature => Some((0x16, 0xa3, 0x4a)),
            Category::Beach => Some((0xef, 0x44, 0x44)),
            Category::Adventure => Some((0xea, 0xb3, 0x08)),
            Category::Culture => Some((0xdb, 0x27, 0x77)),
            Category::Relaxation => Some((0x14, 0xb8, 0xa6)),
            Category::Other(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Strict parse: only the six known names are accepted. Used at input
    /// boundaries (CLI args, form submission). Wire deserialization goes
    /// through `From<String>` instead, which never fails.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "city" => Ok(Category::City),
            "nature" => Ok(Category::Nature),
            "beach" => Ok(Category::Beach),
            "adventure" => Ok(Category::Adventure),
            "culture" => Ok(Category::Culture),
            "relaxation" => Ok(Category::Relaxation),
            other => Err(Error::UnknownCategory(other.to_string())),
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Category::Other(s))
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.name().to_string()
    }
}

/// List filter: every category, or exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Only(s.parse()?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_round_trip_through_names() {
        for category in KNOWN_CATEGORIES {
            let parsed: Category = category.name().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_names() {
        let err = "volcano".parse::<Category>().unwrap_err();
        assert_eq!(err, Error::UnknownCategory("volcano".to_string()));
    }

    #[test]
    fn wire_deserialization_keeps_unknown_names() {
        let category: Category = serde_json::from_str("\"volcano\"").unwrap();
        assert_eq!(category, Category::Other("volcano".to_string()));
        assert_eq!(category.color(), None);
        assert!(!category.is_known());
    }

    #[test]
    fn wire_serialization_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Beach).unwrap();
        assert_eq!(json, "\"beach\"");
    }

    #[test]
    fn every_known_category_has_a_color() {
        for category in KNOWN_CATEGORIES {
            assert!(category.color().is_some(), "{} has no color", category);
        }
    }

    #[test]
    fn filter_all_matches_everything() {
        assert!(CategoryFilter::All.matches(&Category::City));
        assert!(CategoryFilter::All.matches(&Category::Other("volcano".to_string())));
    }

    #[test]
    fn filter_only_matches_exactly_one_category() {
        let filter = CategoryFilter::Only(Category::Beach);
        assert!(filter.matches(&Category::Beach));
        assert!(!filter.matches(&Category::Nature));
    }

    #[test]
    fn filter_parses_all_and_category_names() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "beach".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Beach)
        );
        assert!("volcano".parse::<CategoryFilter>().is_err());
    }
}
