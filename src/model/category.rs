//! The category labels an expense can carry, and the filter selector built from them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of category labels an expense can belong to.
///
/// `Other` is the fallback used when the form leaves the category unset. An unknown label
/// arriving from the store is a parse failure, surfaced as a transport error by the client.
#[derive(
    Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Utilities,
    #[default]
    Other,
}

serde_plain::derive_display_from_serialize!(Category);
serde_plain::derive_fromstr_from_deserialize!(Category);

/// The category selector used when rendering: either the distinguished "all" value or a single
/// category label.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Returns true if `category` is visible under this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = serde_plain::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        match category {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        let category = Category::from_str("Transport").unwrap();
        assert_eq!(category, Category::Transport);
        assert_eq!(category.to_string(), "Transport");
    }

    #[test]
    fn test_category_unknown_label() {
        assert!(Category::from_str("Rent").is_err());
    }

    #[test]
    fn test_category_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!(CategoryFilter::from_str("all").unwrap(), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_str("Food").unwrap(),
            CategoryFilter::Only(Category::Food)
        );
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Food));
        assert!(CategoryFilter::Only(Category::Food).matches(Category::Food));
        assert!(!CategoryFilter::Only(Category::Food).matches(Category::Transport));
    }
}
