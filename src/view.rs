//! Pure rendering helpers: the category filter, the running total, and the `Listing` that a
//! render produces.
//!
//! `total` and `by_category` are free functions with no state so that the consistency rules can
//! be tested without a store or a controller.

use crate::model::{Amount, CategoryFilter, Expense};
use serde::Serialize;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Sums the `amount` fields of any sequence of expense records. An empty sequence sums to zero.
pub fn total<'a, I>(records: I) -> Amount
where
    I: IntoIterator<Item = &'a Expense>,
{
    records.into_iter().map(|e| e.amount()).sum()
}

/// Returns the subsequence of `records` visible under `filter`, preserving relative order.
/// `CategoryFilter::All` returns every record.
pub fn by_category<'a>(records: &'a [Expense], filter: CategoryFilter) -> Vec<&'a Expense> {
    records
        .iter()
        .filter(|e| filter.matches(e.category()))
        .collect()
}

/// The result of one render: the rows to display and the total recomputed over exactly those
/// rows. Each row carries the id that the `edit` and `delete` commands take.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    rows: Vec<Expense>,
    total: Amount,
}

impl Listing {
    /// Builds a listing from the rows to display, recomputing the total from scratch.
    pub fn new(rows: Vec<Expense>) -> Self {
        let total = total(&rows);
        Self { rows, total }
    }

    pub fn rows(&self) -> &[Expense] {
        &self.rows
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "(no expenses)")?;
        } else {
            writeln!(
                f,
                "{:<8} {:<24} {:>14} {:<12} {:<13}",
                "ID", "NAME", "AMOUNT", "DATE", "CATEGORY"
            )?;
            for row in &self.rows {
                let id = row
                    .id()
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                writeln!(
                    f,
                    "{:<8} {:<24} {:>14} {:<12} {:<13}",
                    id,
                    row.name(),
                    row.amount().to_string(),
                    row.date().to_string(),
                    row.category().to_string(),
                )?;
            }
        }
        write!(f, "Total: {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test::expense;

    fn sample() -> Vec<Expense> {
        vec![
            expense(1, "Lunch", "500", "2024-01-01", Category::Food),
            expense(2, "Bus", "100", "2024-01-02", Category::Transport),
            expense(3, "Dinner", "250", "2024-01-03", Category::Food),
        ]
    }

    #[test]
    fn test_total_empty_is_zero() {
        assert!(total(&[]).is_zero());
    }

    #[test]
    fn test_total_sums_amounts() {
        let records = vec![expense(1, "Lunch", "500", "2024-01-01", Category::Food)];
        assert_eq!(total(&records).to_string(), "Ksh 500.00");
    }

    #[test]
    fn test_total_is_order_independent() {
        let mut records = sample();
        let forward = total(&records);
        records.reverse();
        assert_eq!(total(&records), forward);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let records = sample();
        let filtered = by_category(&records, CategoryFilter::All);
        assert_eq!(filtered.len(), records.len());
        for (kept, original) in filtered.iter().zip(records.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_filter_keeps_only_matching_in_order() {
        let records = sample();
        let filtered = by_category(&records, CategoryFilter::Only(Category::Food));
        let names: Vec<&str> = filtered.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Lunch", "Dinner"]);
        assert!(filtered.iter().all(|e| e.category() == Category::Food));
    }

    #[test]
    fn test_filter_no_matches_is_empty() {
        let records = sample();
        let filtered = by_category(&records, CategoryFilter::Only(Category::Utilities));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_listing_total_covers_only_displayed_rows() {
        let records = sample();
        let rows: Vec<Expense> = by_category(&records, CategoryFilter::Only(Category::Food))
            .into_iter()
            .cloned()
            .collect();
        let listing = Listing::new(rows);
        assert_eq!(listing.total().to_string(), "Ksh 750.00");
    }

    #[test]
    fn test_rendering_twice_is_idempotent() {
        let first = Listing::new(sample());
        let second = Listing::new(sample());
        assert_eq!(first.total(), second.total());
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_empty_listing_display() {
        let listing = Listing::new(Vec::new());
        let text = listing.to_string();
        assert!(text.contains("(no expenses)"));
        assert!(text.ends_with("Total: Ksh 0.00"));
    }
}
