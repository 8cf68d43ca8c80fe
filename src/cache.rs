//! The ordered in-memory mirror of the last known store state.

use crate::model::{Expense, ExpenseId};

/// Holds the full ordered sequence of known expense records. Insertion order reflects server
/// fetch order, except newly created records are appended at the end. The cache is owned and
/// mutated exclusively by the controller; everything else reads through `snapshot`.
#[derive(Debug, Default, Clone)]
pub struct LocalCache {
    records: Vec<Expense>,
}

impl LocalCache {
    /// Replaces the entire contents with the store's latest listing.
    pub fn replace_all(&mut self, records: Vec<Expense>) {
        self.records = records;
    }

    /// Appends a newly created record at the end.
    pub fn append(&mut self, record: Expense) {
        self.records.push(record);
    }

    /// Replaces the record with the given id in place.
    ///
    /// A no-op when the id is absent. That absence is legal: a save acknowledgment can race a
    /// concurrent deletion, and the stale acknowledgment must not resurrect the record.
    pub fn replace_by_id(&mut self, id: &ExpenseId, record: Expense) {
        if let Some(existing) = self
            .records
            .iter_mut()
            .find(|r| r.id().map(|i| i == id).unwrap_or(false))
        {
            *existing = record;
        }
    }

    /// Removes the record with the given id, if present.
    pub fn remove_by_id(&mut self, id: &ExpenseId) {
        self.records
            .retain(|r| r.id().map(|i| i != id).unwrap_or(true));
    }

    /// A read-only view for rendering and filtering.
    pub fn snapshot(&self) -> &[Expense] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::expense;
    use crate::model::Category;

    #[test]
    fn test_append_preserves_order() {
        let mut cache = LocalCache::default();
        cache.replace_all(vec![expense(1, "Lunch", "500", "2024-01-01", Category::Food)]);
        cache.append(expense(2, "Bus", "100", "2024-01-02", Category::Transport));

        let names: Vec<&str> = cache.snapshot().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Lunch", "Bus"]);
    }

    #[test]
    fn test_replace_by_id() {
        let mut cache = LocalCache::default();
        cache.replace_all(vec![
            expense(1, "Lunch", "500", "2024-01-01", Category::Food),
            expense(2, "Bus", "100", "2024-01-02", Category::Transport),
        ]);
        cache.replace_by_id(
            &1.into(),
            expense(1, "Lunch", "700", "2024-01-01", Category::Food),
        );

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.snapshot()[0].amount().to_string(), "Ksh 700.00");
        // Order is unchanged by an in-place replacement
        assert_eq!(cache.snapshot()[1].name(), "Bus");
    }

    #[test]
    fn test_replace_by_id_absent_is_a_no_op() {
        let mut cache = LocalCache::default();
        cache.replace_all(vec![expense(1, "Lunch", "500", "2024-01-01", Category::Food)]);
        cache.replace_by_id(
            &99.into(),
            expense(99, "Ghost", "1", "2024-01-01", Category::Other),
        );

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.snapshot()[0].name(), "Lunch");
    }

    #[test]
    fn test_remove_by_id() {
        let mut cache = LocalCache::default();
        cache.replace_all(vec![
            expense(1, "Lunch", "500", "2024-01-01", Category::Food),
            expense(2, "Bus", "100", "2024-01-02", Category::Transport),
        ]);
        cache.remove_by_id(&2.into());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.snapshot()[0].name(), "Lunch");
    }

    #[test]
    fn test_remove_by_id_absent_is_a_no_op() {
        let mut cache = LocalCache::default();
        cache.replace_all(vec![expense(1, "Lunch", "500", "2024-01-01", Category::Food)]);
        cache.remove_by_id(&99.into());
        assert_eq!(cache.len(), 1);
    }
}
