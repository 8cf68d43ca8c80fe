//! Implements the `Store` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without a json-server instance.

use crate::api::Store;
use crate::model::{Expense, ExpenseDraft, ExpenseId};
use crate::{Error, Result};
use anyhow::anyhow;
use std::sync::{Arc, Mutex};

/// An implementation of the `Store` trait that holds its collection in memory. Cloning yields a
/// handle to the same collection, which lets tests inspect the store a controller is using.
#[derive(Debug, Clone)]
pub struct TestStore {
    state: Arc<Mutex<State>>,
}

#[derive(Debug)]
struct State {
    expenses: Vec<Expense>,
    next_id: u64,
    fail: bool,
    calls: u64,
}

impl TestStore {
    /// Creates a store seeded with `expenses`. Newly created records get numeric ids starting
    /// after the largest seeded numeric id.
    pub fn seeded(expenses: Vec<Expense>) -> Self {
        let next_id = expenses
            .iter()
            .filter_map(|e| match e.id() {
                Some(ExpenseId::Number(n)) => Some(n + 1),
                _ => None,
            })
            .max()
            .unwrap_or(1);
        Self {
            state: Arc::new(Mutex::new(State {
                expenses,
                next_id,
                fail: false,
                calls: 0,
            })),
        }
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::seeded(Vec::new())
    }

    /// When set, every subsequent operation fails with a transport error.
    pub fn set_fail(&self, fail: bool) {
        self.state.lock().unwrap().fail = fail;
    }

    /// The number of store operations issued so far, successful or not.
    pub fn calls(&self) -> u64 {
        self.state.lock().unwrap().calls
    }

    /// A copy of the records currently stored.
    pub fn records(&self) -> Vec<Expense> {
        self.state.lock().unwrap().expenses.clone()
    }
}

impl Default for TestStore {
    /// Loads the seed data from this module.
    fn default() -> Self {
        Self::seeded(seed_data())
    }
}

#[async_trait::async_trait]
impl Store for TestStore {
    async fn list(&self) -> Result<Vec<Expense>> {
        let state = self.checked_state()?;
        Ok(state.expenses.clone())
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense> {
        let mut state = self.checked_state()?;
        let id = ExpenseId::Number(state.next_id);
        state.next_id += 1;
        let created = Expense::from_draft(id, draft);
        state.expenses.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense> {
        let mut state = self.checked_state()?;
        let existing = state
            .expenses
            .iter_mut()
            .find(|e| e.id() == Some(id))
            .ok_or_else(|| Error::Transport(anyhow!("No expense with id '{id}' exists")))?;
        *existing = Expense::from_draft(id.clone(), draft);
        Ok(existing.clone())
    }

    async fn delete(&self, id: &ExpenseId) -> Result<()> {
        let mut state = self.checked_state()?;
        let before = state.expenses.len();
        state.expenses.retain(|e| e.id() != Some(id));
        if state.expenses.len() == before {
            return Err(Error::Transport(anyhow!("No expense with id '{id}' exists")));
        }
        Ok(())
    }
}

impl TestStore {
    /// Records the call, then fails if failure injection is on.
    fn checked_state(&self) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fail {
            return Err(Error::Transport(anyhow!("Injected transport failure")));
        }
        Ok(state)
    }
}

/// Provides the seed data for the default store.
fn seed_data() -> Vec<Expense> {
    serde_json::from_str(SEED_DATA).unwrap()
}

/// Seed expense data, in the wire format the collection resource uses.
const SEED_DATA: &str = r#"[
  { "id": 1, "name": "Lunch", "amount": 500, "date": "2024-01-01", "category": "Food" },
  { "id": 2, "name": "Bus fare", "amount": 100, "date": "2024-01-02", "category": "Transport" },
  { "id": 3, "name": "Electricity", "amount": 1450, "date": "2024-01-03", "category": "Utilities" },
  { "id": 4, "name": "Cinema", "amount": 750, "date": "2024-01-05", "category": "Entertainment" },
  { "id": 5, "name": "Groceries", "amount": 2300.5, "date": "2024-01-06", "category": "Food" }
]"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test::{draft, expense};

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = TestStore::empty();
        let first = store
            .create(&draft("Lunch", "500", "2024-01-01", Category::Food))
            .await
            .unwrap();
        let second = store
            .create(&draft("Bus", "100", "2024-01-02", Category::Transport))
            .await
            .unwrap();
        assert_eq!(first.id(), Some(&ExpenseId::Number(1)));
        assert_eq!(second.id(), Some(&ExpenseId::Number(2)));
    }

    #[tokio::test]
    async fn test_ids_continue_after_seed() {
        let store = TestStore::seeded(vec![expense(7, "Lunch", "500", "2024-01-01", Category::Food)]);
        let created = store
            .create(&draft("Bus", "100", "2024-01-02", Category::Transport))
            .await
            .unwrap();
        assert_eq!(created.id(), Some(&ExpenseId::Number(8)));
    }

    #[tokio::test]
    async fn test_update_unknown_id_fails() {
        let store = TestStore::empty();
        let result = store
            .update(&9.into(), &draft("Lunch", "500", "2024-01-01", Category::Food))
            .await;
        assert!(matches!(result, Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = TestStore::seeded(vec![
            expense(1, "Lunch", "500", "2024-01-01", Category::Food),
            expense(2, "Bus", "100", "2024-01-02", Category::Transport),
        ]);
        store.delete(&2.into()).await.unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].name(), "Lunch");
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let store = TestStore::default();
        store.set_fail(true);
        assert!(store.list().await.is_err());
        store.set_fail(false);
        assert!(store.list().await.is_ok());
    }

    #[test]
    fn test_seed_data_parses() {
        let seeded = seed_data();
        assert_eq!(seeded.len(), 5);
        assert!(seeded.iter().all(|e| e.id().is_some()));
        assert!(seeded.iter().all(|e| e.amount().is_positive()));
    }
}
