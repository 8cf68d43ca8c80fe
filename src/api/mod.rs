//! The client for the external collection resource.
//!
//! The `Store` trait is the seam between the sync logic and the transport: the production
//! implementation talks HTTP to a json-server style collection, and an in-memory implementation
//! lets the whole app run without a server.

mod http;
mod test_store;

use crate::model::{Expense, ExpenseDraft, ExpenseId};
use crate::{Config, Result};

pub use test_store::TestStore;

/// The four operations the collection resource supports. Each is a single round trip; failures
/// are terminal for that operation and nothing is retried.
#[async_trait::async_trait]
pub trait Store {
    /// Returns the ordered sequence of all expense records currently stored.
    async fn list(&self) -> Result<Vec<Expense>>;

    /// Creates a record from an id-less draft and returns the server-assigned record, including
    /// its new id.
    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense>;

    /// Replaces the fields of the record with the given id wholesale and returns the server's
    /// post-update representation.
    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense>;

    /// Deletes the record with the given id. Acknowledgment only; no body contract.
    async fn delete(&self, id: &ExpenseId) -> Result<()>;
}

/// Whether to use the real HTTP store or the in-memory test store.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Http,
    Test,
}

impl Mode {
    /// Returns `Mode::Test` when `EXPENSE_SYNC_IN_TEST_MODE` is set and non-zero in length,
    /// otherwise `Mode::Http`.
    pub fn from_env() -> Self {
        match std::env::var("EXPENSE_SYNC_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Http,
        }
    }
}

/// Creates the `Store` implementation for the given mode.
pub fn store(config: &Config, mode: Mode) -> Box<dyn Store + Send> {
    match mode {
        Mode::Http => Box::new(http::HttpStore::new(config.clone())),
        Mode::Test => Box::new(TestStore::default()),
    }
}
