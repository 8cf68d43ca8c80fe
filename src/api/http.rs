//! Implements the `Store` trait against an HTTP collection resource such as json-server.

use crate::api::Store;
use crate::model::{Expense, ExpenseDraft, ExpenseId};
use crate::{Config, Result};
use anyhow::Context;
use tracing::trace;

/// Talks to `{base_url}/expenses` with one request per operation.
pub(super) struct HttpStore {
    config: Config,
    client: reqwest::Client,
}

impl HttpStore {
    pub(super) fn new(config: Config) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl Store for HttpStore {
    async fn list(&self) -> Result<Vec<Expense>> {
        let url = self.config.collection_url()?;
        trace!("GET {url}");
        let expenses = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context("Failed to fetch expenses")?
            .json()
            .await
            .context("Failed to parse the expense listing")?;
        Ok(expenses)
    }

    async fn create(&self, draft: &ExpenseDraft) -> Result<Expense> {
        let url = self.config.collection_url()?;
        trace!("POST {url}");
        let created = self
            .client
            .post(url)
            .json(draft)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .context("Failed to create the expense")?
            .json()
            .await
            .context("Failed to parse the created expense")?;
        Ok(created)
    }

    async fn update(&self, id: &ExpenseId, draft: &ExpenseDraft) -> Result<Expense> {
        let url = self.config.record_url(id)?;
        trace!("PUT {url}");
        let updated = self
            .client
            .put(url)
            .json(draft)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to update expense '{id}'"))?
            .json()
            .await
            .context("Failed to parse the updated expense")?;
        Ok(updated)
    }

    async fn delete(&self, id: &ExpenseId) -> Result<()> {
        let url = self.config.record_url(id)?;
        trace!("DELETE {url}");
        // Acknowledgment only; the response body is not part of the contract.
        let _ = self
            .client
            .delete(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to delete expense '{id}'"))?;
        Ok(())
    }
}
