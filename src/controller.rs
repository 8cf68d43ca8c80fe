//! The render/sync controller: the one place that talks to the store, mutates the cache, and
//! produces listings.
//!
//! The consistency rules it enforces:
//! - the cache mirrors the last acknowledged server state, and only acknowledged mutations touch
//!   it, so a failed operation leaves the cache and the display unchanged;
//! - every listing recomputes its total from scratch over exactly the rows it displays, never
//!   incrementally from a stale base;
//! - changing the filter re-renders from the cache without a network call.

use crate::api::Store;
use crate::cache::LocalCache;
use crate::model::{Category, CategoryFilter, Expense, ExpenseDraft, ExpenseId};
use crate::view::{by_category, Listing};
use crate::{Error, Result};
use chrono::NaiveDate;
use std::str::FromStr;
use tracing::debug;

/// Orchestrates fetch, cache, filter, aggregate and display. Owns the cache, the active filter
/// and the optional "currently editing" id.
pub struct Controller {
    store: Box<dyn Store + Send>,
    cache: LocalCache,
    filter: CategoryFilter,
    editing: Option<ExpenseId>,
}

impl Controller {
    pub fn new(store: Box<dyn Store + Send>) -> Self {
        Self {
            store,
            cache: LocalCache::default(),
            filter: CategoryFilter::default(),
            editing: None,
        }
    }

    /// Fetches the full collection and replaces the cache with it.
    pub async fn load(&mut self) -> Result<Listing> {
        let records = self.store.list().await?;
        debug!("Loaded {} expenses from the store", records.len());
        self.cache.replace_all(records);
        Ok(self.render())
    }

    /// The primary action: Add-mode when nothing is being edited, Save-mode otherwise.
    ///
    /// Validation runs first; on failure no network call is made and the cache is untouched.
    /// Add appends the server-assigned record; Save replaces the edited record in place and
    /// clears the editing state. Either way the cache only changes after the store acknowledges.
    pub async fn submit(&mut self, form: ExpenseForm) -> Result<Listing> {
        let draft = form.validate()?;
        match self.editing.clone() {
            Some(id) => {
                let updated = self.store.update(&id, &draft).await?;
                self.cache.replace_by_id(&id, updated);
                self.editing = None;
            }
            None => {
                let created = self.store.create(&draft).await?;
                self.cache.append(created);
            }
        }
        Ok(self.render())
    }

    /// Switches to Edit-mode for the cached record with the given id and returns a form
    /// populated from it. No network call and no cache change.
    pub fn begin_edit(&mut self, id: &ExpenseId) -> Result<ExpenseForm> {
        let record = self
            .cache
            .snapshot()
            .iter()
            .find(|e| e.id() == Some(id))
            .ok_or_else(|| Error::validation(format!("No expense with id '{id}' exists")))?;
        let form = ExpenseForm::from_record(record);
        self.editing = Some(id.clone());
        Ok(form)
    }

    /// Resets the form state back to Add-mode without saving.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The id currently being edited, if any.
    pub fn editing(&self) -> Option<&ExpenseId> {
        self.editing.as_ref()
    }

    /// Deletes the record from the store, then removes it from the cache.
    pub async fn delete(&mut self, id: &ExpenseId) -> Result<Listing> {
        self.store.delete(id).await?;
        self.cache.remove_by_id(id);
        Ok(self.render())
    }

    /// Changes the visible category. Re-renders from the cache; no network call.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> Listing {
        self.filter = filter;
        self.render()
    }

    /// Renders the currently visible rows, recomputing the total over exactly those rows.
    pub fn render(&self) -> Listing {
        let rows = by_category(self.cache.snapshot(), self.filter)
            .into_iter()
            .cloned()
            .collect();
        Listing::new(rows)
    }
}

/// The raw user input for an expense, before validation.
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub name: String,
    pub amount: String,
    pub date: String,
    pub category: Option<Category>,
}

impl ExpenseForm {
    /// Populates a form from an existing record, for editing.
    pub(crate) fn from_record(record: &Expense) -> Self {
        Self {
            name: record.name().to_string(),
            amount: record.amount().value().to_string(),
            date: record.date().to_string(),
            category: Some(record.category()),
        }
    }

    /// Checks the validation policy and produces the request body.
    ///
    /// Name must be non-empty, the amount must parse to a positive number, and the date must be
    /// a calendar date. An unset category falls back to `Other`.
    pub(crate) fn validate(&self) -> Result<ExpenseDraft> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::validation("The expense name must not be empty"));
        }

        let amount = crate::model::Amount::from_str(&self.amount)
            .map_err(|_| Error::validation(format!("'{}' is not a valid amount", self.amount)))?;
        if !amount.is_positive() {
            return Err(Error::validation("The amount must be greater than zero"));
        }

        let date = NaiveDate::from_str(self.date.trim()).map_err(|_| {
            Error::validation(format!("'{}' is not a valid date (use YYYY-MM-DD)", self.date))
        })?;

        Ok(ExpenseDraft {
            name: name.to_string(),
            amount,
            date,
            category: self.category.unwrap_or_default(),
        })
    }
}
