//! The expense record and its store-assigned identifier.

use crate::model::{Amount, Category};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The opaque identifier the store assigns to a record on creation.
///
/// json-server assigns integer ids in v0 and short random string ids in v1, so both shapes are
/// accepted. `0` is a valid id; "no id yet" and "not editing" are always expressed with
/// `Option`, never with a sentinel value.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpenseId {
    Number(u64),
    Text(String),
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpenseId::Number(n) => write!(f, "{n}"),
            ExpenseId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for ExpenseId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(n) => Ok(ExpenseId::Number(n)),
            Err(_) => Ok(ExpenseId::Text(s.to_string())),
        }
    }
}

impl From<u64> for ExpenseId {
    fn from(n: u64) -> Self {
        ExpenseId::Number(n)
    }
}

/// A single expense record as stored by the collection resource.
///
/// The `id` is absent before the store acknowledges creation and present on every record the
/// store returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<ExpenseId>,
    pub(crate) name: String,
    pub(crate) amount: Amount,
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
}

impl Expense {
    /// Builds the record the in-memory store returns for a created or updated draft.
    pub(crate) fn from_draft(id: ExpenseId, draft: &ExpenseDraft) -> Self {
        Self {
            id: Some(id),
            name: draft.name.clone(),
            amount: draft.amount,
            date: draft.date,
            category: draft.category,
        }
    }

    pub fn id(&self) -> Option<&ExpenseId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

/// The id-less request body sent to the store on create and update.
///
/// Update replaces the record's fields wholesale; there is no field-level merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseDraft {
    pub(crate) name: String,
    pub(crate) amount: Amount,
    pub(crate) date: NaiveDate,
    pub(crate) category: Category,
}
