//! Shared test utilities for constructing expense fixtures.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::controller::ExpenseForm;
use crate::model::{Amount, Category, Expense, ExpenseDraft, ExpenseId};
use chrono::NaiveDate;
use std::str::FromStr;

/// Builds an expense record the way the store would return it.
pub(crate) fn expense(id: u64, name: &str, amount: &str, date: &str, category: Category) -> Expense {
    Expense::from_draft(ExpenseId::Number(id), &draft(name, amount, date, category))
}

/// Builds the id-less request body for a create or update.
pub(crate) fn draft(name: &str, amount: &str, date: &str, category: Category) -> ExpenseDraft {
    ExpenseDraft {
        name: name.to_string(),
        amount: Amount::from_str(amount).unwrap(),
        date: NaiveDate::from_str(date).unwrap(),
        category,
    }
}

/// Builds raw form input, valid or not.
pub(crate) fn form(name: &str, amount: &str, date: &str, category: Option<Category>) -> ExpenseForm {
    ExpenseForm {
        name: name.to_string(),
        amount: amount.to_string(),
        date: date.to_string(),
        category,
    }
}
