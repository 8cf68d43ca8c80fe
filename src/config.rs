//! Configuration for the expense store endpoint.
//!
//! The external store owns all durable state, so the only thing this program configures is the
//! base address of the collection resource.

use crate::Result;
use anyhow::Context;
use url::Url;

/// The collection name under the base address.
const COLLECTION: &str = "expenses";

/// The configuration of the app: where the collection resource lives.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: Url,
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL of the whole collection, e.g. `http://localhost:3003/expenses`.
    pub fn collection_url(&self) -> Result<Url> {
        let url = self
            .base_url
            .join(COLLECTION)
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;
        Ok(url)
    }

    /// The URL of a single record, e.g. `http://localhost:3003/expenses/2`.
    pub fn record_url(&self, id: &impl std::fmt::Display) -> Result<Url> {
        let url = self
            .base_url
            .join(&format!("{COLLECTION}/{id}"))
            .with_context(|| format!("Invalid base URL '{}'", self.base_url))?;
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExpenseId;

    fn config() -> Config {
        Config::new(Url::parse("http://localhost:3003").unwrap())
    }

    #[test]
    fn test_collection_url() {
        assert_eq!(
            config().collection_url().unwrap().as_str(),
            "http://localhost:3003/expenses"
        );
    }

    #[test]
    fn test_record_url_numeric_id() {
        let url = config().record_url(&ExpenseId::Number(2)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3003/expenses/2");
    }

    #[test]
    fn test_record_url_text_id() {
        let url = config().record_url(&ExpenseId::Text("a1b2".into())).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3003/expenses/a1b2");
    }
}
