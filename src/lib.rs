pub mod api;
pub mod args;
mod cache;
pub mod commands;
mod config;
mod controller;
mod error;
pub mod model;
#[cfg(test)]
mod test;
mod view;

pub use api::Mode;
pub use cache::LocalCache;
pub use config::Config;
pub use controller::{Controller, ExpenseForm};
pub use error::Error;
pub use error::Result;
pub use view::Listing;
