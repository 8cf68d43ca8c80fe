//! These structs provide the CLI interface for the expenses CLI.

use crate::model::{Category, CategoryFilter, ExpenseId};
use clap::{Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;
use url::Url;

/// expenses: A command-line expense tracker.
///
/// The purpose of this program is to track expenses stored in a REST collection resource such
/// as a json-server instance. Expenses are listed with a running total, can be filtered by
/// category, and can be added, edited and deleted. The server owns durable persistence; this
/// program keeps only an in-memory mirror for the duration of a command.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List stored expenses and their running total, optionally filtered by category.
    List(ListArgs),
    /// Add a new expense.
    Add(AddArgs),
    /// Edit an existing expense. Fields that are not provided keep their current values, but the
    /// record is replaced wholesale on the server.
    Edit(EditArgs),
    /// Delete an expense by id.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. See the tracing-subscriber crate for instructions.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The base address of the expense collection resource.
    #[arg(long, env = "EXPENSE_SYNC_URL", default_value_t = default_base_url())]
    base_url: Url,
}

impl Common {
    pub fn new(log_level: LevelFilter, base_url: Url) -> Self {
        Self {
            log_level,
            base_url,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Args for the `expenses list` command.
#[derive(Debug, Parser, Clone)]
pub struct ListArgs {
    /// Show only expenses in this category, or "all" for every category.
    #[arg(long, default_value_t = CategoryFilter::All)]
    category: CategoryFilter,
}

impl ListArgs {
    pub fn category(&self) -> CategoryFilter {
        self.category
    }
}

/// Args for the `expenses add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// What the expense was for.
    #[arg(long)]
    name: String,

    /// The amount spent, e.g. 500 or 1,250.50. Must be greater than zero.
    #[arg(long)]
    amount: String,

    /// The date of the expense, e.g. 2024-01-01.
    #[arg(long)]
    date: String,

    /// The expense category. Defaults to Other.
    #[arg(long)]
    category: Option<Category>,
}

impl AddArgs {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }
}

/// Args for the `expenses edit` command.
#[derive(Debug, Parser, Clone)]
pub struct EditArgs {
    /// The id of the expense to edit, as shown by `expenses list`.
    id: ExpenseId,

    /// A new name for the expense.
    #[arg(long)]
    name: Option<String>,

    /// A new amount for the expense. Must be greater than zero.
    #[arg(long)]
    amount: Option<String>,

    /// A new date for the expense, e.g. 2024-01-01.
    #[arg(long)]
    date: Option<String>,

    /// A new category for the expense.
    #[arg(long)]
    category: Option<Category>,
}

impl EditArgs {
    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }
}

/// Args for the `expenses delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The id of the expense to delete, as shown by `expenses list`.
    id: ExpenseId,
}

impl DeleteArgs {
    pub fn id(&self) -> &ExpenseId {
        &self.id
    }
}

fn default_base_url() -> Url {
    // The literal is known-valid.
    Url::parse("http://localhost:3003").expect("the default base URL must parse")
}
