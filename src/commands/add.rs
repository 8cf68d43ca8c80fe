//! Adds a new expense to the store.

use crate::api::Mode;
use crate::args::AddArgs;
use crate::commands::Out;
use crate::controller::{Controller, ExpenseForm};
use crate::view::Listing;
use crate::{api, Config, Result};

pub async fn add(config: Config, mode: Mode, args: AddArgs) -> Result<Out<Listing>> {
    let mut controller = Controller::new(api::store(&config, mode));
    controller.load().await?;

    let form = ExpenseForm {
        name: args.name().to_string(),
        amount: args.amount().to_string(),
        date: args.date().to_string(),
        category: args.category(),
    };
    let listing = controller.submit(form).await?;

    let message = match listing.rows().last().and_then(|e| e.id()) {
        Some(id) => format!("Added expense '{}' with id {id}\n{listing}", args.name()),
        None => format!("Added expense '{}'\n{listing}", args.name()),
    };
    Ok(Out::new(message, listing))
}
