//! Edits an existing expense: loads it into a form, applies the provided fields, and saves.

use crate::api::Mode;
use crate::args::EditArgs;
use crate::commands::Out;
use crate::controller::Controller;
use crate::view::Listing;
use crate::{api, Config, Result};

pub async fn edit(config: Config, mode: Mode, args: EditArgs) -> Result<Out<Listing>> {
    let mut controller = Controller::new(api::store(&config, mode));
    controller.load().await?;

    // Populate the form from the selected record, then lay the provided fields over it. The
    // store still receives a complete body; the record's fields are replaced wholesale.
    let mut form = controller.begin_edit(args.id())?;
    if let Some(name) = args.name() {
        form.name = name.to_string();
    }
    if let Some(amount) = args.amount() {
        form.amount = amount.to_string();
    }
    if let Some(date) = args.date() {
        form.date = date.to_string();
    }
    if let Some(category) = args.category() {
        form.category = Some(category);
    }

    let listing = controller.submit(form).await?;
    let message = format!("Updated expense {}\n{listing}", args.id());
    Ok(Out::new(message, listing))
}
