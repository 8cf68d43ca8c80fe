//! Deletes an expense from the store.

use crate::api::Mode;
use crate::commands::Out;
use crate::controller::Controller;
use crate::model::ExpenseId;
use crate::view::Listing;
use crate::{api, Config, Result};

pub async fn delete(config: Config, mode: Mode, id: ExpenseId) -> Result<Out<Listing>> {
    let mut controller = Controller::new(api::store(&config, mode));
    controller.load().await?;
    let listing = controller.delete(&id).await?;
    let message = format!("Deleted expense {id}\n{listing}");
    Ok(Out::new(message, listing))
}
