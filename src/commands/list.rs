//! Lists stored expenses, optionally filtered by category, with the running total.

use crate::api::Mode;
use crate::commands::Out;
use crate::controller::Controller;
use crate::model::CategoryFilter;
use crate::view::Listing;
use crate::{api, Config, Result};

pub async fn list(config: Config, mode: Mode, filter: CategoryFilter) -> Result<Out<Listing>> {
    let mut controller = Controller::new(api::store(&config, mode));
    controller.load().await?;
    let listing = controller.set_filter(filter);
    Ok(Out::new(listing.to_string(), listing))
}
