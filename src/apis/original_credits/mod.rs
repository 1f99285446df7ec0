//! Original credits: funds sent back to the card of an earlier payment.

mod api;
mod model;

pub use api::OriginalCreditsApi;
pub use model::*;
