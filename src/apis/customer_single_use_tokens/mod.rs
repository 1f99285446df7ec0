//! Short-lived tokens exposing a customer's saved payment handles to a checkout page.

mod api;
mod model;

pub use api::CustomerSingleUseTokensApi;
pub use model::*;
