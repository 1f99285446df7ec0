//! Refunds of settled payments.

mod api;
mod model;

pub use api::RefundsApi;
pub use model::*;
