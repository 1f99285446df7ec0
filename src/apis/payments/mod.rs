//! Payments: authorizations and sales processed against a payment handle.

mod api;
mod model;

pub use api::PaymentsApi;
pub use model::*;
