//! Payment handles: tokenized payment instruments a payment is processed against.

mod api;
mod model;

pub use api::PaymentHandlesApi;
pub use model::*;
