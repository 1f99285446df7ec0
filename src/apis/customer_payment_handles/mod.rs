//! Multi-use payment handles stored on a customer profile.

mod api;
mod model;

pub use api::CustomerPaymentHandlesApi;
pub use model::*;
