//! Lookup of the payment methods configured on the merchant account.

mod api;
mod model;

pub use api::PaymentMethodsApi;
pub use model::*;
