//! Customer profiles stored in the Paysafe vault, with their addresses and payment handles.

mod api;
mod model;

pub use api::CustomersApi;
pub use model::*;
