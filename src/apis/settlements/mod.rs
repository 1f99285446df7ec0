//! Settlements of authorized payments.

mod api;
mod model;

pub use api::SettlementsApi;
pub use model::*;
