//! Account verifications: checks of a payment instrument without moving funds.

mod api;
mod model;

pub use api::VerificationsApi;
pub use model::*;
