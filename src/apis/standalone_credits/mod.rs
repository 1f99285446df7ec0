//! Standalone credits: payouts to a payment instrument not tied to an earlier payment.

mod api;
mod model;

pub use api::StandaloneCreditsApi;
pub use model::*;
