//! Voids releasing, fully or partially, the funds held by an authorization.

mod api;
mod model;

pub use api::VoidAuthorizationsApi;
pub use model::*;
