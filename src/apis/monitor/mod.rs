//! Health check of the Payments API.

mod api;
mod model;

pub use api::MonitorApi;
pub use model::*;
