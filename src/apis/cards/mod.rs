//! Card payloads, including 3-D Secure data.

mod model;
mod threeds;

pub use model::*;
pub use threeds::*;
