//! Apple Pay and Google Pay payloads.

mod apple_pay;
mod google_pay;

pub use apple_pay::*;
pub use google_pay::*;
