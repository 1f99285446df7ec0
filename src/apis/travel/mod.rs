//! Travel industry details attached to payments and settlements.

mod airline;
mod car_rental;
mod cruise;
mod lodging;

pub use airline::*;
pub use car_rental::*;
pub use cruise::*;
pub use lodging::*;
