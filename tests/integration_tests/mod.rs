mod customers;
#[cfg(not(feature = "acceptance-tests"))]
mod errors;
mod helpers;
mod monitor;
mod payments;
