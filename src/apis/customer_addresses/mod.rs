//! Addresses stored on a customer profile.

mod api;

pub use api::CustomerAddressesApi;
