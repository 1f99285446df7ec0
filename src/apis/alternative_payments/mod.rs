//! Payloads of alternative payment methods: bank transfers, direct debits and e-wallets.

mod bank;
mod wallet;

pub use bank::*;
pub use wallet::*;
