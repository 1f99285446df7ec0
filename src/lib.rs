//! Rust client for the [Paysafe](https://www.paysafe.com) Payments API.
//!
//! Check out also the official Paysafe [API documentation](https://developer.paysafe.com/en/api-docs/payments-api/).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Sign up for a Paysafe merchant account and retrieve your API key from the Business Portal.
//! API keys have the `username:password` format and are sent Base64-encoded with Basic
//! authentication on every request.
//!
//! ## Initialize a new `PaysafeClient`
//!
//! ```rust,no_run
//! # use paysafe_payments::{PaysafeClient, Environment};
//! let client = PaysafeClient::builder("merchant-user:B-qa2-0-secret")
//!     .with_environment(Environment::Test)
//!     .build()
//!     .unwrap();
//! ```
//!
//! By default, a `PaysafeClient` connects to the TEST environment. In TEST, non-GET requests
//! are answered by the payment simulator selected in the [`RequestOptions`].
//! Use [`with_environment(Environment::Live)`](crate::client::PaysafeClientBuilder::with_environment)
//! to process real transactions.
//!
//! ## Create a payment handle and pay with it
//!
//! ```rust,no_run
//! # use paysafe_payments::{PaysafeClient, Error, apis::{cards::*, common::*, payment_handles::*, payments::*}};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: PaysafeClient = unreachable!();
//! #
//! let handle = client
//!     .payment_handles
//!     .create(&PaymentHandleRequest {
//!         merchant_ref_num: Some("order-1234".into()),
//!         transaction_type: Some(TransactionType::Payment),
//!         payment_type: Some(PaymentType::Card),
//!         amount: Some(500),
//!         currency_code: Some(CurrencyCode::Usd),
//!         card: Some(Card {
//!             card_num: Some("4000000000001000".into()),
//!             card_expiry: Some(CardExpiry {
//!                 month: Some(10),
//!                 year: Some(2030),
//!             }),
//!             cvv: Some("111".into()),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let payment = client
//!     .payments
//!     .process(&PaymentRequest {
//!         merchant_ref_num: Some("order-1234".into()),
//!         amount: Some(500),
//!         currency_code: Some(CurrencyCode::Usd),
//!         payment_handle_token: handle.payment_handle_token,
//!         settle_with_auth: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! tracing::info!(id = ?payment.id, status = ?payment.status, "Payment processed");
//! # Ok(())
//! # }
//! ```
//!
//! ## Handling errors
//!
//! Non-2xx responses are mapped to [`Error::ApiError`], carrying the HTTP status, the
//! Paysafe error object and the internal correlation id of the request.
//!
//! ```rust,no_run
//! # use paysafe_payments::{PaysafeClient, Error, error::ApiErrorKind};
//! #
//! # #[tokio::main]
//! # async fn main() {
//! # let client: PaysafeClient = unreachable!();
//! #
//! match client.payments.get_by_id("some-payment-id").await {
//!     Ok(payment) => println!("Payment status: {:?}", payment.status),
//!     Err(e) if e.kind() == Some(ApiErrorKind::Unsuccessful) => {
//!         println!("Not found: {:?}", e.error().and_then(|e| e.message.as_deref()))
//!     }
//!     Err(e) => println!("Request failed: {}", e),
//! }
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
mod auth;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod options;

pub use auth::ApiKey;
pub use client::{Environment, PaysafeClient, PaysafeClientBuilder};
pub use error::Error;
pub use options::{PaymentSimulator, RequestOptions, RequestOptionsBuilder};
