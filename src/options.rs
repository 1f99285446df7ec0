use crate::{
    common::{
        MAX_AUTOMATIC_RETRIES_LIMIT, MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE,
        MESSAGE_MAX_AUTOMATIC_RETRIES_LIMIT, MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE,
    },
    error::Error,
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Simulator used by the Paysafe TEST environment to process non-GET requests.
///
/// `External` redirects to the downstream payment method, such as the Skrill login page.
/// `Internal` redirects to the status simulator page, where every payment handle status
/// can be simulated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(not(feature = "compat"), non_exhaustive)]
pub enum PaymentSimulator {
    External,
    Internal,
}

impl PaymentSimulator {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentSimulator::External => "EXTERNAL",
            PaymentSimulator::Internal => "INTERNAL",
        }
    }
}

/// Per-call overrides of the client configuration.
///
/// Attach them to any API with `with_options`:
///
/// ```rust,no_run
/// # use paysafe_payments::{PaysafeClient, Environment, RequestOptionsBuilder};
/// # use std::time::Duration;
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PaysafeClient::new("user:password", Environment::Test)?;
/// let options = RequestOptionsBuilder::default()
///     .response_timeout(Duration::from_secs(10))
///     .max_automatic_retries(0u32)
///     .build()?;
///
/// let status = client
///     .monitor
///     .with_options(options)
///     .verify_that_service_is_accessible()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// Unset timeouts and retry counts fall back to the client configuration.
/// The simulator defaults to [`PaymentSimulator::External`] and is only sent for
/// non-GET requests against the TEST environment.
#[derive(Debug, Clone, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option), derive(Debug))]
pub struct RequestOptions {
    pub connect_timeout: Option<Duration>,
    pub response_timeout: Option<Duration>,
    pub max_automatic_retries: Option<u32>,
    pub simulator: Option<PaymentSimulator>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            response_timeout: None,
            max_automatic_retries: None,
            simulator: Some(PaymentSimulator::External),
        }
    }
}

impl RequestOptions {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        validate_max_automatic_retries(self.max_automatic_retries)?;
        validate_timeout(self.connect_timeout, MESSAGE_CONNECT_TIMEOUT_NOT_POSITIVE)?;
        validate_timeout(self.response_timeout, MESSAGE_RESPONSE_TIMEOUT_NOT_POSITIVE)
    }
}

pub(crate) fn validate_max_automatic_retries(retries: Option<u32>) -> Result<(), Error> {
    match retries {
        Some(n) if n > MAX_AUTOMATIC_RETRIES_LIMIT => Err(Error::InvalidConfiguration(
            MESSAGE_MAX_AUTOMATIC_RETRIES_LIMIT.to_string(),
        )),
        _ => Ok(()),
    }
}

pub(crate) fn validate_timeout(timeout: Option<Duration>, message: &str) -> Result<(), Error> {
    match timeout {
        Some(t) if t.is_zero() => Err(Error::InvalidConfiguration(message.to_string())),
        _ => Ok(()),
    }
}
