//! API key handling.

use crate::{
    common::{MESSAGE_BLANK_API_KEY, MESSAGE_INVALID_API_KEY_FORMAT},
    error::Error,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, Secret};
use std::fmt;

static API_KEY_FORMAT: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[^:\s]+:[^:\s]+$"));

/// Paysafe API key in the `username:password` format.
///
/// The key is held in a [`secrecy::Secret`], so it is redacted when printed with `Debug`.
///
/// ```rust
/// # use paysafe_payments::ApiKey;
/// let api_key = ApiKey::new("merchant-user:B-qa2-0-secret");
///
/// assert!(!format!("{:?}", api_key).contains("B-qa2-0-secret"));
/// ```
///
/// Once wrapped, the key cannot be read back outside the crate:
///
/// ```compile_fail
/// # use paysafe_payments::ApiKey;
/// let api_key = ApiKey::new("merchant-user:B-qa2-0-secret");
/// let _ = api_key.expose_secret();
/// ```
#[derive(Clone)]
pub struct ApiKey(Secret<String>);

impl ApiKey {
    /// Wraps a raw `username:password` string.
    ///
    /// The format is checked when the client is built.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    pub(crate) fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        let key = self.expose_secret();
        if key.trim().is_empty() {
            return Err(Error::InvalidConfiguration(MESSAGE_BLANK_API_KEY.to_string()));
        }

        let format = API_KEY_FORMAT
            .as_ref()
            .map_err(|e| Error::Other(e.clone().into()))?;
        if !format.is_match(key) {
            return Err(Error::InvalidConfiguration(
                MESSAGE_INVALID_API_KEY_FORMAT.to_string(),
            ));
        }

        Ok(())
    }

    /// Value of the `Authorization` header for this key.
    pub(crate) fn basic_authorization(&self) -> String {
        format!("Basic {}", STANDARD.encode(self.expose_secret()))
    }
}

impl<T> From<T> for ApiKey
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        ApiKey::new(s)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}
