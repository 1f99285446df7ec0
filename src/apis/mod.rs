//! Clients for the various Paysafe Payments APIs.

use crate::{
    client::{build_client_with_middleware, ClientConfig, Environment},
    common::{PAYMENT_HUB_PATH, SIMULATOR_HEADER},
    error::Error,
    options::RequestOptions,
};
use derive_builder::Builder;
use reqwest::{Method, Url};
use reqwest_middleware::{ClientWithMiddleware, RequestBuilder};
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::fmt::{Debug, Formatter};

pub mod alternative_payments;
pub mod cards;
pub mod common;
pub mod customer_addresses;
pub mod customer_payment_handles;
pub mod customer_single_use_tokens;
pub mod customers;
pub mod monitor;
pub mod original_credits;
pub mod payment_handles;
pub mod payment_methods;
pub mod payments;
pub mod refunds;
pub mod settlements;
pub mod standalone_credits;
pub mod travel;
pub mod verifications;
pub mod void_authorizations;
pub mod wallets;

pub(crate) struct PaysafeClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) config: ClientConfig,
    pub(crate) environment: Environment,
    pub(crate) base_url: Url,
}

impl Debug for PaysafeClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaysafeClientInner")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PaysafeClientInner {
    /// Prepares an HTTP client for a single API call.
    ///
    /// Options overriding the connect timeout or the number of retries get a dedicated
    /// client, every other call goes through the shared one.
    pub(crate) fn http<'a>(
        &'a self,
        options: Option<&'a RequestOptions>,
    ) -> Result<HttpClient<'a>, Error> {
        let dedicated = match options {
            Some(options) => {
                options.validate()?;

                if options.connect_timeout.is_some() || options.max_automatic_retries.is_some() {
                    Some(build_client_with_middleware(
                        &self.config,
                        options
                            .connect_timeout
                            .unwrap_or(self.config.connect_timeout),
                        options
                            .max_automatic_retries
                            .unwrap_or(self.config.max_automatic_retries),
                    )?)
                } else {
                    None
                }
            }
            None => None,
        };

        Ok(HttpClient {
            inner: self,
            dedicated,
            options,
        })
    }
}

/// HTTP client bound to the options of a single API call.
pub(crate) struct HttpClient<'a> {
    inner: &'a PaysafeClientInner,
    dedicated: Option<ClientWithMiddleware>,
    options: Option<&'a RequestOptions>,
}

impl<'a> HttpClient<'a> {
    pub(crate) fn get(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::GET, endpoint)
    }

    pub(crate) fn post(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::POST, endpoint)
    }

    pub(crate) fn put(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::PUT, endpoint)
    }

    pub(crate) fn patch(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::PATCH, endpoint)
    }

    pub(crate) fn delete(&self, endpoint: &str) -> RequestBuilder {
        self.request(Method::DELETE, endpoint)
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let client = self.dedicated.as_ref().unwrap_or(&self.inner.client);
        let url = format!(
            "{}{}{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            PAYMENT_HUB_PATH,
            endpoint
        );

        let response_timeout = self
            .options
            .and_then(|options| options.response_timeout)
            .unwrap_or(self.inner.config.response_timeout);

        // The simulator only exists in the TEST environment and only handles writes
        let simulator = self
            .options
            .and_then(|options| options.simulator)
            .filter(|_| method != Method::GET && self.inner.environment == Environment::Test);

        let mut builder = client.request(method, url).timeout(response_timeout);
        if let Some(simulator) = simulator {
            builder = builder.header(SIMULATOR_HEADER, simulator.as_str());
        }

        builder
    }
}

/// Filters of the endpoints listing resources by merchant reference number.
///
/// Unset filters are omitted from the query string.
///
/// ```rust
/// # use paysafe_payments::apis::ListParametersBuilder;
/// let params = ListParametersBuilder::default()
///     .merchant_ref_num("order-1234")
///     .limit(10u32)
///     .build()
///     .unwrap();
/// ```
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, Default, Eq, PartialEq, Builder)]
#[builder(default, setter(into, strip_option), derive(Debug))]
#[serde(rename_all = "camelCase")]
pub struct ListParameters {
    pub merchant_ref_num: Option<String>,
    /// End of the time window, ISO-8601 (e.g. `2023-10-01T00:00:00Z`).
    pub end_date: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    /// Start of the time window, ISO-8601.
    pub start_date: Option<String>,
}
