use crate::{
    apis::{monitor::MonitorResponse, PaysafeClientInner},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;

/// Paysafe monitor API client.
#[derive(Clone, Debug)]
pub struct MonitorApi {
    pub(crate) inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl MonitorApi {
    pub(crate) fn new(inner: Arc<PaysafeClientInner>) -> Self {
        Self {
            inner,
            options: None,
        }
    }

    /// Returns a copy of this client whose calls use the given options.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            inner: self.inner.clone(),
            options: Some(options),
        }
    }

    /// Checks that the Payments API is up and reachable with the configured credentials.
    #[tracing::instrument(name = "Verify Service Is Accessible", skip(self))]
    pub async fn verify_that_service_is_accessible(&self) -> Result<MonitorResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http.get("/v1/monitor").send().await?.json().await?;

        Ok(res)
    }
}
