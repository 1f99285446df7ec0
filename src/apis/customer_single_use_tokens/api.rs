use crate::{
    apis::{
        customer_single_use_tokens::{SingleUseCustomerToken, SingleUseCustomerTokenRequest},
        PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe single-use customer tokens API client.
#[derive(Clone, Debug)]
pub struct CustomerSingleUseTokensApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl CustomerSingleUseTokensApi {
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

    #[tracing::instrument(
        name = "Create Single-Use Customer Token",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn create(
        &self,
        customer_id: &str,
        request: &SingleUseCustomerTokenRequest,
    ) -> Result<SingleUseCustomerToken, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!(
                "/v1/customers/{}/singleusecustomertokens",
                encode(customer_id)
            ))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Single-Use Customer Token by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<SingleUseCustomerToken, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/singleusecustomertokens/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
