use crate::{
    apis::{
        common::{CancelRequest, CancelResponse},
        original_credits::{OriginalCredit, OriginalCreditList, OriginalCreditRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe original credits API client.
#[derive(Clone, Debug)]
pub struct OriginalCreditsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl OriginalCreditsApi {
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
        name = "Process Original Credit",
        skip(self, request),
        fields(
            merchant_ref_num = ?request.merchant_ref_num,
            amount = ?request.amount,
        )
    )]
    pub async fn process(&self, request: &OriginalCreditRequest) -> Result<OriginalCredit, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/originalcredits")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Original Credit by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<OriginalCredit, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/originalcredits/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Original Credits by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<OriginalCreditList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/originalcredits")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Cancel Original Credit", skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<CancelResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/originalcredits/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
