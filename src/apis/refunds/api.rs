use crate::{
    apis::{
        common::{CancelRequest, CancelResponse},
        refunds::{Refund, RefundList, RefundRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe refunds API client.
#[derive(Clone, Debug)]
pub struct RefundsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl RefundsApi {
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

    /// Refunds, fully or partially, a settlement.
    #[tracing::instrument(
        name = "Process Refund",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn process(&self, settlement_id: &str, request: &RefundRequest) -> Result<Refund, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!("/v1/settlements/{}/refunds", encode(settlement_id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Refund by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Refund, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/refunds/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Refunds by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<RefundList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/refunds")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Cancel Refund", skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<CancelResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/refunds/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
