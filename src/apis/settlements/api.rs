use crate::{
    apis::{
        common::{CancelRequest, CancelResponse},
        settlements::{Settlement, SettlementList, SettlementRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe settlements API client.
#[derive(Clone, Debug)]
pub struct SettlementsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl SettlementsApi {
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

    /// Settles a payment that was authorized without `settle_with_auth`.
    #[tracing::instrument(
        name = "Process Settlement",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn process(
        &self,
        payment_id: &str,
        request: &SettlementRequest,
    ) -> Result<Settlement, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!("/v1/payments/{}/settlements", encode(payment_id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Settlement by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Settlement, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/settlements/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Settlements by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<SettlementList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/settlements")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Cancels a settlement which has not been batched yet.
    #[tracing::instrument(name = "Cancel Settlement", skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<CancelResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/settlements/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
