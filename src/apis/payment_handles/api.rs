use crate::{
    apis::{
        payment_handles::{PaymentHandle, PaymentHandleList, PaymentHandleRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe payment handles API client.
#[derive(Clone, Debug)]
pub struct PaymentHandlesApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl PaymentHandlesApi {
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

    /// Creates a new payment handle.
    #[tracing::instrument(
        name = "Create Payment Handle",
        skip(self, request),
        fields(
            merchant_ref_num = ?request.merchant_ref_num,
            payment_type = ?request.payment_type,
        )
    )]
    pub async fn create(&self, request: &PaymentHandleRequest) -> Result<PaymentHandle, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/paymenthandles")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets an existing payment handle.
    #[tracing::instrument(name = "Get Payment Handle by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<PaymentHandle, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/paymenthandles/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Lists the payment handles matching a merchant reference number.
    #[tracing::instrument(name = "Get Payment Handles by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<PaymentHandleList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/paymenthandles")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
