use crate::{
    apis::{
        common::{CancelRequest, CancelResponse},
        payments::{Payment, PaymentList, PaymentRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe payments API client.
#[derive(Clone, Debug)]
pub struct PaymentsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl PaymentsApi {
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

    /// Processes a payment using a payment handle token.
    ///
    /// A declined payment fails with [`ApiErrorKind::RequestDeclined`](crate::error::ApiErrorKind::RequestDeclined),
    /// the [`Payment`] returned by the server being available through
    /// [`ApiError::declined_response`](crate::error::ApiError::declined_response).
    #[tracing::instrument(
        name = "Process Payment",
        skip(self, request),
        fields(
            merchant_ref_num = ?request.merchant_ref_num,
            amount = ?request.amount,
        )
    )]
    pub async fn process(&self, request: &PaymentRequest) -> Result<Payment, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/payments")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Payment by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Payment, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/payments/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Payments by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<PaymentList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/payments")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Cancels a pending payment.
    #[tracing::instrument(name = "Cancel Payment", skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<CancelResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/payments/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
