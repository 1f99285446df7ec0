use crate::{
    apis::{
        customer_payment_handles::{CustomerPaymentHandle, CustomerPaymentHandleRequest},
        PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe customer payment handles API client.
#[derive(Clone, Debug)]
pub struct CustomerPaymentHandlesApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl CustomerPaymentHandlesApi {
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

    /// Saves a payment instrument on a customer profile.
    ///
    /// The created handle is multi-use and can pay any number of later payments.
    #[tracing::instrument(
        name = "Create Customer Payment Handle",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn create(
        &self,
        customer_id: &str,
        request: &CustomerPaymentHandleRequest,
    ) -> Result<CustomerPaymentHandle, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!("/v1/customers/{}/paymenthandles", encode(customer_id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Customer Payment Handle by ID", skip(self))]
    pub async fn get_by_id(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
    ) -> Result<CustomerPaymentHandle, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&payment_handle_endpoint(customer_id, payment_handle_id))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Update Customer Payment Handle", skip(self, request))]
    pub async fn update(
        &self,
        customer_id: &str,
        payment_handle_id: &str,
        request: &CustomerPaymentHandleRequest,
    ) -> Result<CustomerPaymentHandle, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&payment_handle_endpoint(customer_id, payment_handle_id))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete Customer Payment Handle", skip(self))]
    pub async fn delete(&self, customer_id: &str, payment_handle_id: &str) -> Result<(), Error> {
        let http = self.inner.http(self.options.as_ref())?;
        http.delete(&payment_handle_endpoint(customer_id, payment_handle_id))
            .send()
            .await?;

        Ok(())
    }
}

fn payment_handle_endpoint(customer_id: &str, payment_handle_id: &str) -> String {
    format!(
        "/v1/customers/{}/paymenthandles/{}",
        encode(customer_id),
        encode(payment_handle_id)
    )
}
