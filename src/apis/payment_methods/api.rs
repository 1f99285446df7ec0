use crate::{
    apis::{common::CurrencyCode, payment_methods::LookUpPaymentMethodsResponse, PaysafeClientInner},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;

/// Paysafe payment methods API client.
#[derive(Clone, Debug)]
pub struct PaymentMethodsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl PaymentMethodsApi {
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

    /// Lists the payment methods, and the accounts processing them, available for a currency.
    #[tracing::instrument(name = "Look Up Payment Methods", skip(self), fields(currency_code = %currency_code))]
    pub async fn look_up(
        &self,
        currency_code: CurrencyCode,
    ) -> Result<LookUpPaymentMethodsResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/paymentmethods")
            .query(&[("currencyCode", currency_code.to_string())])
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
