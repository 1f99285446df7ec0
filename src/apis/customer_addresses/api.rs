use crate::{
    apis::{customers::Address, PaysafeClientInner},
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe customer addresses API client.
#[derive(Clone, Debug)]
pub struct CustomerAddressesApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl CustomerAddressesApi {
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

    #[tracing::instrument(name = "Create Customer Address", skip(self, address))]
    pub async fn create(&self, customer_id: &str, address: &Address) -> Result<Address, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!("/v1/customers/{}/addresses", encode(customer_id)))
            .json(address)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Customer Address by ID", skip(self))]
    pub async fn get_by_id(&self, customer_id: &str, address_id: &str) -> Result<Address, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&address_endpoint(customer_id, address_id))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Update Customer Address", skip(self, address))]
    pub async fn update(
        &self,
        customer_id: &str,
        address_id: &str,
        address: &Address,
    ) -> Result<Address, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&address_endpoint(customer_id, address_id))
            .json(address)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete Customer Address", skip(self))]
    pub async fn delete(&self, customer_id: &str, address_id: &str) -> Result<(), Error> {
        let http = self.inner.http(self.options.as_ref())?;
        http.delete(&address_endpoint(customer_id, address_id))
            .send()
            .await?;

        Ok(())
    }
}

fn address_endpoint(customer_id: &str, address_id: &str) -> String {
    format!(
        "/v1/customers/{}/addresses/{}",
        encode(customer_id),
        encode(address_id)
    )
}
