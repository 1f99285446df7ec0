use crate::{
    apis::{
        customers::{Customer, CustomerField, CustomerRequest},
        PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe customers API client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CustomerQuery<'a> {
    merchant_customer_id: Option<&'a str>,
    fields: Option<String>,
}

impl<'a> CustomerQuery<'a> {
    fn new(merchant_customer_id: Option<&'a str>, fields: &[CustomerField]) -> Self {
        let fields = (!fields.is_empty()).then(|| {
            fields
                .iter()
                .map(CustomerField::as_str)
                .collect::<Vec<_>>()
                .join(",")
        });

        Self {
            merchant_customer_id,
            fields,
        }
    }
}

impl CustomersApi {
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

    /// Creates a customer profile in the vault.
    #[tracing::instrument(
        name = "Create Customer",
        skip(self, request),
        fields(merchant_customer_id = ?request.merchant_customer_id)
    )]
    pub async fn create(&self, request: &CustomerRequest) -> Result<Customer, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/customers")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Gets a customer profile, embedding the requested sub-resources.
    #[tracing::instrument(name = "Get Customer by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str, fields: &[CustomerField]) -> Result<Customer, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/customers/{}", encode(id)))
            .query(&CustomerQuery::new(None, fields))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Customer by Merchant Customer ID", skip(self))]
    pub async fn get_by_merchant_customer_id(
        &self,
        merchant_customer_id: &str,
        fields: &[CustomerField],
    ) -> Result<Customer, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/customers")
            .query(&CustomerQuery::new(Some(merchant_customer_id), fields))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Update Customer", skip(self, request))]
    pub async fn update(&self, id: &str, request: &CustomerRequest) -> Result<Customer, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/customers/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Delete Customer", skip(self))]
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let http = self.inner.http(self.options.as_ref())?;
        http.delete(&format!("/v1/customers/{}", encode(id)))
            .send()
            .await?;

        Ok(())
    }
}
