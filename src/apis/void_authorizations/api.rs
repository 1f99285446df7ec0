use crate::{
    apis::{
        void_authorizations::{VoidAuthorization, VoidAuthorizationRequest, VoidAuthorizationsList},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe void authorizations API client.
#[derive(Clone, Debug)]
pub struct VoidAuthorizationsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl VoidAuthorizationsApi {
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

    /// Voids an authorized payment that has not been settled.
    #[tracing::instrument(
        name = "Void Authorization",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn process(
        &self,
        payment_id: &str,
        request: &VoidAuthorizationRequest,
    ) -> Result<VoidAuthorization, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post(&format!("/v1/payments/{}/voidauths", encode(payment_id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Void Authorization by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<VoidAuthorization, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/voidauths/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Void Authorizations by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<VoidAuthorizationsList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/voidauths")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
