use crate::{
    apis::{
        verifications::{Verification, VerificationList, VerificationRequest},
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe verifications API client.
#[derive(Clone, Debug)]
pub struct VerificationsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl VerificationsApi {
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
        name = "Create Verification",
        skip(self, request),
        fields(merchant_ref_num = ?request.merchant_ref_num)
    )]
    pub async fn create(&self, request: &VerificationRequest) -> Result<Verification, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/verifications")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Verification by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<Verification, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/verifications/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Verifications by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<VerificationList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/verifications")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}
