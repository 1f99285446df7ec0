use crate::{
    apis::{
        common::{CancelRequest, CancelResponse},
        standalone_credits::{
            StandaloneCredit, StandaloneCreditList, StandaloneCreditRequest,
            StandaloneCreditUpdateRequest,
        },
        ListParameters, PaysafeClientInner,
    },
    options::RequestOptions,
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// Paysafe standalone credits API client.
#[derive(Clone, Debug)]
pub struct StandaloneCreditsApi {
    inner: Arc<PaysafeClientInner>,
    options: Option<RequestOptions>,
}

impl StandaloneCreditsApi {
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

    /// Sends funds to the payment instrument behind a payment handle.
    #[tracing::instrument(
        name = "Process Standalone Credit",
        skip(self, request),
        fields(
            merchant_ref_num = ?request.merchant_ref_num,
            amount = ?request.amount,
        )
    )]
    pub async fn process(
        &self,
        request: &StandaloneCreditRequest,
    ) -> Result<StandaloneCredit, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .post("/v1/standalonecredits")
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Standalone Credit by ID", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Result<StandaloneCredit, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get(&format!("/v1/standalonecredits/{}", encode(id)))
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Get Standalone Credits by Merchant Reference Number", skip(self))]
    pub async fn get_by_merchant_ref_num(
        &self,
        params: &ListParameters,
    ) -> Result<StandaloneCreditList, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .get("/v1/standalonecredits")
            .query(params)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    #[tracing::instrument(name = "Cancel Standalone Credit", skip(self, request))]
    pub async fn cancel(&self, id: &str, request: &CancelRequest) -> Result<CancelResponse, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .put(&format!("/v1/standalonecredits/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }

    /// Reports an Interac e-Transfer standalone credit as fraudulent, or clears it.
    #[tracing::instrument(name = "Update Standalone Credit for Interac Fraud", skip(self, request))]
    pub async fn update_for_interac_fraud(
        &self,
        id: &str,
        request: &StandaloneCreditUpdateRequest,
    ) -> Result<StandaloneCredit, Error> {
        let http = self.inner.http(self.options.as_ref())?;
        let res = http
            .patch(&format!("/v1/standalonecredits/{}", encode(id)))
            .json(request)
            .send()
            .await?
            .json()
            .await?;

        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        apis::{
            alternative_payments::{Interac, InteracFraudStatus, InteracFraudType},
            common::{CurrencyCode, TransactionRequestStatus},
            test_utils::mock_inner_and_server,
            ListParametersBuilder,
        },
        error::ApiErrorKind,
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, ResponseTemplate,
    };

    const STANDALONE_CREDIT_ID: &str = "eddbec36-6fc7-48fb-a694-dfc5b314ec0d";
    const MERCHANT_REF_NUM: &str = "32be35aac78dbfe252a2";

    fn credit_body() -> serde_json::Value {
        json!({
            "id": STANDALONE_CREDIT_ID,
            "merchantRefNum": MERCHANT_REF_NUM,
            "amount": 500,
            "currencyCode": "USD",
            "paymentType": "CARD",
            "status": "PENDING",
            "cardSchemeTransactionId": "SIM1UZ3YM7IS1",
            "card": {"lastDigits": "0000", "cardType": "VI"}
        })
    }

    fn not_found() -> ResponseTemplate {
        ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "code": "5269",
                "message": "Entity not found",
                "details": ["The ID(s) specified in the URL do not correspond to the values in the system."]
            }
        }))
    }

    #[tokio::test]
    async fn process() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("POST"))
            .and(path("/paymenthub/v1/standalonecredits"))
            .and(body_json(json!({
                "merchantRefNum": MERCHANT_REF_NUM,
                "amount": 500,
                "currencyCode": "USD",
                "paymentHandleToken": "SCQp7CmWCSRFmvzv",
                "description": "Winning payment from Loto 649"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(credit_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = StandaloneCreditRequest {
            merchant_ref_num: Some(MERCHANT_REF_NUM.into()),
            amount: Some(500),
            currency_code: Some(CurrencyCode::Usd),
            payment_handle_token: Some("SCQp7CmWCSRFmvzv".into()),
            description: Some("Winning payment from Loto 649".into()),
            ..Default::default()
        };
        let credit = StandaloneCreditsApi::new(inner)
            .process(&request)
            .await
            .unwrap();

        assert_eq!(credit.id.as_deref(), Some(STANDALONE_CREDIT_ID));
        assert_eq!(credit.amount, Some(500));
        assert_eq!(credit.status, Some(TransactionRequestStatus::Pending));
    }

    #[tokio::test]
    async fn get_by_id() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("GET"))
            .and(path(format!(
                "/paymenthub/v1/standalonecredits/{}",
                STANDALONE_CREDIT_ID
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(credit_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let credit = StandaloneCreditsApi::new(inner)
            .get_by_id(STANDALONE_CREDIT_ID)
            .await
            .unwrap();

        assert_eq!(credit.merchant_ref_num.as_deref(), Some(MERCHANT_REF_NUM));
        assert_eq!(credit.currency_code, Some(CurrencyCode::Usd));
        assert_eq!(
            credit.card_scheme_transaction_id.as_deref(),
            Some("SIM1UZ3YM7IS1")
        );
    }

    #[tokio::test]
    async fn get_by_merchant_ref_num_not_found() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("GET"))
            .and(path("/paymenthub/v1/standalonecredits"))
            .and(query_param("merchantRefNum", MERCHANT_REF_NUM))
            .respond_with(not_found())
            .expect(1)
            .mount(&mock_server)
            .await;

        let params = ListParametersBuilder::default()
            .merchant_ref_num(MERCHANT_REF_NUM)
            .build()
            .unwrap();
        let err = StandaloneCreditsApi::new(inner)
            .get_by_merchant_ref_num(&params)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), Some(ApiErrorKind::Unsuccessful));
        assert_eq!(err.code(), Some(404));
        assert_eq!(
            err.error().unwrap().details.as_ref().unwrap()[0],
            "The ID(s) specified in the URL do not correspond to the values in the system."
        );
    }

    #[tokio::test]
    async fn cancel() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("PUT"))
            .and(path(format!(
                "/paymenthub/v1/standalonecredits/{}",
                STANDALONE_CREDIT_ID
            )))
            .and(body_json(json!({"status": "CANCELLED"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": STANDALONE_CREDIT_ID,
                "status": "CANCELLED"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let res = StandaloneCreditsApi::new(inner)
            .cancel(STANDALONE_CREDIT_ID, &CancelRequest::cancelled())
            .await
            .unwrap();

        assert_eq!(res.id.as_deref(), Some(STANDALONE_CREDIT_ID));
        assert_eq!(res.status, Some(TransactionRequestStatus::Cancelled));
    }

    #[tokio::test]
    async fn update_for_interac_fraud() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("PATCH"))
            .and(path(format!(
                "/paymenthub/v1/standalonecredits/{}",
                STANDALONE_CREDIT_ID
            )))
            .and(body_json(json!({
                "interacEtransfer": {
                    "consumerId": "123456",
                    "fraudStatus": "CONFIRM_FRAUD",
                    "fraudType": "FRAUD_BUSINESS"
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": STANDALONE_CREDIT_ID,
                "paymentType": "INTERAC_ETRANSFER",
                "interacETransfer": {"consumerId": "123456", "fraudStatus": "CONFIRM_FRAUD"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let request = StandaloneCreditUpdateRequest {
            interac_etransfer: Some(Interac {
                consumer_id: Some("123456".into()),
                fraud_status: Some(InteracFraudStatus::ConfirmFraud),
                fraud_type: Some(InteracFraudType::FraudBusiness),
                ..Default::default()
            }),
            ..Default::default()
        };
        let credit = StandaloneCreditsApi::new(inner)
            .update_for_interac_fraud(STANDALONE_CREDIT_ID, &request)
            .await
            .unwrap();

        assert_eq!(credit.id.as_deref(), Some(STANDALONE_CREDIT_ID));
        assert_eq!(
            credit.interac_etransfer.unwrap().fraud_status,
            Some(InteracFraudStatus::ConfirmFraud)
        );
    }

    #[tokio::test]
    async fn update_for_interac_fraud_not_found() {
        let (inner, mock_server) = mock_inner_and_server().await;
        Mock::given(method("PATCH"))
            .and(path("/paymenthub/v1/standalonecredits/invalid"))
            .respond_with(not_found())
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = StandaloneCreditsApi::new(inner)
            .update_for_interac_fraud("invalid", &StandaloneCreditUpdateRequest::default())
            .await
            .unwrap_err();

        assert_eq!(err.code(), Some(404));
        assert_eq!(err.error().unwrap().code.as_deref(), Some("5269"));
    }
}
