use crate::{
    apis::{
        alternative_payments::{
            Ach, Bacs, Eft, Interac, Mazooma, Neteller, PayByBank, PaymentDetails, Paypal,
            Paysafecard, Paysafecash, RapidTransfer, SafetyPayCash, Sepa, Sightline, Skrill,
            Skrill1Tap, Venmo, Vippreferred,
        },
        cards::{
            AccordD, AcquirerData, Authentication, BrowserDetails,
            CardWithOptionalNetworkTokenOrApplePay, FundingTransaction, Level2Level3,
            ProcessingRails, Recipient, ThreeDs, TransactionIntent,
        },
        common::{
            BillingDetails, CurrencyCode, DeviceDetails, GatewayResponse, Mandate,
            MerchantDescriptor, Meta, PaymentFacilitator, PaymentType, Profile, ReturnLink,
            Splitpay, StoredCredential,
        },
        settlements::Settlement,
        travel::{AirlineTravelDetails, CarRentalDetails, CruiselineTravelDetails, LodgingDetails},
    },
    error::PaysafeError,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Received,
    Processing,
    Completed,
    Held,
    Failed,
    Cancelled,
    Pending,
}

/// Request to process a payment against a payment handle token.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    /// Settle the payment immediately instead of only authorizing it.
    pub settle_with_auth: Option<bool>,
    pub payment_handle_token: Option<String>,
    pub customer_ip: Option<String>,
    pub currency_code: Option<CurrencyCode>,
    pub pre_auth: Option<bool>,
    pub description: Option<String>,
    #[serde(rename = "level2level3")]
    pub level2_level3: Option<Level2Level3>,
    #[serde(rename = "accordD")]
    pub accord_d: Option<AccordD>,
    pub recipient: Option<Recipient>,
    pub splitpay: Option<Splitpay>,
    pub stored_credential_details: Option<StoredCredential>,
    pub airline_travel_details: Option<AirlineTravelDetails>,
    pub funding_transaction: Option<FundingTransaction>,
    pub cruiseline_travel_details: Option<CruiselineTravelDetails>,
    pub lodging_details: Option<LodgingDetails>,
    pub car_rental_details: Option<CarRentalDetails>,
    pub payment_facilitator: Option<PaymentFacilitator>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub acquirer_data: Option<AcquirerData>,
    pub keywords: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: Option<String>,
    pub merchant_ref_num: Option<String>,
    pub amount: Option<u64>,
    pub dup_check: Option<bool>,
    pub settle_with_auth: Option<bool>,
    pub payment_handle_token: Option<String>,
    pub customer_ip: Option<String>,
    pub currency_code: Option<CurrencyCode>,
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub three_ds: Option<ThreeDs>,
    pub authentication: Option<Authentication>,
    pub pre_auth: Option<bool>,
    pub payment_handle_token_from: Option<String>,
    pub transaction_intent: Option<TransactionIntent>,
    pub gateway_response: Option<GatewayResponse>,
    pub skrill: Option<Skrill>,
    pub neteller: Option<Neteller>,
    pub paysafecash: Option<Paysafecash>,
    pub paysafecard: Option<Paysafecard>,
    #[serde(rename = "payPal")]
    pub paypal: Option<Paypal>,
    pub return_links: Option<Vec<ReturnLink>>,
    pub venmo: Option<Venmo>,
    pub vippreferred: Option<Vippreferred>,
    pub mazooma: Option<Mazooma>,
    pub sightline: Option<Sightline>,
    pub pay_by_bank: Option<PayByBank>,
    #[serde(rename = "interacETransfer")]
    pub interac_etransfer: Option<Interac>,
    pub browser_details: Option<BrowserDetails>,
    pub device_details: Option<DeviceDetails>,
    pub rapid_transfer: Option<RapidTransfer>,
    #[serde(rename = "skrill1Tap")]
    pub skrill_1tap: Option<Skrill1Tap>,
    pub ach: Option<Ach>,
    pub eft: Option<Eft>,
    pub bacs: Option<Bacs>,
    pub mandates: Option<Vec<Mandate>>,
    pub sepa: Option<Sepa>,
    pub safety_pay_cash: Option<SafetyPayCash>,
    pub payment_expiry_in_minutes: Option<u32>,
    pub payment_details: Option<PaymentDetails>,
    pub payment_expiry_minutes: Option<u32>,
    pub available_to_settle: Option<u64>,
    pub child_account_num: Option<String>,
    pub txn_time: Option<String>,
    pub payment_type: Option<PaymentType>,
    pub status: Option<PaymentStatus>,
    pub risk_reason_code: Option<Vec<u32>>,
    /// Settlements created with the payment when `settle_with_auth` was set.
    pub settlements: Option<Vec<Settlement>>,
    pub error: Option<PaysafeError>,
    pub status_reason: Option<String>,
    pub gateway_reconciliation_id: Option<String>,
    pub updated_time: Option<String>,
    pub status_time: Option<String>,
    pub available_to_refund: Option<u64>,
    pub processing_rails: Option<ProcessingRails>,
    pub live_mode: Option<bool>,
    pub billing_details: Option<BillingDetails>,
    pub customer_profile: Option<Profile>,
    pub acquirer_data: Option<AcquirerData>,
    pub payment_facilitator: Option<PaymentFacilitator>,
    pub airline_travel_details: Option<AirlineTravelDetails>,
    pub lodging_details: Option<LodgingDetails>,
    pub car_rental_details: Option<CarRentalDetails>,
    pub cruiseline_travel_details: Option<CruiselineTravelDetails>,
    pub merchant_descriptor: Option<MerchantDescriptor>,
    pub keywords: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub additional_parameters: HashMap<String, serde_json::Value>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentList {
    pub payments: Option<Vec<Payment>>,
    pub meta: Option<Meta>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_api_spelling_for_enhanced_data() {
        let request = PaymentRequest {
            merchant_ref_num: Some("ref-1".into()),
            level2_level3: Some(Level2Level3 {
                exempt_local_tax: Some(true),
                ..Default::default()
            }),
            accord_d: Some(AccordD::default()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "merchantRefNum": "ref-1",
                "level2level3": {"exemptLocalTax": true},
                "accordD": {}
            })
        );
    }

    #[test]
    fn payment_with_settlements() {
        let payment: Payment = serde_json::from_value(json!({
            "id": "f1f2bb0d-2b0b-4d45-98a9-e6d4a3c1a2b0",
            "status": "COMPLETED",
            "paymentType": "CARD",
            "settleWithAuth": true,
            "settlements": [{"id": "f1f2bb0d-2b0b-4d45-98a9-e6d4a3c1a2b0", "status": "PENDING"}],
            "riskReasonCode": [1059, 4002]
        }))
        .unwrap();

        assert_eq!(payment.status, Some(PaymentStatus::Completed));
        assert_eq!(payment.settlements.unwrap().len(), 1);
        assert_eq!(payment.risk_reason_code, Some(vec![1059, 4002]));
    }
}
