//! 3-D Secure 2 data, passed through to the card networks as-is.

use crate::{apis::common::CurrencyCode, error::PaysafeError};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::TransactionIntent;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationStatus {
    Completed,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ThreeDEnrollment {
    #[serde(rename = "Y")]
    Enrolled,
    #[serde(rename = "N")]
    NotEnrolled,
    #[serde(rename = "U")]
    Unavailable,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ThreeDResult {
    #[serde(rename = "Y")]
    Authenticated,
    #[serde(rename = "A")]
    Attempted,
    #[serde(rename = "N")]
    NotAuthenticated,
    #[serde(rename = "U")]
    Unavailable,
    #[serde(rename = "E")]
    Error,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SignatureStatus {
    #[serde(rename = "Y")]
    Valid,
    #[serde(rename = "N")]
    Invalid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExemptionIndicator {
    LowValueExemption,
    TraExemption,
}

/// Outcome of the 3-D Secure authentication of a card.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    pub id: Option<String>,
    pub eci: Option<u32>,
    pub cavv: Option<String>,
    pub xid: Option<String>,
    pub status: Option<AuthenticationStatus>,
    pub merchant_ref_num: Option<String>,
    pub three_d_enrollment: Option<ThreeDEnrollment>,
    pub directory_server_transaction_id: Option<String>,
    pub three_d_secure_version: Option<String>,
    pub three_d_result: Option<ThreeDResult>,
    pub signature_status: Option<SignatureStatus>,
    pub exemption_indicator: Option<ExemptionIndicator>,
    pub error: Option<PaysafeError>,
}

/// Bit depth of the color palette of the customer's screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ColorDepthBits {
    #[serde(rename = "1")]
    Bits1,
    #[serde(rename = "4")]
    Bits4,
    #[serde(rename = "5")]
    Bits5,
    #[serde(rename = "15")]
    Bits15,
    #[serde(rename = "16")]
    Bits16,
    #[serde(rename = "24")]
    Bits24,
    #[serde(rename = "32")]
    Bits32,
    #[serde(rename = "48")]
    Bits48,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrowserDetails {
    pub accept_header: Option<String>,
    pub color_depth_bits: Option<ColorDepthBits>,
    pub customer_ip: Option<String>,
    pub java_enabled: Option<bool>,
    pub javascript_enabled: Option<bool>,
    pub language: Option<String>,
    pub screen_height: Option<u32>,
    pub screen_width: Option<u32>,
    pub timezone_offset: Option<i32>,
    pub user_agent: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestorChallengePreference {
    NoPreference,
    NoChallengeRequested,
    ChallengeRequested,
    ChallengeMandated,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationPurpose {
    PaymentTransaction,
    RecurringTransaction,
    InstalmentTransaction,
    AddCard,
    MaintainCard,
    EmvTokenCardholderVerification,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BillingCycle {
    /// Date of the last payment, `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Minimum number of days between payments.
    pub frequency: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreOrderPurchaseIndicator {
    MerchandiseAvailable,
    FutureAvailability,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReorderItemsIndicator {
    FirstTimeOrder,
    Reorder,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingIndicator {
    ShipToBillingAddress,
    ShipToVerifiedAddress,
    ShipToDifferentAddress,
    ShipToStore,
    DigitalGoods,
    TravelAndEventTickets,
    Other,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetails {
    pub pre_order_item_availability_date: Option<String>,
    pub pre_order_purchase_indicator: Option<PreOrderPurchaseIndicator>,
    pub reorder_items_indicator: Option<ReorderItemsIndicator>,
    pub shipping_indicator: Option<ShippingIndicator>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchasedGiftCardDetails {
    pub amount: Option<u64>,
    pub count: Option<u32>,
    pub currency: Option<CurrencyCode>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountChangedRange {
    DuringTransaction,
    LessThanThirtyDays,
    ThirtyToSixtyDays,
    MoreThanSixtyDays,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountCreatedRange {
    NoAccount,
    DuringTransaction,
    LessThanThirtyDays,
    ThirtyToSixtyDays,
    MoreThanSixtyDays,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PasswordChangedRange {
    NoChange,
    DuringTransaction,
    LessThanThirtyDays,
    ThirtyToSixtyDays,
    MoreThanSixtyDays,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InitialUsageRange {
    CurrentTransaction,
    LessThanThirtyDays,
    ThirtyToSixtyDays,
    MoreThanSixtyDays,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorThreeDsAuthenticationMethod {
    FrictionlessAuthentication,
    AcsChallenge,
    AvsVerified,
    OtherIssuerMethod,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationMethod {
    NoLogin,
    InternalCredentials,
    FederatedId,
    IssuerCredentials,
    /// The API spells this value `THIRD_PARY_AUTHENTICATION`.
    #[serde(rename = "THIRD_PARY_AUTHENTICATION")]
    ThirdPartyAuthentication,
    FidoAuthenticator,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAccountDetails {
    pub created_range: Option<AccountCreatedRange>,
    pub created_date: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PriorThreeDsAuthentication {
    pub id: Option<String>,
    pub data: Option<String>,
    pub method: Option<PriorThreeDsAuthenticationMethod>,
    pub time: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetailsUsage {
    pub card_holder_name_match: Option<bool>,
    pub initial_usage_date: Option<String>,
    pub initial_usage_range: Option<InitialUsageRange>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserLogin {
    pub authentication_method: Option<AuthenticationMethod>,
    pub data: Option<String>,
    pub time: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicDelivery {
    pub email: Option<String>,
    pub is_electronic_delivery: Option<bool>,
}

/// Travel details used for the 3-D Secure risk assessment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TravelDetails {
    pub is_air_travel: Option<bool>,
    pub airline_carrier: Option<String>,
    /// `YYYY-MM-DD`.
    pub departure_date: Option<String>,
    pub destination: Option<String>,
    pub origin: Option<String>,
    pub passenger_first_name: Option<String>,
    pub passenger_last_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountDetails {
    pub add_card_attempts_for_last_day: Option<u32>,
    pub changed_date: Option<String>,
    pub changed_range: Option<AccountChangedRange>,
    pub created_date: Option<String>,
    pub created_range: Option<AccountCreatedRange>,
    pub password_changed_date: Option<String>,
    pub password_changed_range: Option<PasswordChangedRange>,
    pub suspicious_account_activity: Option<bool>,
    pub total_purchases_six_month_count: Option<u32>,
    pub transaction_count_for_previous_day: Option<u32>,
    pub transaction_count_for_previous_year: Option<u32>,
    pub shipping_details_usage: Option<ShippingDetailsUsage>,
    pub user_login: Option<UserLogin>,
    pub payment_account_details: Option<PaymentAccountDetails>,
    #[serde(rename = "priorThreeDSAuthentication")]
    pub prior_three_ds_authentication: Option<PriorThreeDsAuthentication>,
    pub travel_details: Option<TravelDetails>,
}

/// 3-D Secure 2 request data of a card payment handle.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ThreeDs {
    pub id: Option<String>,
    pub device_fingerprinting_id: Option<String>,
    pub merchant_url: Option<String>,
    pub device_channel: Option<String>,
    pub requestor_challenge_preference: Option<RequestorChallengePreference>,
    pub message_category: Option<String>,
    pub transaction_intent: Option<TransactionIntent>,
    pub authentication_purpose: Option<AuthenticationPurpose>,
    pub billing_cycle: Option<BillingCycle>,
    pub order_item_details: Option<OrderItemDetails>,
    pub purchased_gift_card_details: Option<PurchasedGiftCardDetails>,
    pub user_account_details: Option<UserAccountDetails>,
    #[serde(rename = "priorThreeDSAuthentication")]
    pub prior_three_ds_authentication: Option<PriorThreeDsAuthentication>,
    pub shipping_details_usage: Option<ShippingDetailsUsage>,
    pub suspicious_account_activity: Option<bool>,
    pub total_purchases_six_month_count: Option<u32>,
    pub transaction_count_for_previous_day: Option<u32>,
    pub transaction_count_for_previous_year: Option<u32>,
    pub travel_details: Option<TravelDetails>,
    pub user_login: Option<UserLogin>,
    pub browser_details: Option<BrowserDetails>,
    pub txn_time: Option<String>,
    pub max_authorizations_for_instalment_payment: Option<u32>,
    pub electronic_delivery: Option<ElectronicDelivery>,
    pub initial_purchase_time: Option<String>,
}
