use crate::apis::{
    cards::{Authentication, ThreeDs},
    common::GatewayResponse,
    wallets::ApplePayTokenDetails,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardType {
    /// American Express.
    Am,
    /// Discover.
    Di,
    /// JCB.
    Jc,
    /// Mastercard.
    Mc,
    /// Maestro.
    Md,
    /// Solo.
    So,
    /// Visa.
    Vi,
    /// Visa Debit.
    Vd,
    /// Visa Electron.
    Ve,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Active,
    Suspended,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardCategory {
    Credit,
    Debit,
    Prepaid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    NetworkToken,
    ApplePay,
    GooglePay,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenStatus {
    Active,
    Expired,
    Disabled,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct CardExpiry {
    pub month: Option<u32>,
    pub year: Option<u32>,
}

/// Network token provided by the merchant in place of the card number.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ExternalNetworkTokenRequest {
    pub token: Option<String>,
    pub cryptogram: Option<String>,
    pub expiry: Option<CardExpiry>,
}

/// Card details sent when creating a payment handle.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_num: Option<String>,
    pub card_id: Option<String>,
    pub card_expiry: Option<CardExpiry>,
    pub cvv: Option<String>,
    pub holder_name: Option<String>,
    pub card_type: Option<CardType>,
    pub last_digits: Option<String>,
    pub card_bin: Option<String>,
    pub issuing_country: Option<String>,
    pub status: Option<CardStatus>,
    pub apple_pay: Option<ApplePayTokenDetails>,
    pub token_type: Option<String>,
    pub network_token: Option<ExternalNetworkTokenRequest>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTokenCardArt {
    pub card_art_url: Option<String>,
    pub is_cobranded: Option<bool>,
}

/// Network token provisioned by Paysafe for a stored card.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkToken {
    pub bin: Option<String>,
    pub last_digits: Option<String>,
    pub status: Option<String>,
    pub expiry: Option<CardExpiry>,
    pub card_art: Option<NetworkTokenCardArt>,
}

/// Card details returned by the API.
///
/// The card number is never returned, only its BIN and last digits.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardWithOptionalNetworkTokenOrApplePay {
    pub last_digits: Option<String>,
    pub card_id: Option<String>,
    pub card_expiry: Option<CardExpiry>,
    pub card_bin: Option<String>,
    pub card_type: Option<CardType>,
    pub holder_name: Option<String>,
    pub status: Option<CardStatus>,
    pub card_category: Option<CardCategory>,
    pub apple_pay: Option<ApplePayTokenDetails>,
    pub token_type: Option<TokenType>,
    pub network_token: Option<NetworkToken>,
    pub issuing_country: Option<String>,
}

/// Card details sent when storing a card on a customer profile.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequestCard {
    pub card_num: Option<String>,
    pub card_category: Option<String>,
    pub card_id: Option<String>,
    pub card_expiry: Option<CardExpiry>,
    pub cvv: Option<String>,
    pub holder_name: Option<String>,
    pub card_type: Option<CardType>,
    pub last_digits: Option<String>,
    pub card_bin: Option<String>,
    pub issuing_country: Option<String>,
    pub status: Option<CardStatus>,
}

/// Billing address of a card stored on a customer profile.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardBillingDetailsRequest {
    pub nick_name: Option<String>,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// Result of a 3-D Secure authentication performed outside of Paysafe.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CardAuthentication {
    pub eci: Option<String>,
    pub cavv: Option<String>,
    pub three_d_result: Option<String>,
    pub directory_server_transaction_id: Option<String>,
    pub three_d_secure_version: Option<String>,
    pub exemption_indicator: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionIntent {
    GoodsOrServicePurchase,
    CheckAcceptance,
    AccountFunding,
    QuasiCashTransaction,
    PrepaidActivation,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingRails {
    Pinless,
    CardSchemeRouted,
}

/// Card payload with its 3-D Secure data, as returned for network token payments.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkTokenCardObject {
    pub card: Option<CardWithOptionalNetworkTokenOrApplePay>,
    pub three_ds: Option<ThreeDs>,
    pub authentication: Option<Authentication>,
    pub payment_handle_token_from: Option<String>,
    pub transaction_intent: Option<TransactionIntent>,
    pub gateway_response: Option<GatewayResponse>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItems {
    pub description: Option<String>,
    pub product_code: Option<String>,
    pub quantity: Option<u32>,
    pub unit_amount: Option<u64>,
    pub tax_rate: Option<u32>,
    pub tax_amount: Option<u64>,
    pub total_amount: Option<u64>,
}

/// Level 2 and level 3 processing data of commercial cards.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Level2Level3 {
    pub exempt_local_tax: Option<bool>,
    pub local_tax_amount: Option<u64>,
    pub national_tax_amount: Option<u64>,
    pub freight_amount: Option<u64>,
    pub duty_amount: Option<u64>,
    pub destination_zip: Option<String>,
    pub destination_country: Option<String>,
    pub ship_from_zip: Option<String>,
    pub line_items: Option<LineItems>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinancingType {
    DeferredPayment,
    EqualPayment,
}

/// Installment financing (Accord D) of a card payment.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccordD {
    pub financing_type: Option<FinancingType>,
    pub plan: Option<String>,
    pub grace_period: Option<u32>,
    pub term: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcquirerCode {
    Van,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct DiscretionaryData {
    pub field1: Option<String>,
    pub field2: Option<String>,
    pub field3: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AcquirerData {
    pub code: Option<AcquirerCode>,
    pub discretionary_data: Option<DiscretionaryData>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FundingTransactionType {
    SvdwFundsTransfer,
    SdwWalletTransfer,
    AccountToAccount,
    PersonToPerson,
    NotApplied,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FundingTransaction {
    pub r#type: Option<FundingTransactionType>,
    pub processor_applied_type: Option<FundingTransactionType>,
}

/// Recipient of a payment made by a financial institution on behalf of a customer.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub date_of_birth: Option<crate::apis::common::DateOfBirth>,
    pub zip: Option<String>,
    pub last_name: Option<String>,
    pub account_number: Option<String>,
}
