use crate::apis::common::Mandate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AchPayMethod {
    Web,
    Tel,
    Ppd,
    Ccd,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankAccountType {
    Savings,
    Checking,
    Loan,
}

/// US bank account debited through the ACH network.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ach {
    pub account_holder_name: Option<String>,
    pub pay_method: Option<AchPayMethod>,
    pub account_type: Option<BankAccountType>,
    pub account_number: Option<String>,
    pub routing_number: Option<String>,
    pub last_digits: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AchBankAccount {
    pub id: Option<String>,
    pub bank_name: Option<String>,
    pub registration_id: Option<String>,
    pub routing_number: Option<String>,
    pub account_number: Option<String>,
    pub last_digits: Option<String>,
    pub payment_token: Option<String>,
    pub payment_handle_token: Option<String>,
}

/// Canadian bank account debited through Electronic Funds Transfer.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Eft {
    pub account_holder_name: Option<String>,
    pub account_number: Option<String>,
    pub transit_number: Option<String>,
    pub institution_id: Option<String>,
    pub last_digits: Option<String>,
}

/// UK bank account debited through BACS.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Bacs {
    pub nick_name: Option<String>,
    pub account_holder_name: Option<String>,
    pub account_number: Option<String>,
    pub sort_code: Option<String>,
    pub mandate: Option<Mandate>,
    pub last_digits: Option<String>,
}

/// European bank account debited through SEPA.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sepa {
    pub nick_name: Option<String>,
    pub account_holder_name: Option<String>,
    pub bic: Option<String>,
    pub iban: Option<String>,
    pub mandate: Option<Mandate>,
    pub last_digits: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayByBankAch {
    pub payment_handle_token: Option<String>,
    pub account_type: Option<BankAccountType>,
    pub routing_number: Option<String>,
    pub last_digits: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PayByBank {
    pub consumer_id: Option<String>,
    pub registration_id: Option<String>,
    pub ach: Option<PayByBankAch>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MazoomaAch {
    pub payment_handle_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Mazooma {
    pub consumer_id: Option<String>,
    pub ach: Option<MazoomaAch>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sightline {
    pub consumer_id: Option<String>,
    pub ssn: Option<String>,
    #[serde(rename = "last4ssn")]
    pub last4_ssn: Option<String>,
    pub last_digits: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Vippreferred {
    pub consumer_id: Option<String>,
    pub registration_id: Option<String>,
    pub payment_handle_token: Option<String>,
    pub ach: Option<AchBankAccount>,
    pub ach_bank_accounts: Option<Vec<AchBankAccount>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankNameCode {
    Acertemos,
    AccionesYValores,
    Acuenta,
    AgenteNiubiz,
    #[serde(rename = "APUESTAS_CUCUTA_75")]
    ApuestasCucuta75,
    ApuestasUnidas,
    BancoDeCredito,
    BancoEstado,
    BancoEstadoExpress,
    BancoNacionalDeCostaRica,
    BancoRipley,
    BbvaContinental,
    Bradesco,
    CajaArequipa,
    CajaHuancayoPeru,
    CajaTacnaPeru,
    CajaTrujilloPeru,
    CajaVecina,
    Credibanco,
    Dimonex,
    Efecty,
    ExpressDeLider,
    FullCarga,
    Gana,
    GanaGana,
    Interbank,
    Jer,
    Kasnet,
    LaPerla,
    Lider,
    Lotericas,
    MovilredColombia,
    PagaTodoParaTodo,
    PuntoDePago,
    PuntoRed,
    Redeban,
    Scotiabank,
    Suchance,
    Sured,
    Tambo,
    WalmartChile,
    WesternUnion,
}

/// Country restriction of cash-based payment methods, expressed by currency.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum CountryCode {
    Brl,
    Clp,
    Cop,
    Crc,
    Pen,
    Usd,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SafetyPayCash {
    pub country_code: Option<CountryCode>,
    pub bank_name_codes: Option<Vec<BankNameCode>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub country_code: Option<String>,
    pub bank_name_codes: Option<Vec<BankNameCode>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum InteracTransferType {
    #[serde(rename = "ALIAS_REGULAR")]
    Regular,
    #[serde(rename = "ALIAS_AUTODEPOSIT")]
    Autodeposit,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteracFraudStatus {
    ConfirmFraud,
    ConfirmLegitimate,
    Scam,
    PresumeLegitimate,
    Suspicious,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteracFraudType {
    AccountTakeover,
    BadDeposit,
    FirstPartyFraud,
    InterceptedPayment,
    MerchantDispute,
    FamilyFriendFraud,
    BusinessEmailCompromise,
    VendorEmailCompromise,
    Malware,
    ApplicationFraud,
    FraudBusiness,
    Other,
}

/// Interac e-Transfer details of a payment or standalone credit.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Interac {
    pub consumer_id: Option<String>,
    pub r#type: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub transfer_type: Option<InteracTransferType>,
    pub max_amount: Option<u64>,
    pub fraud_status: Option<InteracFraudStatus>,
    pub fraud_type: Option<InteracFraudType>,
    pub payment_reference: Option<String>,
    pub method: Option<String>,
    pub payment_ref_expiry_minutes: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SenderAddress {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip: Option<String>,
}

/// Originator of a credit, required by some networks for funds transfers.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub account_number: Option<String>,
    pub address: Option<SenderAddress>,
}
