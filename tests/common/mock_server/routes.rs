use crate::common::mock_server::MockServerStorage;
use chrono::Utc;
use paysafe_payments::apis::{
    cards::{Card, CardType, CardWithOptionalNetworkTokenOrApplePay, UpdateCustomerRequestCard},
    common::{Meta, TransactionRequestStatus},
    customer_payment_handles::{CustomerPaymentHandle, CustomerPaymentHandleRequest},
    customers::{Customer, CustomerRequest, CustomerStatus},
    payment_handles::{
        Action, ExecutionMode, PaymentHandle, PaymentHandleRequest, PaymentHandleStatus,
        PaymentHandleUsage,
    },
    payments::{Payment, PaymentList, PaymentRequest, PaymentStatus},
    refunds::{Refund, RefundRequest},
    settlements::{Settlement, SettlementRequest},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use wiremock::{Request, Respond, ResponseTemplate};

fn entity_not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "error": {
            "code": "5269",
            "message": "Entity not found",
            "details": ["The ID(s) specified in the URL do not correspond to the values in the system."]
        }
    }))
}

fn invalid_field(details: &str) -> ResponseTemplate {
    ResponseTemplate::new(400).set_body_json(json!({
        "error": {
            "code": "5068",
            "message": "Field error(s)",
            "details": [details]
        }
    }))
}

fn parse_body<T: DeserializeOwned>(request: &Request) -> Result<T, ResponseTemplate> {
    serde_json::from_slice(&request.body).map_err(|e| invalid_field(&e.to_string()))
}

/// Path segment at the given position, after `/paymenthub/v1`.
fn path_segment(request: &Request, index: usize) -> String {
    request
        .url
        .path_segments()
        .and_then(|mut segments| segments.nth(index + 2))
        .unwrap_or_default()
        .to_string()
}

fn query_param(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

fn mask_card(
    card_num: Option<&str>,
    card: CardWithOptionalNetworkTokenOrApplePay,
) -> CardWithOptionalNetworkTokenOrApplePay {
    let card_num = card_num.unwrap_or_default();

    CardWithOptionalNetworkTokenOrApplePay {
        last_digits: card_num.get(card_num.len().saturating_sub(4)..).map(str::to_string),
        card_bin: card_num.get(..6).map(str::to_string),
        card_type: Some(CardType::Vi),
        ..card
    }
}

fn masked_card(card: &Card) -> CardWithOptionalNetworkTokenOrApplePay {
    mask_card(
        card.card_num.as_deref(),
        CardWithOptionalNetworkTokenOrApplePay {
            card_expiry: card.card_expiry.clone(),
            holder_name: card.holder_name.clone(),
            ..Default::default()
        },
    )
}

fn masked_customer_card(card: &UpdateCustomerRequestCard) -> CardWithOptionalNetworkTokenOrApplePay {
    mask_card(
        card.card_num.as_deref(),
        CardWithOptionalNetworkTokenOrApplePay {
            card_expiry: card.card_expiry.clone(),
            holder_name: card.holder_name.clone(),
            ..Default::default()
        },
    )
}

/// POST /v1/paymenthandles
pub(super) struct CreatePaymentHandle(pub(super) MockServerStorage);

impl Respond for CreatePaymentHandle {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let req: PaymentHandleRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let id = Uuid::new_v4().to_string();
        let handle = PaymentHandle {
            id: Some(id.clone()),
            payment_handle_token: Some(format!("SC{}", Uuid::new_v4().simple())),
            merchant_ref_num: req.merchant_ref_num,
            transaction_type: req.transaction_type,
            payment_type: req.payment_type,
            amount: req.amount,
            currency_code: req.currency_code,
            card: req.card.as_ref().map(masked_card),
            status: Some(PaymentHandleStatus::Payable),
            usage: Some(PaymentHandleUsage::SingleUse),
            action: Some(Action::None),
            execution_mode: Some(ExecutionMode::Synchronous),
            time_to_live_seconds: Some(899),
            live_mode: Some(false),
            txn_time: Some(now()),
            ..Default::default()
        };

        self.0
            .write()
            .unwrap()
            .payment_handles
            .insert(id, handle.clone());

        ResponseTemplate::new(201).set_body_json(handle)
    }
}

/// GET /v1/paymenthandles/{id}
pub(super) struct GetPaymentHandle(pub(super) MockServerStorage);

impl Respond for GetPaymentHandle {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = path_segment(request, 1);

        self.0
            .read()
            .unwrap()
            .payment_handles
            .get(&id)
            .map_or_else(entity_not_found, |handle| {
                ResponseTemplate::new(200).set_body_json(handle)
            })
    }
}

/// POST /v1/payments
pub(super) struct ProcessPayment(pub(super) MockServerStorage);

impl Respond for ProcessPayment {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let req: PaymentRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let mut storage = self.0.write().unwrap();

        // A single-use handle pays exactly one payment
        let handle = match storage.payment_handles.values_mut().find(|h| {
            h.payment_handle_token == req.payment_handle_token
                && h.status == Some(PaymentHandleStatus::Payable)
        }) {
            Some(handle) => handle,
            None => return invalid_field("paymentHandleToken: unknown or already used"),
        };
        handle.status = Some(PaymentHandleStatus::Completed);
        let payment_type = handle.payment_type;
        let card = handle.card.clone();

        let amount = req.amount.unwrap_or_default();
        let settle_with_auth = req.settle_with_auth.unwrap_or(false);
        let id = Uuid::new_v4().to_string();

        let settlements = settle_with_auth.then(|| {
            let settlement = Settlement {
                id: Some(id.clone()),
                merchant_ref_num: req.merchant_ref_num.clone(),
                amount: Some(amount),
                available_to_refund: Some(amount),
                txn_time: Some(now()),
                status: Some(TransactionRequestStatus::Pending),
                ..Default::default()
            };
            storage.settlements.insert(id.clone(), settlement.clone());
            vec![settlement]
        });

        let payment = Payment {
            id: Some(id.clone()),
            merchant_ref_num: req.merchant_ref_num,
            amount: Some(amount),
            currency_code: req.currency_code,
            payment_handle_token: req.payment_handle_token,
            settle_with_auth: Some(settle_with_auth),
            payment_type,
            card,
            available_to_settle: Some(if settle_with_auth { 0 } else { amount }),
            txn_time: Some(now()),
            status: Some(PaymentStatus::Completed),
            settlements,
            live_mode: Some(false),
            ..Default::default()
        };
        storage.payments.insert(id, payment.clone());

        ResponseTemplate::new(201).set_body_json(payment)
    }
}

/// GET /v1/payments/{id}
pub(super) struct GetPayment(pub(super) MockServerStorage);

impl Respond for GetPayment {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = path_segment(request, 1);

        self.0
            .read()
            .unwrap()
            .payments
            .get(&id)
            .map_or_else(entity_not_found, |payment| {
                ResponseTemplate::new(200).set_body_json(payment)
            })
    }
}

/// GET /v1/payments?merchantRefNum=...
pub(super) struct ListPayments(pub(super) MockServerStorage);

impl Respond for ListPayments {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let merchant_ref_num = query_param(request, "merchantRefNum");
        let limit = query_param(request, "limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(10usize);

        let payments: Vec<Payment> = self
            .0
            .read()
            .unwrap()
            .payments
            .values()
            .filter(|p| merchant_ref_num.is_none() || p.merchant_ref_num == merchant_ref_num)
            .take(limit)
            .cloned()
            .collect();

        ResponseTemplate::new(200).set_body_json(PaymentList {
            meta: Some(Meta {
                number_of_records: Some(payments.len() as u32),
                limit: Some(limit as u32),
                page: Some(1),
            }),
            payments: Some(payments),
        })
    }
}

/// POST /v1/payments/{id}/settlements
pub(super) struct ProcessSettlement(pub(super) MockServerStorage);

impl Respond for ProcessSettlement {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let payment_id = path_segment(request, 1);
        let req: SettlementRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let mut storage = self.0.write().unwrap();
        let payment = match storage.payments.get_mut(&payment_id) {
            Some(payment) => payment,
            None => return entity_not_found(),
        };

        let available = payment.available_to_settle.unwrap_or_default();
        let amount = req.amount.unwrap_or(available);
        if amount == 0 || amount > available {
            return invalid_field("amount: exceeds the amount available to settle");
        }
        payment.available_to_settle = Some(available - amount);

        let settlement = Settlement {
            id: Some(Uuid::new_v4().to_string()),
            merchant_ref_num: req.merchant_ref_num,
            amount: Some(amount),
            available_to_refund: Some(amount),
            txn_time: Some(now()),
            status: Some(TransactionRequestStatus::Pending),
            ..Default::default()
        };
        payment
            .settlements
            .get_or_insert_with(Vec::new)
            .push(settlement.clone());
        storage
            .settlements
            .insert(settlement.id.clone().unwrap_or_default(), settlement.clone());

        ResponseTemplate::new(201).set_body_json(settlement)
    }
}

/// POST /v1/settlements/{id}/refunds
pub(super) struct ProcessRefund(pub(super) MockServerStorage);

impl Respond for ProcessRefund {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let settlement_id = path_segment(request, 1);
        let req: RefundRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let mut storage = self.0.write().unwrap();
        let settlement = match storage.settlements.get_mut(&settlement_id) {
            Some(settlement) => settlement,
            None => return entity_not_found(),
        };

        let available = settlement.available_to_refund.unwrap_or_default();
        let amount = req.amount.unwrap_or(available);
        if amount == 0 || amount > available {
            return invalid_field("amount: exceeds the amount available to refund");
        }
        settlement.available_to_refund = Some(available - amount);

        let refund = Refund {
            id: Some(Uuid::new_v4().to_string()),
            merchant_ref_num: req.merchant_ref_num,
            amount: Some(amount),
            txn_time: Some(now()),
            status: Some(TransactionRequestStatus::Pending),
            live_mode: Some(false),
            ..Default::default()
        };
        storage
            .refunds
            .insert(refund.id.clone().unwrap_or_default(), refund.clone());

        ResponseTemplate::new(201).set_body_json(refund)
    }
}

/// POST /v1/customers
pub(super) struct CreateCustomer(pub(super) MockServerStorage);

impl Respond for CreateCustomer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let req: CustomerRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let id = Uuid::new_v4().to_string();
        let customer = Customer {
            id: Some(id.clone()),
            merchant_customer_id: req.merchant_customer_id,
            locale: req.locale,
            first_name: req.first_name,
            middle_name: req.middle_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            email: req.email,
            phone: req.phone,
            ip: req.ip,
            nationality: req.nationality,
            status: Some(CustomerStatus::Active),
            payment_token: Some(format!("C{}", Uuid::new_v4().simple())),
            ..Default::default()
        };

        self.0
            .write()
            .unwrap()
            .customers
            .insert(id, customer.clone());

        ResponseTemplate::new(201).set_body_json(customer)
    }
}

/// GET /v1/customers/{id}?fields=...
pub(super) struct GetCustomer(pub(super) MockServerStorage);

impl Respond for GetCustomer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = path_segment(request, 1);
        let fields = query_param(request, "fields").unwrap_or_default();
        let requested = |field: &str| fields.split(',').any(|f| f == field);

        let storage = self.0.read().unwrap();
        let customer = match storage.customers.get(&id) {
            Some(customer) => customer,
            None => return entity_not_found(),
        };

        // Sub-resources are only embedded when requested
        let customer = Customer {
            addresses: customer.addresses.clone().filter(|_| requested("addresses")),
            payment_handles: customer
                .payment_handles
                .clone()
                .filter(|_| requested("paymenthandles")),
            ..customer.clone()
        };

        ResponseTemplate::new(200).set_body_json(customer)
    }
}

/// DELETE /v1/customers/{id}
pub(super) struct DeleteCustomer(pub(super) MockServerStorage);

impl Respond for DeleteCustomer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = path_segment(request, 1);

        match self.0.write().unwrap().customers.remove(&id) {
            Some(_) => ResponseTemplate::new(200),
            None => entity_not_found(),
        }
    }
}

/// POST /v1/customers/{id}/paymenthandles
pub(super) struct CreateCustomerPaymentHandle(pub(super) MockServerStorage);

impl Respond for CreateCustomerPaymentHandle {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let customer_id = path_segment(request, 1);
        let req: CustomerPaymentHandleRequest = match parse_body(request) {
            Ok(req) => req,
            Err(res) => return res,
        };

        let mut storage = self.0.write().unwrap();
        let customer = match storage.customers.get_mut(&customer_id) {
            Some(customer) => customer,
            None => return entity_not_found(),
        };

        let handle = CustomerPaymentHandle {
            id: Some(Uuid::new_v4().to_string()),
            customer_id: Some(customer_id),
            merchant_ref_num: req.merchant_ref_num,
            payment_type: req.payment_type,
            currency_code: req.currency_code,
            amount: req.amount,
            card: req.card.as_ref().map(masked_customer_card),
            payment_handle_token: Some(format!("MU{}", Uuid::new_v4().simple())),
            status: Some(PaymentHandleStatus::Payable),
            usage: Some(PaymentHandleUsage::MultiUse),
            action: Some(Action::None),
            ..Default::default()
        };
        customer
            .payment_handles
            .get_or_insert_with(Vec::new)
            .push(handle.clone());

        ResponseTemplate::new(201).set_body_json(handle)
    }
}
