//! Outbound payloads, one per operation kind.
//!
//! Mandatory fields are plain values and are always serialized, even when left
//! at their zero value. Optional fields are `Option`s and are dropped from the
//! payload when `None`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Action, Currency, DecimalAmount, InvoiceItem, Language, NumericAmount, PayType, RroInfo,
    SubscribePeriod,
};

// ─────────────────────────────────────────────────────────────────────────────
// Checkout
// ─────────────────────────────────────────────────────────────────────────────

/// Payment through the hosted checkout page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CheckoutRequest {
    /// Usually one of pay, hold, subscribe, paydonate, auth, regular, paysplit
    #[schema(example = "pay")]
    pub action: Action,
    pub amount: NumericAmount,
    #[schema(example = "UAH")]
    pub currency: Currency,
    /// Unique purchase ID in the shop, at most 255 characters
    #[schema(example = "ORDER-1")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fiscalization data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rro_info: Option<RroInfo>,
    /// UTC deadline in `YYYY-MM-DD HH:MM:SS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2016-04-24 00:00:00")]
    pub expired_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Methods shown on the checkout page; shop settings apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_types: Option<Vec<PayType>>,
    /// Where the buyer lands after the purchase, at most 510 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    /// Server-to-server notification URL, at most 510 characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    /// `Y` requests a dynamic verification code (action = auth)
    #[serde(
        rename = "verifycode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub verify_code: Option<String>,
}

impl CheckoutRequest {
    pub fn new(
        action: Action,
        amount: impl Into<NumericAmount>,
        currency: Currency,
        order_id: impl Into<String>,
    ) -> Self {
        Self {
            action,
            amount: amount.into(),
            currency,
            order_id: order_id.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rro_info(mut self, rro_info: RroInfo) -> Self {
        self.rro_info = Some(rro_info);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_pay_types(mut self, pay_types: Vec<PayType>) -> Self {
        self.pay_types = Some(pay_types);
        self
    }

    pub fn with_server_url(mut self, server_url: impl Into<String>) -> Self {
        self.server_url = Some(server_url.into());
        self
    }

    pub fn with_result_url(mut self, result_url: impl Into<String>) -> Self {
        self.result_url = Some(result_url.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Status / Refund
// ─────────────────────────────────────────────────────────────────────────────

/// Payment status lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusRequest {
    #[schema(example = "status")]
    pub action: Action,
    pub order_id: String,
}

impl StatusRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            action: Action::STATUS,
            order_id: order_id.into(),
        }
    }
}

/// Full or partial refund.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RefundRequest {
    #[schema(example = "refund")]
    pub action: Action,
    /// Refund amount as a decimal string, e.g. `5` or `7.34`
    pub amount: DecimalAmount,
    pub order_id: String,
}

impl RefundRequest {
    pub fn new(amount: impl Into<DecimalAmount>, order_id: impl Into<String>) -> Self {
        Self {
            action: Action::REFUND,
            amount: amount.into(),
            order_id: order_id.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriptions
// ─────────────────────────────────────────────────────────────────────────────

/// Card payment that creates a regular subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionRequest {
    #[schema(example = "subscribe")]
    pub action: Action,
    pub amount: NumericAmount,
    /// Payer's card number
    pub card: String,
    pub card_cvv: String,
    /// Two digits, e.g. `08`
    pub card_exp_month: String,
    /// Two digits, e.g. `19`
    pub card_exp_year: String,
    pub currency: Currency,
    pub description: String,
    /// Client IP
    pub ip: String,
    pub order_id: String,
    /// Payer's mobile phone
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Preliminary preparation of the payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepare: Option<String>,
    /// Generate a card token for the payer
    #[serde(
        rename = "recurringbytoken",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recurring_by_token: Option<String>,
    /// Token recurring payment flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    /// Regular payment flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribe: Option<String>,
    /// First payment, `YYYY-MM-DD HH:MM:SS` in UTC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribe_date_start: Option<String>,
    #[serde(
        rename = "subscribe_periodicity",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subscribe_period: Option<SubscribePeriod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_postal_code: Option<String>,
    /// Unique customer ID in the shop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    /// Detail Addenda
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dae: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

/// Changes the amount or description of an existing subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EditSubscriptionRequest {
    #[schema(example = "subscribe_update")]
    pub action: Action,
    pub amount: NumericAmount,
    pub currency: Currency,
    pub description: String,
    pub order_id: String,
}

/// Cancels a subscription.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UnsubscribeRequest {
    #[schema(example = "unsubscribe")]
    pub action: Action,
    pub order_id: String,
}

impl UnsubscribeRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            action: Action::UNSUBSCRIBE,
            order_id: order_id.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Invoices
// ─────────────────────────────────────────────────────────────────────────────

/// Sends an invoice by e-mail or to the Privat24 app.
///
/// At least one of `email` and `phone` has to be filled in for the gateway to
/// accept the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InvoiceRequest {
    #[schema(example = "invoice_send")]
    pub action: Action,
    pub amount: NumericAmount,
    pub currency: Currency,
    pub description: String,
    pub email: String,
    pub order_id: String,
    pub phone: String,
    /// Transaction type paid by the invoice: pay, hold, subscribe, paydonate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_payment: Option<Action>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expired_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goods: Option<Vec<InvoiceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
}

/// Cancels an unpaid invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CancelInvoiceRequest {
    #[schema(example = "invoice_cancel")]
    pub action: Action,
    pub order_id: String,
}

impl CancelInvoiceRequest {
    pub fn new(order_id: impl Into<String>) -> Self {
        Self {
            action: Action::INVOICE_CANCEL,
            order_id: order_id.into(),
        }
    }
}
