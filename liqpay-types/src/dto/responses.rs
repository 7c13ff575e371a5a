//! Inbound payloads returned by the gateway.
//!
//! Every field defaults to its zero value when the key is absent or `null`,
//! and keys the model does not know are ignored. Because of that, an absent
//! number or string cannot be told apart from a real zero or empty value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Action, CancelInvoiceResult, Currency, NumericAmount, PayType, Status, epoch_millis_to_utc,
};
use super::nullable::or_default;

/// Payment state; shared by checkout, status and unsubscribe operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StatusResponse {
    /// Acquirer ID
    #[serde(deserialize_with = "or_default")]
    pub acq_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub action: Action,
    /// Agent commission in the payment currency
    #[serde(deserialize_with = "or_default")]
    pub agent_commission: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub amount: NumericAmount,
    /// Payer bonus in the payment currency (debit)
    #[serde(deserialize_with = "or_default")]
    pub amount_bonus: NumericAmount,
    /// Credit amount in `currency_credit`
    #[serde(deserialize_with = "or_default")]
    pub amount_credit: NumericAmount,
    /// Debit amount in `currency_debit`
    #[serde(deserialize_with = "or_default")]
    pub amount_debit: NumericAmount,
    #[serde(rename = "authcode_credit", deserialize_with = "or_default")]
    pub auth_code_credit: String,
    #[serde(rename = "authcode_debit", deserialize_with = "or_default")]
    pub auth_code_debit: String,
    /// Discount rate in percent
    #[serde(deserialize_with = "or_default")]
    pub bonus_procent: f64,
    /// bonusplus, discount_club, personal, promo
    #[serde(deserialize_with = "or_default")]
    pub bonus_type: String,
    #[serde(deserialize_with = "or_default")]
    pub card_token: String,
    /// Receiver commission in `currency_credit`
    #[serde(deserialize_with = "or_default")]
    pub commission_credit: NumericAmount,
    /// Sender commission in `currency_debit`
    #[serde(deserialize_with = "or_default")]
    pub commission_debit: NumericAmount,
    /// Epoch milliseconds
    #[serde(deserialize_with = "or_default")]
    pub create_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_credit: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_debit: Currency,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    /// Epoch milliseconds
    #[serde(deserialize_with = "or_default")]
    pub end_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub info: String,
    /// Sender's IP address
    #[serde(deserialize_with = "or_default")]
    pub ip: String,
    /// Whether the transaction passed 3-D Secure
    #[serde(deserialize_with = "or_default")]
    pub is_3ds: bool,
    #[serde(deserialize_with = "or_default")]
    pub liqpay_order_id: String,
    /// Installment indication
    #[serde(deserialize_with = "or_default")]
    pub moment_part: String,
    /// 5: with 3DS, 6: issuer lacks 3DS support, 7: without 3DS
    #[serde(deserialize_with = "or_default")]
    pub mpi_eci: String,
    #[serde(deserialize_with = "or_default")]
    pub order_id: String,
    #[serde(deserialize_with = "or_default")]
    pub payment_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub paytype: PayType,
    #[serde(deserialize_with = "or_default")]
    pub public_key: String,
    #[serde(deserialize_with = "or_default")]
    pub receiver_commission: NumericAmount,
    /// Issuer transaction reference for the credit leg
    #[serde(deserialize_with = "or_default")]
    pub rrn_credit: String,
    /// Issuer transaction reference for the debit leg
    #[serde(deserialize_with = "or_default")]
    pub rrn_debit: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_bonus: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_bank: String,
    /// ISO 3166-1 numeric code
    #[serde(deserialize_with = "or_default")]
    pub sender_card_country: i64,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_mask2: String,
    /// MC or Visa
    #[serde(deserialize_with = "or_default")]
    pub sender_card_type: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_commission: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub sender_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub status: Status,
}

impl StatusResponse {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.create_date)
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.end_date)
    }
}

/// Result of a refund.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct RefundResponse {
    #[serde(deserialize_with = "or_default")]
    pub action: Action,
    #[serde(deserialize_with = "or_default")]
    pub payment_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub status: Status,
}

/// Result of a subscribe or subscribe_update operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscriptionResponse {
    #[serde(deserialize_with = "or_default")]
    pub acq_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub action: Action,
    #[serde(deserialize_with = "or_default")]
    pub agent_commission: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub amount: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub amount_bonus: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub amount_credit: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub amount_debit: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub card_token: String,
    #[serde(deserialize_with = "or_default")]
    pub commission_credit: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub commission_debit: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub create_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_credit: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_debit: Currency,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub end_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub is_3ds: bool,
    #[serde(deserialize_with = "or_default")]
    pub liqpay_order_id: String,
    #[serde(deserialize_with = "or_default")]
    pub mpi_eci: String,
    #[serde(deserialize_with = "or_default")]
    pub order_id: String,
    #[serde(deserialize_with = "or_default")]
    pub payment_id: i64,
    #[serde(deserialize_with = "or_default")]
    pub paytype: PayType,
    #[serde(deserialize_with = "or_default")]
    pub public_key: String,
    #[serde(deserialize_with = "or_default")]
    pub receiver_commission: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub sender_bonus: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_bank: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_country: i64,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_mask2: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_card_type: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_commission: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub sender_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub status: Status,
    #[serde(deserialize_with = "or_default")]
    pub transaction_id: i64,
    /// API version
    #[serde(deserialize_with = "or_default")]
    pub version: i64,
}

impl SubscriptionResponse {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.create_date)
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.end_date)
    }
}

/// Result of invoice_send.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InvoiceResponse {
    #[serde(deserialize_with = "or_default")]
    pub action: Action,
    #[serde(deserialize_with = "or_default")]
    pub amount: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    /// Link to the invoice
    #[serde(deserialize_with = "or_default")]
    pub href: String,
    /// Payment id in the gateway
    #[serde(deserialize_with = "or_default")]
    pub id: i64,
    #[serde(deserialize_with = "or_default")]
    pub order_id: String,
    /// Channel the invoice was sent through
    #[serde(deserialize_with = "or_default")]
    pub receiver_type: String,
    /// Address within `receiver_type`
    #[serde(deserialize_with = "or_default")]
    pub receiver_value: String,
    /// error, failure, success, invoice_wait, token
    #[serde(deserialize_with = "or_default")]
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Result of invoice_cancel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CancelInvoiceResponse {
    #[serde(deserialize_with = "or_default")]
    pub invoice_id: i64,
    /// `ok` or `error`
    #[serde(deserialize_with = "or_default")]
    pub result: CancelInvoiceResult,
}

impl CancelInvoiceResponse {
    pub fn is_ok(&self) -> bool {
        self.result == CancelInvoiceResult::OK
    }
}
