//! Server-to-server notification sent to the merchant's `server_url`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Action, Currency, NumericAmount, PayType, Status, epoch_millis_to_utc};
use super::nullable::or_default;

/// Unsolicited payment or subscription state change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Callback {
    #[serde(deserialize_with = "or_default")]
    pub acq_id: i64,
    /// pay, hold, paysplit, subscribe, auth, regular
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
    #[serde(rename = "authcode_credit", deserialize_with = "or_default")]
    pub auth_code_credit: String,
    #[serde(rename = "authcode_debit", deserialize_with = "or_default")]
    pub auth_code_debit: String,
    #[serde(deserialize_with = "or_default")]
    pub card_token: String,
    #[serde(deserialize_with = "or_default")]
    pub commission_credit: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub commission_debit: NumericAmount,
    /// Date the funds were debited, epoch milliseconds
    #[serde(deserialize_with = "or_default")]
    pub completion_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub create_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub currency: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_credit: Currency,
    #[serde(deserialize_with = "or_default")]
    pub currency_debit: Currency,
    /// Customer ID on the merchant's site
    #[serde(deserialize_with = "or_default")]
    pub customer: String,
    #[serde(deserialize_with = "or_default")]
    pub description: String,
    #[serde(deserialize_with = "or_default")]
    pub end_date: i64,
    #[serde(deserialize_with = "or_default")]
    pub err_code: String,
    #[serde(deserialize_with = "or_default")]
    pub err_description: String,
    #[serde(deserialize_with = "or_default")]
    pub err_erc: String,
    #[serde(deserialize_with = "or_default")]
    pub info: String,
    #[serde(deserialize_with = "or_default")]
    pub ip: String,
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
    /// card, privat24, masterpass, moment_part, cash, invoice, qr
    #[serde(deserialize_with = "or_default")]
    pub paytype: PayType,
    #[serde(deserialize_with = "or_default")]
    pub public_key: String,
    #[serde(deserialize_with = "or_default")]
    pub receiver_commission: NumericAmount,
    /// Where to send the client for 3DS verification
    #[serde(deserialize_with = "or_default")]
    pub redirect_to: String,
    /// Last day a refund is possible, epoch milliseconds
    #[serde(deserialize_with = "or_default")]
    pub refund_date_last: i64,
    #[serde(deserialize_with = "or_default")]
    pub refund_amount: NumericAmount,
    #[serde(deserialize_with = "or_default")]
    pub rrn_credit: String,
    #[serde(deserialize_with = "or_default")]
    pub rrn_debit: String,
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
    pub sender_first_name: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_last_name: String,
    #[serde(deserialize_with = "or_default")]
    pub sender_phone: String,
    #[serde(deserialize_with = "or_default")]
    pub status: Status,
    /// The payment is reserved for a refund
    #[serde(deserialize_with = "or_default")]
    pub wait_reserve_status: bool,
    #[serde(deserialize_with = "or_default")]
    pub token: String,
    /// Payment type
    #[serde(rename = "type", deserialize_with = "or_default")]
    pub kind: String,
    #[serde(deserialize_with = "or_default")]
    pub version: i64,
    #[serde(deserialize_with = "or_default")]
    pub product_category: String,
    #[serde(deserialize_with = "or_default")]
    pub product_description: String,
    #[serde(deserialize_with = "or_default")]
    pub product_name: String,
    #[serde(deserialize_with = "or_default")]
    pub product_url: String,
    #[serde(rename = "verifycode", deserialize_with = "or_default")]
    pub verify_code: String,
}

impl Callback {
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.create_date)
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.end_date)
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.completion_date)
    }

    pub fn refund_deadline(&self) -> Option<DateTime<Utc>> {
        epoch_millis_to_utc(self.refund_date_last)
    }

    /// True when the gateway reported an error code.
    pub fn has_error(&self) -> bool {
        !self.err_code.is_empty()
    }
}
