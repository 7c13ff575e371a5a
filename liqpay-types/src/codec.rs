//! Serialization contract between records and wire bytes.
//!
//! Requests implement [`GatewayRequest`]; responses and the callback implement
//! [`GatewayResponse`]. Serializing never validates: call
//! [`GatewayRequest::validate`] first when enumerated fields must be trusted.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{Action, WireValue};
use crate::dto::{
    Callback, CancelInvoiceRequest, CancelInvoiceResponse, CheckoutRequest,
    EditSubscriptionRequest, InvoiceRequest, InvoiceResponse, RefundRequest, RefundResponse,
    StatusRequest, StatusResponse, SubscriptionRequest, SubscriptionResponse, UnsubscribeRequest,
};
use crate::error::{PayloadError, ValidationError};

/// An outbound record paired with the response shape it produces.
pub trait GatewayRequest: Serialize + Send + Sync {
    type Response: GatewayResponse;

    /// Operation name used in logs.
    const OPERATION: &'static str;

    fn action(&self) -> &Action;

    /// Checks every enumerated field against its value set.
    ///
    /// Lengths, formats and cross-field rules are left to the gateway.
    fn validate(&self) -> Result<(), ValidationError>;

    fn to_payload(&self) -> Result<Vec<u8>, PayloadError> {
        serde_json::to_vec(self).map_err(PayloadError::Serialize)
    }

    fn to_value(&self) -> Result<serde_json::Value, PayloadError> {
        serde_json::to_value(self).map_err(PayloadError::Serialize)
    }
}

/// An inbound record.
pub trait GatewayResponse: DeserializeOwned + Send {
    fn from_payload(bytes: &[u8]) -> Result<Self, PayloadError> {
        serde_json::from_slice(bytes).map_err(PayloadError::malformed)
    }

    fn from_value(value: serde_json::Value) -> Result<Self, PayloadError> {
        serde_json::from_value(value).map_err(PayloadError::malformed)
    }
}

fn ensure_optional<V: WireValue>(
    value: Option<&V>,
    field: &'static str,
) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| v.ensure_valid(field))
}

impl GatewayRequest for CheckoutRequest {
    type Response = StatusResponse;
    const OPERATION: &'static str = "checkout";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")?;
        self.currency.ensure_valid("currency")?;
        ensure_optional(self.language.as_ref(), "language")?;
        for pay_type in self.pay_types.iter().flatten() {
            pay_type.ensure_valid("pay_types")?;
        }
        Ok(())
    }
}

impl GatewayRequest for StatusRequest {
    type Response = StatusResponse;
    const OPERATION: &'static str = "status";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")
    }
}

impl GatewayRequest for RefundRequest {
    type Response = RefundResponse;
    const OPERATION: &'static str = "refund";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")
    }
}

impl GatewayRequest for SubscriptionRequest {
    type Response = SubscriptionResponse;
    const OPERATION: &'static str = "subscribe";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")?;
        self.currency.ensure_valid("currency")?;
        ensure_optional(self.language.as_ref(), "language")?;
        ensure_optional(self.subscribe_period.as_ref(), "subscribe_periodicity")
    }
}

impl GatewayRequest for EditSubscriptionRequest {
    type Response = SubscriptionResponse;
    const OPERATION: &'static str = "subscribe_update";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")?;
        self.currency.ensure_valid("currency")
    }
}

impl GatewayRequest for UnsubscribeRequest {
    type Response = StatusResponse;
    const OPERATION: &'static str = "unsubscribe";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")
    }
}

impl GatewayRequest for InvoiceRequest {
    type Response = InvoiceResponse;
    const OPERATION: &'static str = "invoice_send";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")?;
        self.currency.ensure_valid("currency")?;
        ensure_optional(self.action_payment.as_ref(), "action_payment")?;
        ensure_optional(self.language.as_ref(), "language")
    }
}

impl GatewayRequest for CancelInvoiceRequest {
    type Response = CancelInvoiceResponse;
    const OPERATION: &'static str = "invoice_cancel";

    fn action(&self) -> &Action {
        &self.action
    }

    fn validate(&self) -> Result<(), ValidationError> {
        self.action.ensure_valid("action")
    }
}

impl GatewayResponse for StatusResponse {}
impl GatewayResponse for RefundResponse {}
impl GatewayResponse for SubscriptionResponse {}
impl GatewayResponse for InvoiceResponse {}
impl GatewayResponse for CancelInvoiceResponse {}
impl GatewayResponse for Callback {}
