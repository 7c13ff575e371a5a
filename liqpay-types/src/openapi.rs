//! OpenAPI component document describing every gateway payload.

use utoipa::OpenApi;

use crate::domain::{
    Action, CancelInvoiceResult, Currency, DecimalAmount, InvoiceItem, Item, Language,
    NumericAmount, PayType, RroInfo, Status, SubscribePeriod,
};
use crate::dto::{
    Callback, CancelInvoiceRequest, CancelInvoiceResponse, CheckoutRequest,
    EditSubscriptionRequest, InvoiceRequest, InvoiceResponse, RefundRequest, RefundResponse,
    StatusRequest, StatusResponse, SubscriptionRequest, SubscriptionResponse, UnsubscribeRequest,
};

/// Schema-only OpenAPI document for the LiqPay payload contract.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LiqPay Payload Contract",
        version = "3.0.0",
        description = "Request, response and callback payloads exchanged with the LiqPay gateway.\n\nEnumerated fields are open string sets: unknown tokens are accepted on input and must be checked by the caller.",
    ),
    components(
        schemas(
            CheckoutRequest,
            StatusRequest,
            RefundRequest,
            SubscriptionRequest,
            EditSubscriptionRequest,
            UnsubscribeRequest,
            InvoiceRequest,
            CancelInvoiceRequest,
            StatusResponse,
            RefundResponse,
            SubscriptionResponse,
            InvoiceResponse,
            CancelInvoiceResponse,
            Callback,
            Item,
            InvoiceItem,
            RroInfo,
            NumericAmount,
            DecimalAmount,
            Action,
            Currency,
            Language,
            PayType,
            Status,
            SubscribePeriod,
            CancelInvoiceResult,
        )
    )
)]
pub struct GatewaySchema;

impl GatewaySchema {
    /// Renders the document as pretty-printed JSON.
    pub fn to_json() -> Result<String, serde_json::Error> {
        Self::openapi().to_pretty_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_is_a_component() {
        let doc = GatewaySchema::openapi();
        let schemas = doc.components.expect("components").schemas;
        for name in [
            "CheckoutRequest",
            "RefundRequest",
            "StatusResponse",
            "CancelInvoiceResponse",
            "Callback",
            "RroInfo",
            "Status",
        ] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
        assert!(schemas.len() >= 26);
    }

    #[test]
    fn test_document_renders() {
        let json = GatewaySchema::to_json().unwrap();
        assert!(json.contains("\"order_id\""));
        assert!(json.contains("\"subscribe_periodicity\""));
        assert!(json.contains("\"verifycode\""));
    }
}
