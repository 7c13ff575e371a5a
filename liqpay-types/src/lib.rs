//! # LiqPay Types
//!
//! Typed payload schema for the LiqPay payment gateway.
//! This crate has ZERO IO - only data structures, the wire contract and
//! the port traits that the transport and signing adapters implement.
//!
//! ## Layout
//!
//! - `domain/` - Enumerated values, amounts and line items
//! - `dto/` - Request, response and callback records
//! - `codec` - Conversion between records and wire bytes, plus validation
//! - `ports/` - `Transport` and `Signer` traits
//! - `openapi` - Component schema document for the whole contract
//! - `error` - Payload and validation errors
//!
//! ## Example
//!
//! ```
//! use liqpay_types::{Action, CheckoutRequest, Currency, GatewayRequest};
//!
//! let req = CheckoutRequest::new(Action::PAY, 100.50, Currency::UAH, "ORDER-1");
//! req.validate().unwrap();
//! let payload = req.to_payload().unwrap();
//! assert_eq!(
//!     payload,
//!     br#"{"action":"pay","amount":100.5,"currency":"UAH","order_id":"ORDER-1"}"#
//! );
//! ```

pub mod codec;
pub mod domain;
pub mod dto;
pub mod error;
pub mod openapi;
pub mod ports;

// Re-export commonly used types
pub use codec::{GatewayRequest, GatewayResponse};
pub use domain::{
    Action, CancelInvoiceResult, Currency, DecimalAmount, InvoiceItem, Item, Language,
    NumericAmount, PayType, RroInfo, Status, StatusClass, SubscribePeriod, WireValue,
};
pub use dto::*;
pub use error::{PayloadError, ValidationError};
pub use openapi::GatewaySchema;
pub use ports::{Signer, Transport, TransportError};
