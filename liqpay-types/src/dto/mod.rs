//! Data Transfer Objects exchanged with the gateway.

pub mod callback;
mod nullable;
pub mod requests;
pub mod responses;

pub use callback::Callback;
pub use requests::{
    CancelInvoiceRequest, CheckoutRequest, EditSubscriptionRequest, InvoiceRequest, RefundRequest,
    StatusRequest, SubscriptionRequest, UnsubscribeRequest,
};
pub use responses::{
    CancelInvoiceResponse, InvoiceResponse, RefundResponse, StatusResponse, SubscriptionResponse,
};
