//! # LiqPay Client SDK
//!
//! Drives typed gateway requests through a [`Signer`] and a [`Transport`]:
//! validate, serialize, sign, send, then decode the paired response.

pub mod config;
pub mod transport;

pub use config::{ConfigError, TransportConfig};
pub use transport::HttpTransport;

use liqpay_types::{
    Callback, CancelInvoiceRequest, CancelInvoiceResponse, CheckoutRequest, DecimalAmount,
    EditSubscriptionRequest, GatewayRequest, GatewayResponse, InvoiceRequest, InvoiceResponse,
    PayloadError, RefundRequest, RefundResponse, Signer, StatusRequest, StatusResponse,
    SubscriptionRequest, SubscriptionResponse, Transport, TransportError, UnsubscribeRequest,
    ValidationError,
};
use tracing::{debug, instrument, warn};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Payload error: {0}")]
    Payload(#[from] PayloadError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// LiqPay API client.
pub struct LiqPayClient<T, S> {
    transport: T,
    signer: S,
    validate: bool,
}

impl<T: Transport, S: Signer> LiqPayClient<T, S> {
    /// Creates a new client. Requests are validated before sending.
    pub fn new(transport: T, signer: S) -> Self {
        Self {
            transport,
            signer,
            validate: true,
        }
    }

    /// Sends requests without checking enumerated fields first.
    pub fn without_validation(mut self) -> Self {
        self.validate = false;
        self
    }

    /// Runs one request through the signer and the transport.
    #[instrument(skip_all, fields(operation = R::OPERATION, action = %request.action()))]
    pub async fn execute<R: GatewayRequest>(
        &self,
        request: &R,
    ) -> Result<R::Response, ClientError> {
        if self.validate {
            if let Err(e) = request.validate() {
                warn!("Rejected before sending: {}", e);
                return Err(e.into());
            }
        }

        let payload = request.to_payload()?;
        let signed = self.signer.sign(&payload);
        debug!("Sending {} bytes ({} signed)", payload.len(), signed.len());

        let body = self.transport.send(signed).await.map_err(|e| {
            warn!("Transport failed: {}", e);
            e
        })?;

        let response = R::Response::from_payload(&body).map_err(|e| {
            warn!("Undecodable response: {}", e);
            e
        })?;
        Ok(response)
    }

    /// Starts a checkout payment.
    pub async fn checkout(&self, req: &CheckoutRequest) -> Result<StatusResponse, ClientError> {
        self.execute(req).await
    }

    /// Fetches the status of an order.
    pub async fn status(&self, order_id: &str) -> Result<StatusResponse, ClientError> {
        self.execute(&StatusRequest::new(order_id)).await
    }

    /// Refunds an order, fully or partially.
    pub async fn refund(
        &self,
        order_id: &str,
        amount: impl Into<DecimalAmount>,
    ) -> Result<RefundResponse, ClientError> {
        self.execute(&RefundRequest::new(amount, order_id)).await
    }

    /// Creates a subscription.
    pub async fn subscribe(
        &self,
        req: &SubscriptionRequest,
    ) -> Result<SubscriptionResponse, ClientError> {
        self.execute(req).await
    }

    /// Edits an existing subscription.
    pub async fn edit_subscription(
        &self,
        req: &EditSubscriptionRequest,
    ) -> Result<SubscriptionResponse, ClientError> {
        self.execute(req).await
    }

    /// Cancels a subscription.
    pub async fn unsubscribe(&self, order_id: &str) -> Result<StatusResponse, ClientError> {
        self.execute(&UnsubscribeRequest::new(order_id)).await
    }

    /// Sends an invoice.
    pub async fn send_invoice(&self, req: &InvoiceRequest) -> Result<InvoiceResponse, ClientError> {
        self.execute(req).await
    }

    /// Cancels an invoice.
    pub async fn cancel_invoice(
        &self,
        order_id: &str,
    ) -> Result<CancelInvoiceResponse, ClientError> {
        self.execute(&CancelInvoiceRequest::new(order_id)).await
    }
}

/// Decodes a server-to-server notification body.
///
/// The body must already be authenticated and unwrapped by the caller.
#[instrument(skip_all, fields(bytes = payload.len()))]
pub fn parse_callback(payload: &[u8]) -> Result<Callback, ClientError> {
    let callback = Callback::from_payload(payload)?;
    if !callback.status.is_valid() {
        warn!("Callback carries unknown status {:?}", callback.status.as_str());
    }
    debug!(order_id = %callback.order_id, status = %callback.status, "Callback decoded");
    Ok(callback)
}
