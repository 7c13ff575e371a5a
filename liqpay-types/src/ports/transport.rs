//! Transport port.

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Gateway returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,
}

/// Port trait for delivering a signed payload to the gateway.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends the payload and returns the raw response body.
    async fn send(&self, payload: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}
