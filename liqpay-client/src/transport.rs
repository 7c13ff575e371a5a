//! `reqwest`-backed implementation of the transport port.

use async_trait::async_trait;
use liqpay_types::{Transport, TransportError};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument, warn};

use crate::config::TransportConfig;

/// Posts signed payloads to a single gateway endpoint.
///
/// Retries and backoff are left to the caller.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    content_type: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;
        Ok(Self {
            endpoint: config.endpoint,
            content_type: config.content_type,
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Connection(err.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, payload), fields(endpoint = %self.endpoint, bytes = payload.len()))]
    async fn send(&self, payload: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, self.content_type.as_str())
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            warn!("Gateway answered HTTP {}", status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        debug!("Received {} bytes", body.len());
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport =
            HttpTransport::new(TransportConfig::new("http://localhost:9999/api")).unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:9999/api");
    }
}
