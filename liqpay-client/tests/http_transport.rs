//! HttpTransport integration tests against a local axum gateway stub.

use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use liqpay_client::{HttpTransport, LiqPayClient, TransportConfig};
use liqpay_types::{Signer, Status, Transport, TransportError};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// What the stub saw for one request.
#[derive(Debug)]
struct Received {
    content_type: String,
    body: Vec<u8>,
}

/// Serves `app` on an ephemeral port and returns its base URL.
async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub that answers `POST /api/request` with a fixed status and body.
async fn gateway_stub(
    status: StatusCode,
    reply: &'static str,
) -> (String, mpsc::UnboundedReceiver<Received>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let app = Router::new().route(
        "/api/request",
        post(move |headers: HeaderMap, body: Bytes| {
            let tx = tx.clone();
            async move {
                let content_type = headers
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let _ = tx.send(Received {
                    content_type,
                    body: body.to_vec(),
                });
                (status, reply)
            }
        }),
    );
    (format!("{}/api/request", serve(app).await), rx)
}

struct PassThrough;

impl Signer for PassThrough {
    fn sign(&self, payload: &[u8]) -> Vec<u8> {
        payload.to_vec()
    }
}

#[tokio::test]
async fn test_posts_payload_and_returns_body() {
    init_tracing();
    let (url, mut rx) = gateway_stub(StatusCode::OK, r#"{"status":"success"}"#).await;
    let transport = HttpTransport::new(TransportConfig::new(url)).unwrap();

    let body = transport.send(b"data=abc&signature=xyz".to_vec()).await.unwrap();
    assert_eq!(body, br#"{"status":"success"}"#);

    let received = rx.recv().await.unwrap();
    assert_eq!(received.content_type, "application/x-www-form-urlencoded");
    assert_eq!(received.body, b"data=abc&signature=xyz");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    init_tracing();
    let (url, _rx) = gateway_stub(StatusCode::BAD_GATEWAY, "upstream down").await;
    let transport = HttpTransport::new(TransportConfig::new(url)).unwrap();

    let err = transport.send(b"{}".to_vec()).await.unwrap_err();
    match err {
        TransportError::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_slow_gateway_times_out() {
    init_tracing();
    let app = Router::new().route(
        "/api/request",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }),
    );
    let url = format!("{}/api/request", serve(app).await);

    let config = TransportConfig::new(url).with_timeout(Duration::from_millis(200));
    let transport = HttpTransport::new(config).unwrap();

    let err = transport.send(b"{}".to_vec()).await.unwrap_err();
    assert!(matches!(err, TransportError::Timeout));
}

#[tokio::test]
async fn test_refused_connection() {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpTransport::new(TransportConfig::new(format!("http://{addr}/"))).unwrap();
    let err = transport.send(b"{}".to_vec()).await.unwrap_err();
    assert!(matches!(err, TransportError::Connection(_)));
}

#[tokio::test]
async fn test_client_over_http() {
    init_tracing();
    let (url, mut rx) = gateway_stub(
        StatusCode::OK,
        r#"{"action":"status","status":"wait_secure","order_id":"ORDER-9","err_code":null,"unknown":1}"#,
    )
    .await;
    let config = TransportConfig::new(url).with_content_type("application/json");
    let transport = HttpTransport::new(config).unwrap();
    let client = LiqPayClient::new(transport, PassThrough);

    let resp = client.status("ORDER-9").await.unwrap();
    assert_eq!(resp.status, Status::WAIT_SECURE);
    assert_eq!(resp.order_id, "ORDER-9");

    let received = rx.recv().await.unwrap();
    assert_eq!(received.content_type, "application/json");
    let sent: serde_json::Value = serde_json::from_slice(&received.body).unwrap();
    assert_eq!(sent, serde_json::json!({"action": "status", "order_id": "ORDER-9"}));
}
