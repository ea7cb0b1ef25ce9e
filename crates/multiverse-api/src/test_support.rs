//! A throwaway HTTP responder for exercising the client without the network.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::ApiClient;

pub(crate) struct TestServer {
    pub base_url: String,
    /// Request lines received, e.g. `GET /character/1 HTTP/1.1`.
    pub requests: mpsc::UnboundedReceiver<String>,
}

/// Answers every connection with `status` and `body`.
pub(crate) async fn serve(status: &'static str, body: impl Into<String>) -> TestServer {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap_or(0);
            let head = String::from_utf8_lossy(&buf[..n]);
            if let Some(line) = head.lines().next() {
                let _ = tx.send(line.to_string());
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    TestServer {
        base_url: format!("http://{addr}/api"),
        requests: rx,
    }
}

/// A client that bypasses any proxy configured in the environment.
pub(crate) fn test_client(base_url: &str) -> ApiClient {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    ApiClient::with_client(client, base_url).unwrap()
}
