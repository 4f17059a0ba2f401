//! Common test utilities for paycom-client integration tests
//!
//! A minimal HTTP/1.1 server that records every request and answers with a
//! canned reply, so clients can be exercised without the real gateway.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub path: String,
    /// Header names are lower-cased
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// What the mock server sends back
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
    /// Wait this long before answering
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body.to_string())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// JSON-RPC success body
pub fn mock_result(result: Value) -> MockReply {
    MockReply::ok(json!({"jsonrpc": "2.0", "id": 1, "result": result}))
}

/// JSON-RPC error body (sent with HTTP 200, as the gateway does)
pub fn mock_error(code: i32, message: Value) -> MockReply {
    MockReply::ok(json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}}))
}

/// Mock HTTP server for client testing
pub struct MockHttpServer {
    addr: SocketAddr,
    shutdown_tx: mpsc::Sender<()>,
    request_rx: mpsc::Receiver<RecordedRequest>,
}

impl MockHttpServer {
    /// Start a server that answers every request with `reply`
    pub async fn new(reply: MockReply) -> Self {
        Self::with_handler(move |_| reply.clone()).await
    }

    /// Start a server that computes each reply from the request
    pub async fn with_handler<F>(handler: F) -> Self
    where
        F: Fn(&RecordedRequest) -> MockReply + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let (request_tx, request_rx) = mpsc::channel::<RecordedRequest>(100);
        let handler = Arc::new(handler);

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    accepted = listener.accept() => {
                        if let Ok((stream, _)) = accepted {
                            let request_tx = request_tx.clone();
                            let handler = handler.clone();
                            tokio::spawn(async move {
                                serve(stream, request_tx, handler.as_ref()).await;
                            });
                        }
                    }
                }
            }
        });

        // Give the listener a moment to be polled
        tokio::time::sleep(Duration::from_millis(10)).await;

        Self {
            addr,
            shutdown_tx,
            request_rx,
        }
    }

    /// Base URL to point a client at
    pub fn url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Root URL without a path
    pub fn root_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Next recorded request
    pub async fn next_request(&mut self) -> RecordedRequest {
        tokio::time::timeout(Duration::from_secs(5), self.request_rx.recv())
            .await
            .expect("no request within 5s")
            .expect("server stopped")
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(()).await;
    }
}

async fn serve<F>(mut stream: TcpStream, request_tx: mpsc::Sender<RecordedRequest>, handler: &F)
where
    F: Fn(&RecordedRequest) -> MockReply,
{
    let Some(request) = read_request(&mut stream).await else {
        return;
    };

    let reply = handler(&request);
    let _ = request_tx.send(request).await;

    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reason(reply.status),
        reply.body.len(),
        reply.body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split(' ');
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();

    let headers: HashMap<String, String> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .get("content-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(RecordedRequest {
        method,
        path,
        headers,
        body,
    })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
