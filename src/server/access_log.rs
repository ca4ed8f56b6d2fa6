//! Per-request access logging in Common Log Format.

use axum::body::HttpBody;
use axum::extract::{ConnectInfo, Request};
use axum::http::{header, Method, StatusCode, Version};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::SocketAddr;
use tracing::info;

/// One access-log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessLogEntry {
    pub remote_addr: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub method: Method,
    pub target: String,
    pub version: Version,
    pub status: StatusCode,
    pub content_length: Option<u64>,
}

impl fmt::Display for AccessLogEntry {
    /// `remote - - [dd/Mon/yyyy:HH:MM:SS +0000] "GET /path HTTP/1.1" 200 123`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - - [{}] \"{} {} {:?}\" {} ",
            self.remote_addr.as_deref().unwrap_or("-"),
            self.timestamp.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.target,
            self.version,
            self.status.as_u16(),
        )?;
        match self.content_length {
            Some(len) => write!(f, "{}", len),
            None => f.write_str("-"),
        }
    }
}

/// Middleware writing one `access_log` line per request.
pub async fn log_request(req: Request, next: Next) -> Response {
    let remote_addr = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());
    let method = req.method().clone();
    let target = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let version = req.version();

    let response = next.run(req).await;

    let entry = AccessLogEntry {
        remote_addr,
        timestamp: Utc::now(),
        method,
        target,
        version,
        status: response.status(),
        content_length: content_length(&response),
    };
    info!(target: "access_log", "{}", entry);

    response
}

fn content_length(response: &Response) -> Option<u64> {
    response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())
        .or_else(|| response.body().size_hint().exact())
}
