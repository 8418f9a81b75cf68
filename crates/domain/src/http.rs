//! HTTP request line and response values for the gate endpoint.
//!
//! Only the first line of a request matters to the gate: method and path are
//! taken from it and everything after the first CRLF is ignored. Decoding is
//! permissive; invalid UTF-8 is replaced rather than rejected.

use std::fmt;
use std::time::Duration;

/// Maximum number of request bytes read from a connection.
pub const MAX_REQUEST_BYTES: usize = 1024;

/// Content type of every response body.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Method and path of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
}

impl RequestLine {
    /// Parse the first line of a raw request buffer.
    ///
    /// Never fails: a missing method becomes the empty string and a missing
    /// path becomes `/`.
    #[must_use]
    pub fn parse(raw: &[u8]) -> Self {
        let first = raw
            .windows(2)
            .position(|pair| pair == b"\r\n")
            .map_or(raw, |end| &raw[..end]);
        let line = String::from_utf8_lossy(first);
        let mut parts = line.split_whitespace();
        let method = parts.next().unwrap_or_default().to_string();
        let path = parts.next().unwrap_or("/").to_string();
        Self { method, path }
    }

    /// Resolve the request against the routing table.
    #[must_use]
    pub fn route(&self) -> Route {
        match (self.method.as_str(), self.path.as_str()) {
            ("GET", "/") => Route::Health,
            ("GET" | "POST", "/open") => Route::Open,
            _ => Route::NotFound,
        }
    }
}

/// Endpoints served by the gate controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Health,
    /// `GET /open` or `POST /open`
    Open,
    /// Anything else.
    NotFound,
}

/// Status codes the gate controller can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    TooManyRequests,
}

impl Status {
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::TooManyRequests => 429,
        }
    }

    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "Not Found",
            Self::TooManyRequests => "Too Many Requests",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// A plain-text response, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: Status,
    pub content_type: &'static str,
    pub body: String,
}

impl Response {
    fn text(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    /// `200` answer to the health check.
    #[must_use]
    pub fn health() -> Self {
        Self::text(Status::Ok, ".")
    }

    /// `200` answer to an accepted trigger.
    #[must_use]
    pub fn opened() -> Self {
        Self::text(Status::Ok, "OK")
    }

    /// `429` answer to a trigger rejected by the cooldown.
    #[must_use]
    pub fn cooling_down(remaining: Duration) -> Self {
        Self::text(
            Status::TooManyRequests,
            format!("Cooldown active. Wait {:.1}s", remaining.as_secs_f64()),
        )
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::text(Status::NotFound, "Not Found")
    }

    /// Body length in bytes, as sent in `Content-Length`.
    #[must_use]
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}
