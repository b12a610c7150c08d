//! Response data model.
//!
//! A [`Response`] is created by a route handler (or by the router's
//! default 404 path), owned by the connection that serializes it and
//! dropped after the write. The status line travels inside the header map
//! under the reserved key [`STATUS_HEADER`], which the encoder writes
//! first and never repeats as an ordinary header.

use std::collections::HashMap;

use bytes::Bytes;

/// The reserved header key carrying the full status line,
/// e.g. `HTTP/1.1 200 OK`.
pub const STATUS_HEADER: &str = "Status";

/// A response as produced by a handler: a header map plus raw body bytes.
///
/// Constructed in a chainable style:
///
/// ```
/// use pico_http::protocol::Response;
///
/// let response = Response::with_status("HTTP/1.1 200 OK")
///     .with_header("Content-Type", "text/plain")
///     .with_body("hi");
/// assert_eq!(response.status_line(), "HTTP/1.1 200 OK");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a response whose status line is `status`, with no other
    /// headers and an empty body.
    pub fn with_status(status: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert(STATUS_HEADER.to_owned(), status.into());
        Self { headers, body: Bytes::new() }
    }

    /// The response every unmatched request receives.
    pub fn not_found() -> Self {
        Self::with_status("HTTP/1.1 404 Not Found").with_body("404 Not Found")
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// The status line to send, or the empty string when the reserved
    /// entry was never set. The encoder writes it verbatim either way.
    pub fn status_line(&self) -> &str {
        self.headers.get(STATUS_HEADER).map(String::as_str).unwrap_or("")
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
