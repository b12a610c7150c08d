//! Request data model.
//!
//! A [`Request`] is produced once per connection by the wire parser
//! ([`crate::codec::parse`]), handed through dispatch by reference and
//! dropped when the connection task returns. It is plain data: no I/O, no
//! lazy parsing.

use std::collections::HashMap;

use bytes::Bytes;

/// A parsed incoming request.
///
/// Header names map to values last-write-wins: when the same name appears
/// on several lines, the value of the last line is kept. Header insertion
/// order is not preserved. The body is raw bytes, exactly as received
/// (re-joined on CRLF by the parser), with no decoding applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    path: String,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Request {
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        headers: HashMap<String, String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self { method: method.into(), path: path.into(), headers, body: body.into() }
    }

    /// The verb token of the request line, e.g. `GET`. Empty if the
    /// request line had no tokens.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The path token of the request line. This is the routing key and is
    /// matched literally; there is no URL decoding.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Looks up a header by exact name. Names are not case-normalized, so
    /// `content-type` and `Content-Type` are different keys.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
