//! Core protocol abstractions.
//!
//! This module holds the data model shared by the rest of the crate:
//!
//! - **Requests** ([`request`]): the parsed form of one incoming request
//! - **Responses** ([`response`]): what a handler produces and the
//!   connection serializes, including the reserved status entry
//! - **Errors** ([`error`]): transport-level error types — note that
//!   malformed requests are *not* errors anywhere in this crate; the
//!   parser is total and degrades to empty fields instead

mod error;
mod request;
mod response;

pub use error::ConnectionError;
pub use error::ServeError;
pub use request::Request;
pub use response::Response;
pub use response::STATUS_HEADER;
