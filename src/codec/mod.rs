//! Wire format encoding and decoding.
//!
//! Two pure functions make up the codec, neither of which performs I/O:
//!
//! - [`parse`] turns the raw bytes of a single read into a
//!   [`Request`](crate::protocol::Request). It is total: any byte
//!   sequence, including the empty one, produces a value.
//! - [`encode`] serializes a [`Response`](crate::protocol::Response) into
//!   a buffer: status line, headers, blank line, body.

mod request_parser;
mod response_encoder;

pub use request_parser::parse;
pub use response_encoder::encode;
