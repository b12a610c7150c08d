//! A tiny one-request-per-connection http-style server
//!
//! This crate provides a deliberately small TCP server: it accepts a
//! connection, reads a single bounded chunk, parses a simplified HTTP-like
//! request from it, dispatches the request through a linear route table and
//! writes back a status line, headers and body before closing the
//! connection. It is built on top of tokio and keeps the embedding surface
//! minimal: a router, a handful of handlers and a blocking serve call.
//!
//! # Features
//!
//! - Asynchronous I/O using tokio, one lightweight task per connection
//! - Linear route table with exact-string and regex patterns,
//!   first match wins in registration order
//! - Total request parser: malformed input never fails, it degrades to
//!   empty fields
//! - Handlers are plain functions or closures from [`protocol::Request`]
//!   to [`protocol::Response`]
//! - Clean error handling for the transport layer
//!
//! # Example
//!
//! ```no_run
//! use pico_http::protocol::{Request, Response};
//! use pico_http::router::Router;
//! use pico_http::server::Server;
//! use tracing::Level;
//! use tracing_subscriber::FmtSubscriber;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     let subscriber = FmtSubscriber::builder()
//!         .with_max_level(Level::INFO)
//!         .finish();
//!     tracing::subscriber::set_global_default(subscriber)
//!         .expect("setting default subscriber failed");
//!
//!     let router = Router::builder()
//!         .route("/hello", hello)
//!         .route("^/user/[0-9]+$", |_req: &Request| {
//!             Response::with_status("HTTP/1.1 200 OK").with_body("a user")
//!         })
//!         .build();
//!
//!     let server = Server::builder()
//!         .port(8080)
//!         .router(router)
//!         .build()
//!         .expect("server misconfigured");
//!
//!     if let Err(e) = server.serve().await {
//!         eprintln!("server terminated: {e}");
//!     }
//! }
//!
//! fn hello(_req: &Request) -> Response {
//!     Response::with_status("HTTP/1.1 200 OK")
//!         .with_header("Content-Type", "text/plain")
//!         .with_body("hi")
//! }
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`protocol`]: Request/response data model and error types
//! - [`codec`]: The wire format — parsing requests, encoding responses
//! - [`handler`]: The handler capability and its function blanket impl
//! - [`router`]: Ordered route table and dispatch
//! - [`connection`]: One accepted connection's read/dispatch/write cycle
//! - [`server`]: Listener loop binding the pieces together
//!
//! # Wire format
//!
//! Requests are `METHOD SP PATH [SP ...]` CRLF, then zero or more
//! `Name: Value` CRLF lines, then a blank CRLF line, then body bytes.
//! Responses are the status line CRLF, the non-status headers as
//! `Name: Value` CRLF lines, a blank CRLF line and the raw body. This is
//! not an HTTP/1.1 implementation: there is no required Host header, no
//! chunked encoding and no Content-Length handling.
//!
//! # Limitations
//!
//! - Exactly one request per connection, no keep-alive
//! - A request is whatever a single read returns, capped at
//!   [`connection::MAX_REQUEST_SIZE`] bytes; longer requests are truncated
//! - No TLS (use a reverse proxy for HTTPS)
//! - No timeouts: a silent peer holds its task and socket until it closes

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;
pub mod router;
pub mod server;
