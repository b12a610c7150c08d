//! The handler capability.
//!
//! A handler is anything that maps a [`Request`] to a [`Response`]. The
//! core never looks inside a handler: business logic is entirely the
//! embedder's. Plain functions and closures get the trait for free
//! through the blanket impl, so routes are registered as
//! `.route("/hello", hello)` or with an inline closure.

use crate::protocol::{Request, Response};

/// User-supplied request handling logic.
///
/// Handlers are called synchronously from the connection task that owns
/// the request, possibly from many tasks at once, hence `Send + Sync`.
pub trait Handler: Send + Sync {
    fn call(&self, request: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn call(&self, request: &Request) -> Response {
        self(request)
    }
}
