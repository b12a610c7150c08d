//! Ordered route table and dispatch.
//!
//! Routes are registered on a [`RouterBuilder`] and frozen into a
//! [`Router`] before serving starts; the table is read-only from then on
//! and is shared across connection tasks without locks. Matching is
//! linear over the registration order and the first match wins — routes
//! are never deduplicated, merged or reordered.
//!
//! A pattern matches a request path if it equals the path byte-for-byte,
//! or if it compiles as a regular expression that matches somewhere
//! within the path (unanchored search, anchor explicitly with `^`/`$`).
//! Patterns are not validated at registration: one that fails to compile
//! simply never matches through the regex branch, while the exact-match
//! branch still applies to it.

use std::fmt;

use once_cell::sync::OnceCell;
use regex::Regex;
use tracing::debug;

use crate::handler::Handler;
use crate::protocol::{Request, Response};

/// One registered pattern/handler pair.
struct Route {
    pattern: String,
    handler: Box<dyn Handler>,
    // compiled on first use; None once compilation has failed
    regex: OnceCell<Option<Regex>>,
}

impl Route {
    fn new(pattern: String, handler: Box<dyn Handler>) -> Self {
        Self { pattern, handler, regex: OnceCell::new() }
    }

    fn matches(&self, path: &str) -> bool {
        if self.pattern == path {
            return true;
        }
        self.compiled().is_some_and(|regex| regex.is_match(path))
    }

    fn compiled(&self) -> Option<&Regex> {
        self.regex.get_or_init(|| Regex::new(&self.pattern).ok()).as_ref()
    }
}

/// The read-only route table used while serving.
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Creates a new builder; register routes on it and [`build`] it
    /// before handing it to the server.
    ///
    /// [`build`]: RouterBuilder::build
    pub fn builder() -> RouterBuilder {
        RouterBuilder { routes: Vec::new() }
    }

    /// Dispatches a request to the first matching route's handler.
    ///
    /// When nothing matches, returns [`Response::not_found`]: status
    /// `HTTP/1.1 404 Not Found`, body `404 Not Found`, no other headers.
    pub fn handle(&self, request: &Request) -> Response {
        for route in &self.routes {
            if route.matches(request.path()) {
                return route.handler.call(request);
            }
        }
        debug!(path = request.path(), "no route matched");
        Response::not_found()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter().map(|route| &route.pattern)).finish()
    }
}

/// Accumulates routes in registration order.
pub struct RouterBuilder {
    routes: Vec<Route>,
}

impl RouterBuilder {
    /// Appends a route. No deduplication, no pattern validation.
    pub fn route(mut self, pattern: impl Into<String>, handler: impl Handler + 'static) -> Self {
        self.routes.push(Route::new(pattern.into(), Box::new(handler)));
        self
    }

    /// Freezes the table. After this the route set never changes.
    pub fn build(self) -> Router {
        Router { routes: self.routes }
    }
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.routes.iter().map(|route| &route.pattern)).finish()
    }
}
