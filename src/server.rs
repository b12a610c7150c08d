//! Listener loop and embedding surface.
//!
//! The [`Server`] owns a frozen [`Router`] and a port. [`Server::serve`]
//! binds, then accepts forever, spawning one task per connection; the
//! accept loop itself never waits on in-flight connections and applies no
//! backpressure. Bind and accept failures are fatal: `serve` returns and
//! the embedder's process is expected to terminate. Transient accept
//! errors are deliberately not distinguished from fatal ones — no retry,
//! no backoff.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

use crate::connection::Connection;
use crate::protocol::ServeError;
use crate::router::Router;

/// Configuration collected before serving starts.
#[derive(Debug, Default)]
pub struct ServerBuilder {
    port: Option<u16>,
    router: Option<Router>,
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("router must be set")]
    MissingRouter,
    #[error("port must be set")]
    MissingPort,
}

impl ServerBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let port = self.port.ok_or(ServerBuildError::MissingPort)?;
        let router = self.router.ok_or(ServerBuildError::MissingRouter)?;
        Ok(Server { port, router })
    }
}

/// A configured server, ready to bind.
#[derive(Debug)]
pub struct Server {
    port: u16,
    router: Router,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Binds `0.0.0.0` on the configured port and serves until a fatal
    /// listener error occurs. This call never returns `Ok` — serving has
    /// no orderly shutdown path.
    pub async fn serve(self) -> Result<(), ServeError> {
        let port = self.port;
        let listener =
            TcpListener::bind(("0.0.0.0", port)).await.map_err(|source| ServeError::bind(port, source))?;
        self.serve_with(listener).await
    }

    /// Serves on an already bound listener.
    ///
    /// Useful when the embedder wants to bind port 0 and learn the local
    /// address before handing the listener over.
    pub async fn serve_with(self, listener: TcpListener) -> Result<(), ServeError> {
        if let Ok(local_addr) = listener.local_addr() {
            info!(%local_addr, "start listening");
        }

        let router = Arc::new(self.router);
        loop {
            let (stream, remote_addr) = listener.accept().await.map_err(ServeError::accept)?;
            debug!(%remote_addr, "accepted connection");

            let router = Arc::clone(&router);
            tokio::spawn(async move {
                let (reader, writer) = stream.into_split();
                let connection = Connection::new(reader, writer);
                match connection.process(&router).await {
                    Ok(()) => {
                        debug!(%remote_addr, "finished processing, connection shutdown");
                    }
                    Err(e) => {
                        warn!(%remote_addr, cause = %e, "connection aborted");
                    }
                }
            });
        }
    }
}
