use std::io;

use thiserror::Error;

/// Fatal listener errors.
///
/// Both variants end the serve loop: binding and accepting are not retried
/// and there is no backoff. Transient accept errors are deliberately not
/// distinguished from fatal ones.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind port {port}: {source}")]
    Bind { port: u16, source: io::Error },

    #[error("failed to accept connection: {source}")]
    Accept { source: io::Error },
}

impl ServeError {
    pub fn bind(port: u16, source: io::Error) -> Self {
        Self::Bind { port, source }
    }

    pub fn accept(source: io::Error) -> Self {
        Self::Accept { source }
    }
}

/// Errors local to a single connection.
///
/// These never propagate past the task owning the connection: the socket
/// is dropped and the listener and the other connections are unaffected.
/// Malformed request *content* is never an error — the parser is total.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("connection closed before sending any data")]
    Closed,

    #[error("read error: {source}")]
    Read { source: io::Error },

    #[error("write error: {source}")]
    Write { source: io::Error },
}

impl ConnectionError {
    pub fn read(source: io::Error) -> Self {
        Self::Read { source }
    }

    pub fn write(source: io::Error) -> Self {
        Self::Write { source }
    }
}
