//! One accepted connection's lifecycle.
//!
//! A [`Connection`] performs exactly one request/response cycle: a single
//! bounded read, parse, dispatch, serialize, shutdown. There is no
//! keep-alive; after the response bytes are written the write half is shut
//! down and both halves are released when the connection is dropped, on
//! every exit path.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::codec;
use crate::protocol::ConnectionError;
use crate::router::Router;

/// Upper bound on the bytes of a request, read in one call.
///
/// A request larger than this — or one the peer delivers in several
/// segments — is truncated to whatever the single read returns; the
/// parser only ever sees that first chunk. This is a documented design
/// boundary of the wire format, not incidental behavior.
pub const MAX_REQUEST_SIZE: usize = 512;

/// A single accepted connection, split into its reader and writer halves.
#[derive(Debug)]
pub struct Connection<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Connection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Runs the one request/response cycle against `router`.
    ///
    /// Errors here are local to this connection: the caller logs them and
    /// drops the connection, the listener and other connections are
    /// unaffected. A peer that connects and closes without sending bytes
    /// yields [`ConnectionError::Closed`].
    pub async fn process(mut self, router: &Router) -> Result<(), ConnectionError> {
        let mut buf = [0u8; MAX_REQUEST_SIZE];
        let n = self.reader.read(&mut buf).await.map_err(ConnectionError::read)?;
        if n == 0 {
            return Err(ConnectionError::Closed);
        }

        let raw = &buf[..n];
        debug!(bytes = n, raw = %String::from_utf8_lossy(raw), "received request");

        let request = codec::parse(raw);
        let response = router.handle(&request);

        let mut dst = BytesMut::new();
        codec::encode(&response, &mut dst);
        self.writer.write_all(&dst).await.map_err(ConnectionError::write)?;
        self.writer.shutdown().await.map_err(ConnectionError::write)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{duplex, split, AsyncReadExt, AsyncWriteExt};

    use super::*;
    use crate::protocol::{Request, Response};
    use crate::router::Router;

    fn router() -> Router {
        Router::builder()
            .route("/hello", |_req: &Request| {
                Response::with_status("HTTP/1.1 200 OK").with_body("hi")
            })
            .route("/body-len", |req: &Request| {
                Response::with_status("HTTP/1.1 200 OK").with_body(req.body().len().to_string())
            })
            .build()
    }

    #[tokio::test]
    async fn one_full_cycle() {
        let (mut client, server) = duplex(4 * 1024);
        client.write_all(b"GET /hello HTTP/1.1\r\n\r\n").await.unwrap();

        let (reader, writer) = split(server);
        Connection::new(reader, writer).process(&router()).await.unwrap();

        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"HTTP/1.1 200 OK\r\n\r\nhi");
    }

    #[tokio::test]
    async fn unmatched_request_gets_404() {
        let (mut client, server) = duplex(4 * 1024);
        client.write_all(b"GET /nowhere HTTP/1.1\r\n\r\n").await.unwrap();

        let (reader, writer) = split(server);
        Connection::new(reader, writer).process(&router()).await.unwrap();

        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"HTTP/1.1 404 Not Found\r\n\r\n404 Not Found");
    }

    #[tokio::test]
    async fn oversized_request_is_truncated_to_the_first_chunk() {
        let (mut client, server) = duplex(4 * 1024);
        let mut raw = b"GET /body-len HTTP/1.1\r\n\r\n".to_vec();
        let head_len = raw.len();
        raw.resize(MAX_REQUEST_SIZE + 300, b'x');
        client.write_all(&raw).await.unwrap();
        client.shutdown().await.unwrap();

        let (reader, writer) = split(server);
        Connection::new(reader, writer).process(&router()).await.unwrap();

        // the handler sees only the body bytes that fit into the one read
        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        let expected_body_len = MAX_REQUEST_SIZE - head_len;
        let expected = format!("HTTP/1.1 200 OK\r\n\r\n{expected_body_len}");
        assert_eq!(received, expected.as_bytes());
    }

    #[tokio::test]
    async fn immediate_close_is_a_connection_error() {
        let (client, server) = duplex(64);
        drop(client);

        let (reader, writer) = split(server);
        let result = Connection::new(reader, writer).process(&router()).await;
        assert!(matches!(result, Err(ConnectionError::Closed)));
    }

    #[tokio::test]
    async fn garbage_bytes_still_get_a_response() {
        let (mut client, server) = duplex(4 * 1024);
        client.write_all(b"\x00\xff\x00\xff").await.unwrap();

        let (reader, writer) = split(server);
        Connection::new(reader, writer).process(&router()).await.unwrap();

        let mut received = Vec::new();
        client.read_to_end(&mut received).await.unwrap();
        assert_eq!(received, b"HTTP/1.1 404 Not Found\r\n\r\n404 Not Found");
    }
}
