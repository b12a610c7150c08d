//! End-to-end tests over real TCP sockets.
//!
//! Each test binds port 0 itself and hands the listener to the server, so
//! tests never race over port numbers.

use std::net::SocketAddr;

use pico_http::protocol::{Request, Response};
use pico_http::router::Router;
use pico_http::server::Server;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn spawn_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = Server::builder().port(addr.port()).router(router).build().unwrap();
    tokio::spawn(async move {
        let _ = server.serve_with(listener).await;
    });
    addr
}

/// Sends raw bytes and collects the full response until the server closes
/// the connection.
async fn round_trip(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();
    let mut received = Vec::new();
    stream.read_to_end(&mut received).await.unwrap();
    received
}

fn demo_router() -> Router {
    Router::builder()
        .route("/hello", |_req: &Request| {
            Response::with_status("HTTP/1.1 200 OK").with_body("hi")
        })
        .route("^/user/[0-9]+$", |_req: &Request| {
            Response::with_status("HTTP/1.1 200 OK").with_body("a user")
        })
        .route("/echo", |req: &Request| {
            let content_type = req.header("Content-Type").unwrap_or("none").to_owned();
            Response::with_status("HTTP/1.1 200 OK")
                .with_header("Echoed-Content-Type", content_type)
                .with_body(req.body().clone())
        })
        .build()
}

#[tokio::test]
async fn bare_request_line_round_trip() {
    let addr = spawn_server(demo_router()).await;
    // no version token, no headers, no body
    let received = round_trip(addr, b"GET /hello").await;
    assert_eq!(received, b"HTTP/1.1 200 OK\r\n\r\nhi");
}

#[tokio::test]
async fn regex_route_matches_and_falls_through() {
    let addr = spawn_server(demo_router()).await;

    let hit = round_trip(addr, b"GET /user/42 HTTP/1.1\r\n\r\n").await;
    assert_eq!(hit, b"HTTP/1.1 200 OK\r\n\r\na user");

    let miss = round_trip(addr, b"GET /user/abc HTTP/1.1\r\n\r\n").await;
    assert_eq!(miss, b"HTTP/1.1 404 Not Found\r\n\r\n404 Not Found");
}

#[tokio::test]
async fn headers_and_body_reach_the_handler() {
    let addr = spawn_server(demo_router()).await;
    let received =
        round_trip(addr, b"POST /echo HTTP/1.1\r\nContent-Type: text/plain\r\n\r\nhello").await;
    assert_eq!(
        received,
        b"HTTP/1.1 200 OK\r\nEchoed-Content-Type: text/plain\r\n\r\nhello"
    );
}

#[tokio::test]
async fn aborted_connections_do_not_disturb_the_listener() {
    let addr = spawn_server(demo_router()).await;

    // connects and closes without sending a byte
    drop(TcpStream::connect(addr).await.unwrap());
    // connects and stays silent; its task blocks on the read, nothing else
    let silent = TcpStream::connect(addr).await.unwrap();

    let received = round_trip(addr, b"GET /hello\r\n\r\n").await;
    assert_eq!(received, b"HTTP/1.1 200 OK\r\n\r\nhi");

    drop(silent);
}

#[tokio::test]
async fn each_connection_serves_exactly_one_request() {
    let addr = spawn_server(demo_router()).await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET /hello\r\n\r\n").await.unwrap();

    let mut received = Vec::new();
    // read_to_end only returns once the server has closed the connection
    stream.read_to_end(&mut received).await.unwrap();
    assert_eq!(received, b"HTTP/1.1 200 OK\r\n\r\nhi");
}
