//! Integration tests for the bounded page fetch against a local server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;

use pagetitle_common::{FetchError, FetchOptions, fetch_page};

/// Serve a single canned HTTP response and return the URL to request.
fn serve_once(status: &str, content_type: &str, body: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );

    let _server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        // Drain the request head.
        while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
            line.clear();
        }
        stream.write_all(head.as_bytes()).unwrap();
        // The client may hang up early once it has enough bytes.
        let _ = stream.write_all(body);
    });

    format!("http://{addr}/page")
}

/// Send the response head and the start of the body, then stall.
fn serve_stalled_body(stall: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let _server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap_or(0) > 0 && line != "\r\n" {
            line.clear();
        }
        let _ = stream.write_all(
            b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: 1000\r\n\r\n<title>x",
        );
        let _ = stream.flush();
        thread::sleep(stall);
    });

    format!("http://{addr}/slow")
}

fn options(max_bytes: usize) -> FetchOptions {
    FetchOptions {
        timeout: Duration::from_secs(5),
        max_bytes,
    }
}

#[test]
fn test_fetches_html() {
    let url = serve_once(
        "200 OK",
        "text/html; charset=utf-8",
        b"<html><head><title>Local</title></head></html>",
    );
    let page = fetch_page(&url, &options(4096)).unwrap();
    assert_eq!(page.final_url, url);
    assert_eq!(page.content_type, "text/html; charset=utf-8");
    assert_eq!(page.body, "<html><head><title>Local</title></head></html>");
}

#[test]
fn test_body_is_capped_and_decoded_lossily() {
    // The cap lands in the middle of the two-byte "é".
    let url = serve_once("200 OK", "text/html", b"<title>caf\xC3\xA9</title>");
    let page = fetch_page(&url, &options(11)).unwrap();
    assert_eq!(page.body, "<title>caf");
}

#[test]
fn test_rejects_non_html() {
    let url = serve_once("200 OK", "image/png", b"\x89PNG");
    match fetch_page(&url, &options(4096)) {
        Err(FetchError::NotHtml(content_type)) => assert_eq!(content_type, "image/png"),
        other => panic!("Expected NotHtml, got {other:?}"),
    }
}

#[test]
fn test_reports_http_status() {
    let url = serve_once("404 Not Found", "text/html", b"<title>missing</title>");
    match fetch_page(&url, &options(4096)) {
        Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 404),
        other => panic!("Expected Status, got {other:?}"),
    }
}

#[test]
fn test_connection_refused() {
    // Bind and drop to get a port nobody listens on.
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let url = format!("http://{addr}/");
    assert!(matches!(
        fetch_page(&url, &options(4096)),
        Err(FetchError::Connect(_))
    ));
}

#[test]
fn test_stalled_body_is_a_timeout() {
    let url = serve_stalled_body(Duration::from_secs(4));
    let options = FetchOptions {
        timeout: Duration::from_secs(1),
        max_bytes: 4096,
    };
    match fetch_page(&url, &options) {
        Err(FetchError::Timeout) => {}
        other => panic!("Expected Timeout, got {other:?}"),
    }
}
