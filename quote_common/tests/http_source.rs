//! End-to-end checks of `HttpQuoteSource` and the widget against a local HTTP server.
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use quote_common::{
    HttpQuoteSource, Outcome, Page, QuoteError, QuoteSource, SourceConfig, TargetId,
    init_quote_widget,
};

const FALLBACK_CONTENT: &str = "\"A room without books is like a body without a soul.\"";
const FALLBACK_AUTHOR: &str = "- Marcus Tullius Cicero";

/// Serves `status` + `body` to every connection and counts requests.
fn serve(status: &'static str, body: &'static str) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            read_request(&mut stream);
            counter.fetch_add(1, Ordering::SeqCst);
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });
    (addr, hits)
}

fn read_request(stream: &mut TcpStream) {
    let mut buf = [0u8; 1024];
    let mut seen = Vec::new();
    while !seen.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => return,
            Ok(n) => seen.extend_from_slice(&buf[..n]),
        }
    }
}

fn source_for(addr: SocketAddr) -> HttpQuoteSource {
    let config = SourceConfig::default()
        .with_endpoint(&format!("http://{}/quotes/random", addr))
        .with_timeout(Duration::from_millis(500))
        .without_proxy();
    HttpQuoteSource::new(config).unwrap()
}

fn shown(page: &Page) -> (String, String) {
    (
        page.text_of(TargetId::Content).unwrap(),
        page.text_of(TargetId::Author).unwrap(),
    )
}

#[test]
fn remote_quote_is_displayed() {
    let (addr, hits) = serve(
        "200 OK",
        r#"{"id":7,"quote":"Life is short.","author":"Seneca"}"#,
    );
    let page = Page::full();

    assert_eq!(init_quote_widget(&page, source_for(addr)), Some(Outcome::Remote));
    assert_eq!(
        shown(&page),
        (String::from("\" Life is short.\""), String::from("- Seneca"))
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn invalid_json_falls_back() {
    let (addr, hits) = serve("200 OK", "<html>not json</html>");
    let source = source_for(addr);
    assert!(matches!(source.fetch(), Err(QuoteError::SerdeJson(_))));

    let page = Page::full();
    assert_eq!(init_quote_widget(&page, source), Some(Outcome::Fallback));
    assert_eq!(
        shown(&page),
        (String::from(FALLBACK_CONTENT), String::from(FALLBACK_AUTHOR))
    );
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn error_status_falls_back_without_retry() {
    let (addr, hits) = serve("500 Internal Server Error", r#"{"message":"boom"}"#);
    let page = Page::full();

    assert_eq!(init_quote_widget(&page, source_for(addr)), Some(Outcome::Fallback));
    assert_eq!(shown(&page).1, FALLBACK_AUTHOR);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn status_is_reported() {
    let (addr, _) = serve("404 Not Found", "{}");
    assert!(matches!(source_for(addr).fetch(), Err(QuoteError::Status(404))));
}

#[test]
fn connection_refused_falls_back() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let source = source_for(addr);
    assert!(matches!(source.fetch(), Err(QuoteError::Http(_))));

    let page = Page::full();
    assert_eq!(init_quote_widget(&page, source), Some(Outcome::Fallback));
    assert_eq!(
        shown(&page),
        (String::from(FALLBACK_CONTENT), String::from(FALLBACK_AUTHOR))
    );
}

#[test]
fn silent_server_times_out_into_fallback() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            thread::sleep(Duration::from_secs(3));
            drop(stream);
        }
    });

    let page = Page::full();
    assert_eq!(init_quote_widget(&page, source_for(addr)), Some(Outcome::Fallback));
    assert_eq!(shown(&page).0, FALLBACK_CONTENT);
}

#[test]
fn page_without_targets_never_connects() {
    let (addr, hits) = serve("200 OK", r#"{"quote":"q","author":"a"}"#);
    let page = Page::with_targets(&[TargetId::Author]);

    assert_eq!(init_quote_widget(&page, source_for(addr)), None);
    assert_eq!(page.text_of(TargetId::Author).unwrap(), "");
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}
