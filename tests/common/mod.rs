//! Shared fixtures for integration tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::Request;
use gateway_route::routing::{Condition, Exchange, FilterRef, GatewayFilter};

/// A filter that only carries a name.
#[derive(Debug)]
pub struct NamedFilter(pub &'static str);

impl GatewayFilter for NamedFilter {
    fn name(&self) -> &str {
        self.0
    }
}

#[allow(dead_code)]
pub fn filter(name: &'static str) -> FilterRef {
    Arc::new(NamedFilter(name))
}

/// Condition matching a path prefix.
#[allow(dead_code)]
pub fn path_prefix(prefix: &'static str) -> Condition {
    Condition::from_fn(format!("Path={}**", prefix), move |req: &Exchange| {
        req.uri().path().starts_with(prefix)
    })
}

/// Build a bare request for a URI.
#[allow(dead_code)]
pub fn request(uri: &str) -> Exchange {
    Request::builder().uri(uri).body(Body::default()).unwrap()
}

/// Writer that appends formatted log lines to a shared buffer.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a debug-level subscriber installed, returning its output
/// and everything it logged.
#[allow(dead_code)]
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}
