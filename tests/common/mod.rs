#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use britannica_dict::{ClientConfig, Dictionary};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_APPLE: &str = include_str!("../fixtures/search_apple.html");
pub const SEARCH_EMPTY: &str = include_str!("../fixtures/search_empty.html");
pub const WOD_SERENDIPITY: &str = include_str!("../fixtures/wod_serendipity.html");
pub const WOD_NO_HEADWORD: &str = include_str!("../fixtures/wod_no_headword.html");
pub const WOD_NO_IMAGE: &str = include_str!("../fixtures/wod_no_image.html");

pub const WOD_PATH: &str = "/dictionary/eb/word-of-the-day";

/// Client whose origin is the stub server.
pub fn dictionary_for(server: &MockServer) -> Dictionary {
    Dictionary::new(ClientConfig::default().with_origin(server.uri())).unwrap()
}

pub async fn serve_html(server: &MockServer, at: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/html"))
        .mount(server)
        .await;
}

pub async fn serve_status(server: &MockServer, at: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// In-memory sink for the crate's diagnostic lines.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap();
        String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route warnings from this crate into a buffer for the current thread.
///
/// Only meaningful with the current-thread runtime `#[tokio::test]` uses by
/// default, since the subscriber is thread-local.
pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("britannica_dict=warn"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}
