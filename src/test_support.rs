//! Shared helpers for unit tests.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use crate::auth::{AuthError, Identity, MockIdentityProvider};
use crate::tools::ToolContext;
use crate::upstream::{MockUpstream, UpstreamError, UpstreamResponse};

/// Captured log output for the current thread.
///
/// Dropping the capture restores the previous subscriber. Works with the
/// default current-thread `#[tokio::test]` runtime.
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
    _guard: DefaultGuard,
}

impl LogCapture {
    pub fn contents(&self) -> String {
        let bytes = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// True when some line at `level` contains `needle`.
    pub fn has(&self, level: &str, needle: &str) -> bool {
        self.contents()
            .lines()
            .any(|line| line.contains(level) && line.contains(needle))
    }
}

#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

pub fn capture_logs() -> LogCapture {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(BufferWriter(Arc::clone(&buffer)))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    LogCapture {
        buffer,
        _guard: guard,
    }
}

/// Install the rustls crypto provider reqwest expects.
pub fn init_crypto() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

type Reply = BoxFuture<'static, Result<UpstreamResponse, UpstreamError>>;

/// Canned upstream reply for `MockUpstream::returning`.
pub fn reply(status: u16, body: &str) -> impl FnMut(&str) -> Reply + Send + 'static {
    let body = body.to_string();
    move |_| {
        let response = UpstreamResponse::new(status, body.clone());
        Box::pin(async move { Ok(response) })
    }
}

/// Canned transport failure for `MockUpstream::returning`.
pub fn fail(error: fn() -> UpstreamError) -> impl FnMut(&str) -> Reply + Send + 'static {
    move |_| Box::pin(async move { Err(error()) })
}

/// Identity provider that accepts every caller as `tester@example.com`.
pub fn signed_in() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();
    identity.expect_current_user().returning(|_| {
        Box::pin(async {
            Ok(Identity {
                id: "tester".to_string(),
                user_principal_name: Some("tester@example.com".to_string()),
                ..Default::default()
            })
        })
    });
    identity.expect_is_authenticated().return_const(true);
    identity
}

/// Identity provider that rejects every caller.
pub fn signed_out() -> MockIdentityProvider {
    let mut identity = MockIdentityProvider::new();
    identity
        .expect_current_user()
        .returning(|_| Box::pin(async { Err(AuthError::MissingCredentials) }));
    identity.expect_is_authenticated().return_const(false);
    identity
}

/// Upstream that fails the test if it is ever called.
pub fn untouched() -> MockUpstream {
    let mut upstream = MockUpstream::new();
    upstream.expect_get().times(0);
    upstream
}

/// Upstream expecting exactly one GET of `endpoint`.
pub fn serving(endpoint: &'static str, status: u16, body: &str) -> MockUpstream {
    let mut upstream = MockUpstream::new();
    upstream
        .expect_get()
        .withf(move |requested| requested == endpoint)
        .times(1)
        .returning(reply(status, body));
    upstream
}

pub fn context(upstream: MockUpstream) -> ToolContext {
    ToolContext::new(Arc::new(upstream), Arc::new(signed_in()))
}
