//! Shared scaffolding for integration tests: spins up loopback backends and
//! wires a client context against them.

use axum::Router;
use client_lib::adapters::{MemoryCredentialStore, MemoryNavigator, MemoryNotifier};
use client_lib::config::Config;
use client_lib::gateway::{Gateway, SessionEvent};
use client_lib::{AppContext, SessionController};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Serves the router on an ephemeral loopback port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

pub fn test_config(base_url: &str) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        request_timeout: Duration::from_secs(5),
        log_level: tracing::Level::INFO,
        token_path: PathBuf::from("/dev/null"),
    }
}

pub struct Harness {
    pub context: AppContext,
    pub controller: Option<SessionController>,
    pub credentials: Arc<MemoryCredentialStore>,
    pub notifier: Arc<MemoryNotifier>,
    pub navigator: Arc<MemoryNavigator>,
}

/// Builds a full context against the given backend, with in-memory adapters
/// everywhere.
pub fn harness(base_url: &str, credentials: Arc<MemoryCredentialStore>) -> Harness {
    let notifier = Arc::new(MemoryNotifier::default());
    let navigator = Arc::new(MemoryNavigator::default());
    let (context, controller) = AppContext::new(
        test_config(base_url),
        credentials.clone(),
        notifier.clone(),
        navigator.clone(),
    )
    .expect("context");
    Harness {
        context,
        controller: Some(controller),
        credentials,
        notifier,
        navigator,
    }
}

/// A bare gateway plus its event receiver, for tests below the store layer.
pub fn bare_gateway(
    base_url: &str,
    credentials: Arc<MemoryCredentialStore>,
    notifier: Arc<MemoryNotifier>,
) -> (Arc<Gateway>, mpsc::UnboundedReceiver<SessionEvent>) {
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let gateway = Gateway::new(&test_config(base_url), credentials, notifier, events_tx)
        .expect("gateway");
    (Arc::new(gateway), events_rx)
}
