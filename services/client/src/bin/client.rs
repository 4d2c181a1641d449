//! services/client/src/bin/client.rs
//!
//! Headless wiring of the client: builds the context, spawns the session
//! controller, reconciles any persisted session, and (when credentials are
//! supplied via the environment) logs in and lists the first page of
//! documents as a connectivity check.

use client_lib::adapters::{FileCredentialStore, MemoryNavigator, TracingNotifier};
use client_lib::config::Config;
use client_lib::stores::document::FetchOverrides;
use client_lib::{AppContext, ClientError};
use learnhub_core::domain::LoginForm;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Backend: {}", config.api_base_url);

    // --- 2. Build the Application Context ---
    let credentials = Arc::new(FileCredentialStore::new(config.token_path.clone()));
    let notifier = Arc::new(TracingNotifier);
    let navigator = Arc::new(MemoryNavigator::default());

    let (context, controller) = AppContext::new(config, credentials, notifier, navigator)?;
    tokio::spawn(controller.run());

    // --- 3. Reconcile Any Persisted Session ---
    context.auth.initialize().await;
    if let Some(user) = context.auth.user() {
        info!("Resumed session for {}", user.username);
    }

    // --- 4. Optional Smoke Login ---
    let username = std::env::var("LEARNHUB_USERNAME").ok();
    let password = std::env::var("LEARNHUB_PASSWORD").ok();
    if let (Some(username), Some(password)) = (username, password) {
        if !context.auth.is_authenticated() {
            context
                .auth
                .login(&LoginForm { username, password })
                .await?;
            info!("Logged in.");
        }
    }

    if context.auth.is_authenticated() {
        context
            .documents
            .fetch_documents(FetchOverrides::default())
            .await?;
        info!(
            "{} documents on page {} ({} total)",
            context.documents.documents().len(),
            context.documents.page(),
            context.documents.total()
        );
    } else {
        info!("No session; set LEARNHUB_USERNAME/LEARNHUB_PASSWORD to log in.");
    }

    Ok(())
}
