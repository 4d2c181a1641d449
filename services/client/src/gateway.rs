//! services/client/src/gateway.rs
//!
//! The single chokepoint through which every backend call passes. It attaches
//! the bearer credential, strips the transport envelope, maps failures to a
//! user notification, and reports authorization failures as session events.

use crate::config::Config;
use learnhub_core::ports::{CredentialStore, Notifier};
use reqwest::{multipart, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::warn;

/// Fallback shown when the backend gives no usable error message.
const REQUEST_FAILED: &str = "Request failed";

/// Events the gateway emits as a side effect of a call. Navigation and
/// credential clearing are the session controller's job, not the gateway's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected a call with 401. The current session is invalid.
    Unauthorized,
}

/// Errors a gateway call can resolve to. Nothing here is fatal to the
/// process; callers may still branch on the rejection.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// The request never produced a usable response (connect failure,
    /// timeout, undecodable body).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The base URL and path did not combine into a valid request URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// One configured HTTP client wrapping all network calls.
pub struct Gateway {
    http: reqwest::Client,
    base_url: Url,
    credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    events: mpsc::UnboundedSender<SessionEvent>,
}

impl Gateway {
    /// Creates the gateway from configuration. The per-call timeout is fixed
    /// here for the lifetime of the client.
    pub fn new(
        config: &Config,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
            notifier,
            events,
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path)?;
        self.execute(self.http.get(url)).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.http.get(url).query(query)).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.http.post(url).json(body)).await
    }

    /// POST with no body, for fire-and-forget endpoints such as logout.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path)?;
        self.execute(self.http.post(url)).await
    }

    /// POST url-encoded form fields. The login endpoint requires this
    /// encoding instead of JSON.
    pub async fn post_form<T, F>(&self, path: &str, form: &F) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        F: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.http.post(url).form(form)).await
    }

    /// POST multipart form data, used by the document upload endpoint.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> Result<T, GatewayError> {
        let url = self.url(path)?;
        self.execute(self.http.post(url).multipart(form)).await
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.execute(self.http.put(url).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let url = self.url(path)?;
        self.execute(self.http.delete(url)).await
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::InvalidUrl(e.to_string()))
    }

    /// Sends one request and maps the outcome per the global policy: bearer
    /// credential attached whenever the durable store holds one, success
    /// bodies decoded and returned bare, failures surfaced as a toast plus a
    /// rejected call, and a 401 reported as a session event.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let builder = match self.credentials.load() {
            Ok(Some(token)) => builder.bearer_auth(token),
            Ok(None) => builder,
            Err(e) => {
                warn!("credential store unreadable, sending without credential: {e}");
                builder
            }
        };

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                self.notifier.error(REQUEST_FAILED);
                return Err(GatewayError::Transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            // An undecodable success body is still a failed call and gets
            // the same notification as any other transport failure.
            return match response.json::<T>().await {
                Ok(body) => Ok(body),
                Err(e) => {
                    self.notifier.error(REQUEST_FAILED);
                    Err(GatewayError::Transport(e))
                }
            };
        }

        let message = extract_message(response.json::<serde_json::Value>().await.ok());
        self.notifier.error(&message);
        if status == StatusCode::UNAUTHORIZED {
            // Receiver may already be gone during shutdown; nothing to do then.
            let _ = self.events.send(SessionEvent::Unauthorized);
        }
        Err(GatewayError::Api { status, message })
    }
}

/// Prefers the backend's structured `detail` field, then `message`, then the
/// fixed fallback string.
fn extract_message(body: Option<serde_json::Value>) -> String {
    body.as_ref()
        .and_then(|v| {
            v.get("detail")
                .and_then(serde_json::Value::as_str)
                .or_else(|| v.get("message").and_then(serde_json::Value::as_str))
        })
        .map(str::to_owned)
        .unwrap_or_else(|| REQUEST_FAILED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_detail_over_message() {
        let body = serde_json::json!({ "detail": "no such document", "message": "other" });
        assert_eq!(extract_message(Some(body)), "no such document");
    }

    #[test]
    fn message_falls_back_to_message_field() {
        let body = serde_json::json!({ "message": "server exploded" });
        assert_eq!(extract_message(Some(body)), "server exploded");
    }

    #[test]
    fn message_falls_back_to_fixed_string() {
        assert_eq!(extract_message(None), REQUEST_FAILED);
        assert_eq!(
            extract_message(Some(serde_json::json!({ "detail": 42 }))),
            REQUEST_FAILED
        );
    }
}
