//! services/client/src/stores/auth.rs
//!
//! Holds the client's belief about the current session. The token is the
//! sole authority for "authenticated"; the user profile is loaded lazily and
//! may lag behind.

use crate::api;
use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{LoginForm, RegisterForm, User};
use learnhub_core::ports::CredentialStore;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

#[derive(Default)]
struct AuthState {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
}

/// Session state machine: anonymous → authenticating → token-only →
/// token + profile, and back to anonymous on logout or verification failure.
#[derive(Clone)]
pub struct AuthStore {
    gateway: Arc<Gateway>,
    credentials: Arc<dyn CredentialStore>,
    state: Arc<RwLock<AuthState>>,
}

impl AuthStore {
    /// Creates the store, seeding the in-memory token from durable storage.
    pub fn new(gateway: Arc<Gateway>, credentials: Arc<dyn CredentialStore>) -> Self {
        let token = match credentials.load() {
            Ok(token) => token,
            Err(e) => {
                warn!("failed to read persisted credential: {e}");
                None
            }
        };
        Self {
            gateway,
            credentials,
            state: Arc::new(RwLock::new(AuthState {
                token,
                ..AuthState::default()
            })),
        }
    }

    /// Start-up reconciliation: if a persisted token exists, verify it once
    /// against the backend by loading the profile.
    pub async fn initialize(&self) {
        if self.read().token.is_some() {
            self.fetch_user_info().await;
        }
    }

    /// Logs in and immediately loads the profile. A failed login leaves no
    /// partial session behind.
    pub async fn login(&self, form: &LoginForm) -> Result<(), GatewayError> {
        self.write().loading = true;
        let result = api::auth::login(&self.gateway, form).await;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.write().loading = false;
                return Err(e);
            }
        };

        // Write-through: memory and durable storage move together.
        self.write().token = Some(response.access_token.clone());
        if let Err(e) = self.credentials.save(&response.access_token) {
            warn!("failed to persist credential: {e}");
        }

        self.fetch_user_info().await;
        self.write().loading = false;
        Ok(())
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<User, GatewayError> {
        self.write().loading = true;
        let result = api::auth::register(&self.gateway, form).await;
        self.write().loading = false;
        result
    }

    /// Loads the profile. A failure here means the token is no longer valid,
    /// so the session is torn down instead of surfacing the error.
    pub async fn fetch_user_info(&self) {
        match api::auth::current_user(&self.gateway).await {
            Ok(user) => self.write().user = Some(user),
            Err(e) => {
                warn!("profile fetch failed, treating session as invalid: {e}");
                self.logout().await;
            }
        }
    }

    /// Clears the local session first, then best-effort notifies the backend.
    /// Logout always succeeds locally regardless of network state.
    pub async fn logout(&self) {
        self.invalidate();
        if let Err(e) = api::auth::logout(&self.gateway).await {
            debug!("logout notification failed: {e}");
        }
    }

    /// Local-only session teardown, without the backend notification. Used by
    /// the session controller when the gateway reports a 401.
    pub fn invalidate(&self) {
        {
            let mut state = self.write();
            state.token = None;
            state.user = None;
        }
        if let Err(e) = self.credentials.clear() {
            warn!("failed to clear persisted credential: {e}");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.read().user.as_ref().is_some_and(|u| u.role == "admin")
    }

    pub fn is_teacher(&self) -> bool {
        self.read()
            .user
            .as_ref()
            .is_some_and(|u| u.role == "teacher")
    }

    fn read(&self) -> RwLockReadGuard<'_, AuthState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
