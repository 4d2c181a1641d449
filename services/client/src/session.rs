//! services/client/src/session.rs
//!
//! Owns the consequences of session invalidation. The gateway only reports
//! a 401 as an event; this controller decides to tear down the session and
//! where to send the user.

use crate::gateway::SessionEvent;
use crate::router::Route;
use crate::stores::AuthStore;
use learnhub_core::ports::Navigator;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::info;

pub struct SessionController {
    auth: AuthStore,
    navigator: Arc<dyn Navigator>,
    events: mpsc::UnboundedReceiver<SessionEvent>,
}

impl SessionController {
    pub fn new(
        auth: AuthStore,
        navigator: Arc<dyn Navigator>,
        events: mpsc::UnboundedReceiver<SessionEvent>,
    ) -> Self {
        Self {
            auth,
            navigator,
            events,
        }
    }

    /// Drains gateway events until the channel closes (i.e. the gateway is
    /// dropped). Intended to be spawned once at startup.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            self.handle(event);
        }
    }

    fn handle(&self, event: SessionEvent) {
        match event {
            SessionEvent::Unauthorized => {
                // Already on the login view: the user is mid-login, leave
                // them alone.
                if self.navigator.current_path() == Route::Login.path() {
                    return;
                }
                info!("session invalidated by backend, redirecting to login");
                self.auth.invalidate();
                self.navigator.navigate(&Route::Login.path());
            }
        }
    }
}
