//! services/client/src/context.rs
//!
//! The application context: every store and helper, built once at process
//! start and handed to the presentation layer explicitly. No ambient
//! singletons.

use crate::actions::{DocumentActions, QaActions};
use crate::config::Config;
use crate::error::ClientError;
use crate::gateway::Gateway;
use crate::router::{self, Navigation, Route};
use crate::session::SessionController;
use crate::stores::{AuthStore, DocumentStore, ExamStore, QaStore};
use learnhub_core::ports::{CredentialStore, Navigator, Notifier};
use std::sync::Arc;
use tokio::sync::mpsc;

pub struct AppContext {
    pub config: Arc<Config>,
    pub gateway: Arc<Gateway>,
    pub auth: AuthStore,
    pub documents: DocumentStore,
    pub qa: QaStore,
    pub exams: ExamStore,
    pub document_actions: DocumentActions,
    pub qa_actions: QaActions,
}

impl AppContext {
    /// Wires the gateway, the four domain stores and the action helpers.
    /// Also returns the session controller, which the caller is expected to
    /// spawn so 401 events get consumed.
    pub fn new(
        config: Config,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<(Self, SessionController), ClientError> {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let gateway = Arc::new(Gateway::new(
            &config,
            credentials.clone(),
            notifier.clone(),
            events_tx,
        )?);

        let auth = AuthStore::new(gateway.clone(), credentials);
        let documents = DocumentStore::new(gateway.clone());
        let qa = QaStore::new(gateway.clone());
        let exams = ExamStore::new(gateway.clone());

        let document_actions = DocumentActions::new(documents.clone(), notifier.clone());
        let qa_actions = QaActions::new(qa.clone(), notifier);

        let controller = SessionController::new(auth.clone(), navigator, events_rx);

        let context = Self {
            config: Arc::new(config),
            gateway,
            auth,
            documents,
            qa,
            exams,
            document_actions,
            qa_actions,
        };
        Ok((context, controller))
    }

    /// Runs the auth guard for a destination against the current session.
    pub fn resolve_navigation(&self, destination: Route) -> Navigation {
        router::resolve(destination, self.auth.is_authenticated())
    }
}
