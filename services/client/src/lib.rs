pub mod actions;
pub mod adapters;
pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod router;
pub mod session;
pub mod stores;

// Re-export the pieces an embedding shell needs to get going.
pub use context::AppContext;
pub use error::ClientError;
pub use gateway::{Gateway, GatewayError, SessionEvent};
pub use router::{resolve, Navigation, Route};
pub use session::SessionController;
