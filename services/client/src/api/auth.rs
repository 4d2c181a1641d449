//! services/client/src/api/auth.rs
//!
//! Authentication endpoints.

use crate::gateway::{Gateway, GatewayError};
use learnhub_core::domain::{LoginForm, LoginResponse, RegisterForm, User};
use serde_json::Value;

/// POST /api/v1/auth/login
///
/// The backend's OAuth2 password flow requires url-encoded form fields, not
/// JSON.
pub async fn login(gateway: &Gateway, form: &LoginForm) -> Result<LoginResponse, GatewayError> {
    gateway.post_form("/api/v1/auth/login", form).await
}

/// POST /api/v1/auth/register
pub async fn register(gateway: &Gateway, form: &RegisterForm) -> Result<User, GatewayError> {
    gateway.post("/api/v1/auth/register", form).await
}

/// GET /api/v1/auth/me
pub async fn current_user(gateway: &Gateway) -> Result<User, GatewayError> {
    gateway.get("/api/v1/auth/me").await
}

/// POST /api/v1/auth/logout. Server-side invalidation, fire and forget.
pub async fn logout(gateway: &Gateway) -> Result<Value, GatewayError> {
    gateway.post_empty("/api/v1/auth/logout").await
}
