//! Shared application state for axum handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use handyhub_app::access_policy::AccessPolicy;
use handyhub_app::ports::HandyModelRepository;
use handyhub_app::services::handy_model_service::HandyModelService;

/// Cookie carrying the caller's role when none is configured.
pub const DEFAULT_ROLE_COOKIE: &str = "userRole";

/// Where to find the role token and how to classify it.
#[derive(Debug, Clone)]
pub struct AccessGate {
    /// Name of the cookie holding the role token.
    pub cookie_name: String,
    /// Role → tier mapping.
    pub policy: AccessPolicy,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_ROLE_COOKIE.to_string(),
            policy: AccessPolicy::default(),
        }
    }
}

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Phone model CRUD service.
    pub handy_model_service: Arc<HandyModelService<R>>,
    /// Role cookie resolution.
    pub access: Arc<AccessGate>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            handy_model_service: Arc::clone(&self.handy_model_service),
            access: Arc::clone(&self.access),
        }
    }
}

impl<R> AppState<R>
where
    R: HandyModelRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service and an access gate.
    pub fn new(handy_model_service: HandyModelService<R>, access: AccessGate) -> Self {
        Self {
            handy_model_service: Arc::new(handy_model_service),
            access: Arc::new(access),
        }
    }
}

impl<R> FromRef<AppState<R>> for Arc<AccessGate> {
    fn from_ref(state: &AppState<R>) -> Self {
        Arc::clone(&state.access)
    }
}
