use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one process-wide completion-service handle, constructed at startup
    /// and read-only from every request's perspective.
    pub completion: Arc<dyn CompletionService>,
}
