use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Static liveness message pointing callers at the main endpoint.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Resumatch API is running! Send POST requests to /analyze"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": "0.1.0",
        "service": "resumatch-api"
    }))
}
