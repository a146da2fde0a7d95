use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and loaded assets.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pathwise",
        "careers": state.catalog.len(),
        "matcher": state.matcher.backend(),
        "sessions": state.sessions.len().await,
    }))
}
