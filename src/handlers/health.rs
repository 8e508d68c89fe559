use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::router::SetupState;
use crate::setup::is_setup_complete;

/// GET /healthz
pub async fn health(State(state): State<SetupState>) -> Json<Value> {
    let complete = is_setup_complete(state.service.database_path()).await;
    Json(json!({ "status": "ok", "setup_complete": complete }))
}
