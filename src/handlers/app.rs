use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": "Art Commerce Backend Running" }))
}

/// Diagnostic endpoint reporting database reachability and visible collections.
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => {
            let mut collections = state.db.collection_names().await.unwrap_or_default();
            collections.truncate(10);
            Json(json!({
                "backend": "running",
                "database": "connected",
                "database_name": state.config.mongodb.database,
                "collections": collections,
            }))
        }
        Err(e) => Json(json!({
            "backend": "running",
            "database": "unavailable",
            "database_name": state.config.mongodb.database,
            "error": e.to_string(),
        })),
    }
}
