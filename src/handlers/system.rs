// Public service routes: no token required

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - service name, version and endpoint map
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Contacts API",
        "version": version,
        "description": "Authenticated address book backed by PostgreSQL",
        "endpoints": {
            "home": "/ (public)",
            "health": "/health (public)",
            "contacts": {
                "all": "GET /api/contacts/all",
                "add": "POST /api/contacts/add",
                "update": "PUT /api/contacts/update/:id",
                "delete": "DELETE /api/contacts/delete/:id"
            }
        }
    }))
}

/// GET /health - 200 when the store answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.contacts.store().health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
