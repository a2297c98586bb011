use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::header,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::errors::ApiError;
use crate::core::metrics;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::{HealthResponse, RootResponse};

pub(crate) async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    let api = state.settings().api();
    Json(RootResponse { message: api.project_name.clone(), version: api.version.clone() })
}

/// Liveness plus a `SELECT 1` store probe. 503 while the store is unreachable.
pub(crate) async fn healthz(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let mut components = BTreeMap::new();

    let healthy = match repositories::health::ping(state.db()).await {
        Ok(()) => {
            components.insert("database", "healthy".to_string());
            true
        }
        Err(err) => {
            tracing::warn!(error = %err, "Store health probe failed");
            components.insert("database", format!("unhealthy: {err}"));
            false
        }
    };

    let (status, label) = if healthy {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (status, Json(HealthResponse { service: "quiz-platform-api", status: label, components }))
}

pub(crate) async fn metrics() -> impl IntoResponse {
    match metrics::render() {
        Some(body) => ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound("Resource not found".to_string())
}

/// Re-renders the router's bare 405 in the error envelope. `Allow` is kept.
pub(crate) async fn method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut enveloped = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}
