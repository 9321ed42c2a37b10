//! Handlers for the health check and root endpoints.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    ComponentStatus, HealthChecks, HealthResponse, ServiceStatus, StoreCheck,
};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The store check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "3 users" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = HealthChecks {
        store: check_store(&state).await,
    };

    let response = HealthResponse {
        status: checks.overall(),
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    match response.status {
        ServiceStatus::Healthy => Ok(Json(response)),
        ServiceStatus::Degraded => Err((StatusCode::SERVICE_UNAVAILABLE, Json(response))),
    }
}

/// Checks that the user store answers.
async fn check_store(state: &AppState) -> StoreCheck {
    match state.user_service.count_users().await {
        Ok(count) => StoreCheck {
            status: ComponentStatus::Ok,
            message: format!("{} users", count),
        },
        Err(e) => StoreCheck {
            status: ComponentStatus::Error,
            message: format!("Store error: {}", e),
        },
    }
}

/// Plain-text banner confirming the server is up.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler(State(state): State<AppState>) -> String {
    format!("Server running at http://{}", state.listen_addr)
}
