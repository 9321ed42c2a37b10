//! Health check body for `GET /health`.

use serde::Serialize;

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    /// The in-memory user store.
    pub store: StoreCheck,
}

/// Store probe result; `message` carries the user count or the failure.
#[derive(Debug, Serialize)]
pub struct StoreCheck {
    pub status: ComponentStatus,
    pub message: String,
}

impl HealthChecks {
    /// [`ServiceStatus::Healthy`] only when every component is ok.
    pub fn overall(&self) -> ServiceStatus {
        match self.store.status {
            ComponentStatus::Ok => ServiceStatus::Healthy,
            ComponentStatus::Error => ServiceStatus::Degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statuses_serialize_lowercase() {
        let checks = HealthChecks {
            store: StoreCheck {
                status: ComponentStatus::Error,
                message: "Store error: boom".to_string(),
            },
        };

        let response = HealthResponse {
            status: checks.overall(),
            version: "0.1.0",
            checks,
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "degraded",
                "version": "0.1.0",
                "checks": { "store": { "status": "error", "message": "Store error: boom" } }
            })
        );
    }
}
