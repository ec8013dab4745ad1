use crate::models::SERVICE_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Represents the operational status of the service. Used as the response
/// format for the health check endpoint.
///
/// ## Fields
/// - `status`: String indicating service availability ("healthy")
/// - `timestamp`: ISO 8601 formatted timestamp of the status check
/// - `environment`: Deployment environment name from configuration
/// - `version`: API version string
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00",
///   "environment": "development",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
}

impl HealthStatus {
    /// Builds a fresh status snapshot, stamping the timestamp at
    /// construction time.
    pub fn current(environment: &str) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            environment: environment.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}
