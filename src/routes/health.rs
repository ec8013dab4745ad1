use crate::config::AppConfig;
use crate::models::health::HealthStatus;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
///
/// ## Response
///
/// - **200 OK**: Service is healthy
///   - Body: [`HealthStatus`] containing:
///     - `status`: String indicating service status ("healthy")
///     - `timestamp`: ISO 8601 timestamp of the check
///     - `environment`: Deployment environment from configuration
///     - `version`: API version string
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2024-03-10T12:34:56.789+00:00",
///   "environment": "development",
///   "version": "1.0.0"
/// }
/// ```
///
/// [`HealthStatus`]: crate::models::health::HealthStatus
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(HealthStatus::current(&config.environment))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web::Data};
    use chrono::DateTime;
    use serde_json::from_slice;

    #[actix_web::test]
    async fn test_health_endpoint() {
        // Set up test app with an injected configuration
        let app = test::init_service(
            App::new()
                .app_data(Data::new(AppConfig {
                    environment: "development".to_string(),
                }))
                .configure(configure_routes),
        )
        .await;

        // Create test request
        let req = test::TestRequest::get().uri("/health").to_request();

        // Execute request
        let resp = test::call_service(&app, req).await;

        // Verify status code
        assert!(resp.status().is_success());

        // Verify response body
        let body = test::read_body(resp).await;
        let health_status: HealthStatus = from_slice(&body).unwrap();

        assert_eq!(health_status.status, "healthy");
        assert_eq!(health_status.environment, "development");
        assert_eq!(health_status.version, "1.0.0");

        // Verify timestamp is a valid ISO 8601 date
        let _dt = DateTime::parse_from_rfc3339(&health_status.timestamp)
            .expect("Timestamp should be a valid RFC 3339 / ISO 8601 date");
    }

    #[actix_web::test]
    async fn test_health_reflects_configured_environment() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(AppConfig {
                    environment: "production".to_string(),
                }))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let health_status: HealthStatus = from_slice(&body).unwrap();
        assert_eq!(health_status.environment, "production");
    }
}
