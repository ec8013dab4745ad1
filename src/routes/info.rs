use crate::config::AppConfig;
use crate::models::info::ServiceInfo;
use actix_web::{HttpResponse, Responder, get, web};

/// # API Information Endpoint
///
/// Returns a static descriptor of the service: name, version, deployment
/// environment, and the route table.
///
/// ## Response
///
/// - **200 OK**: [`ServiceInfo`] with exactly five `endpoints` entries in
///   declaration order.
///
/// ## Example Response
///
/// ```json
/// {
///   "name": "Hello World API",
///   "version": "1.0.0",
///   "environment": "development",
///   "endpoints": [
///     { "path": "/", "method": "GET", "description": "Root endpoint" },
///     { "path": "/health", "method": "GET", "description": "Health check" },
///     { "path": "/hello", "method": "GET", "description": "Simple hello" },
///     { "path": "/greet", "method": "POST", "description": "Personalized greeting" },
///     { "path": "/info", "method": "GET", "description": "API information" }
///   ]
/// }
/// ```
///
/// [`ServiceInfo`]: crate::models::info::ServiceInfo
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Service descriptor", body = ServiceInfo)
    ),
    tag = "Service"
)]
#[get("/info")]
pub async fn info(config: web::Data<AppConfig>) -> impl Responder {
    HttpResponse::Ok().json(ServiceInfo::describe(&config.environment))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web::Data};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_info_endpoint() {
        // Set up test app with an injected configuration
        let app = test::init_service(
            App::new()
                .app_data(Data::new(AppConfig {
                    environment: "staging".to_string(),
                }))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/info").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body = test::read_body(resp).await;
        let body_json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(body_json["name"], "Hello World API");
        assert_eq!(body_json["version"], "1.0.0");
        assert_eq!(body_json["environment"], "staging");

        // Route table: exactly five entries, declaration order
        let endpoints = body_json["endpoints"]
            .as_array()
            .expect("endpoints should be a JSON array");
        assert_eq!(endpoints.len(), 5);
        assert_eq!(endpoints[0]["path"], "/");
        assert_eq!(endpoints[3]["path"], "/greet");
        assert_eq!(endpoints[3]["method"], "POST");
        assert_eq!(endpoints[4]["description"], "API information");
    }
}
