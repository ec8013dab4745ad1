use actix_web::{HttpResponse, error, web};
use serde_json::json;

/// # Root Endpoint
///
/// Welcome message linking to the documentation and health check.
pub mod root;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp,
/// the deployment environment, and the API version.
pub mod health;

/// # Greeting Endpoints
///
/// The fixed `GET /hello` message and the validated `POST /greet` endpoint.
pub mod greeting;

/// # Info Endpoint
///
/// Static descriptor of the API surface.
pub mod info;

/// # API Route Configuration
///
/// Registers every endpoint with the Actix-web service configuration.
///
/// ## Mounted Routes
///
/// ```text
/// GET  /        - Welcome message
/// GET  /health  - Service health status
/// GET  /hello   - Simple hello
/// POST /greet   - Personalized greeting
/// GET  /info    - API information
/// ```
///
/// Unmatched paths fall through to Actix-web's default 404 response;
/// a matched path with an undeclared method yields 405.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(health::configure_routes)
        .configure(greeting::configure_routes)
        .configure(info::configure_routes);
}

/// JSON extractor configuration mapping body-schema failures to HTTP 422.
///
/// A request body that cannot be deserialized into the handler's input type
/// (missing field, wrong type, malformed JSON) is rejected before handler
/// logic runs, with a structured detail list naming the failure:
///
/// ```json
/// {
///   "detail": [
///     { "loc": ["body"], "msg": "missing field `name` ...", "type": "value_error" }
///   ]
/// }
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = json!({
            "detail": [{
                "loc": ["body"],
                "msg": err.to_string(),
                "type": "value_error"
            }]
        });
        error::InternalError::from_response(err, HttpResponse::UnprocessableEntity().json(body))
            .into()
    })
}
