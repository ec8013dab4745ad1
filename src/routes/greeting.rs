use crate::models::greeting::{GreetingRequest, GreetingResponse, HelloMessage};
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

/// # Simple Hello Endpoint
///
/// Returns the fixed "Hello, World!" message with a fresh timestamp.
///
/// ## Response
///
/// - **200 OK**:
///   ```json
///   {
///     "message": "Hello, World!",
///     "timestamp": "2024-03-10T12:34:56.789+00:00"
///   }
///   ```
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Hello world message", body = HelloMessage)
    ),
    tag = "Greetings"
)]
#[get("/hello")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(HelloMessage::now())
}

/// # Personalized Greeting Endpoint
///
/// Validates the submitted name and returns a personalized greeting.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with a string `name` field
///
/// ## Validation
/// The name is trimmed of leading/trailing whitespace for the emptiness
/// check only; the greeting embeds the original untrimmed value.
///
/// ## Responses
/// - **200 OK**: `{"greeting": "Hello, <name>!", "timestamp": "<ISO8601>"}`
/// - **400 Bad Request**: name is empty or whitespace-only
///   - `{"detail": "Name cannot be empty"}`
/// - **422 Unprocessable Entity**: `name` missing or not a string
///   (rejected by the JSON extractor before this handler runs)
///
/// ## Example Request
/// ```json
/// { "name": "Alice" }
/// ```
#[utoipa::path(
    post,
    path = "/greet",
    request_body = GreetingRequest,
    responses(
        (status = 200, description = "Personalized greeting", body = GreetingResponse),
        (status = 400, description = "Name is empty or whitespace-only"),
        (status = 422, description = "Request body fails schema validation")
    ),
    tag = "Greetings"
)]
#[post("/greet")]
pub async fn greet(req: web::Json<GreetingRequest>) -> impl Responder {
    // Trim only for the check; the greeting keeps the original value.
    if req.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "detail": "Name cannot be empty"
        }));
    }

    HttpResponse::Ok().json(GreetingResponse::for_name(&req.name))
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(hello).service(greet);
}
