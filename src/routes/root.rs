use actix_web::{HttpResponse, Responder, get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Welcome Message
///
/// Response body for the root endpoint, pointing callers at the interactive
/// documentation and the health check.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct WelcomeMessage {
    pub message: String,
    pub docs: String,
    pub health: String,
}

impl WelcomeMessage {
    pub fn new() -> Self {
        Self {
            message: "Welcome to Hello World API".to_string(),
            docs: "/docs".to_string(),
            health: "/health".to_string(),
        }
    }
}

impl Default for WelcomeMessage {
    fn default() -> Self {
        Self::new()
    }
}

/// # Root Endpoint
///
/// Returns a welcome message with pointers to the documentation page and
/// the health check endpoint.
///
/// ## Response
///
/// - **200 OK**:
///   ```json
///   {
///     "message": "Welcome to Hello World API",
///     "docs": "/docs",
///     "health": "/health"
///   }
///   ```
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeMessage)
    ),
    tag = "Service"
)]
#[get("/")]
pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(WelcomeMessage::new())
}

pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(root);
}
