use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Hello Message Response
///
/// The fixed greeting returned by `GET /hello`.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Hello, World!",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HelloMessage {
    pub message: String,
    pub timestamp: String,
}

impl HelloMessage {
    pub fn now() -> Self {
        Self {
            message: "Hello, World!".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// # Greeting Request
///
/// Input body for `POST /greet`. `name` must be a JSON string; after
/// trimming leading/trailing whitespace it must be non-empty.
#[derive(Deserialize, Debug, ToSchema)]
pub struct GreetingRequest {
    pub name: String,
}

/// # Greeting Response
///
/// Personalized greeting returned by `POST /greet`.
///
/// ## Example JSON
/// ```json
/// {
///   "greeting": "Hello, Alice!",
///   "timestamp": "2024-03-10T15:30:45.123456789+00:00"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct GreetingResponse {
    pub greeting: String,
    pub timestamp: String,
}

impl GreetingResponse {
    /// Builds a greeting embedding the caller's name verbatim, including
    /// any surrounding whitespace. Trimming happens only in the route
    /// handler's emptiness check, never here.
    pub fn for_name(name: &str) -> Self {
        Self {
            greeting: format!("Hello, {name}!"),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
