use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. The generated document is served at `/openapi.json` and backs the
/// Swagger UI mounted at `/docs`.
///
/// # Endpoints
/// - Root: `GET /`
/// - Health Check: `GET /health`
/// - Simple Hello: `GET /hello`
/// - Personalized Greeting: `POST /greet`
/// - API Information: `GET /info`
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::root::root,
        crate::routes::health::health,
        crate::routes::greeting::hello,
        crate::routes::greeting::greet,
        crate::routes::info::info,
    ),
    components(
        schemas(
            crate::routes::root::WelcomeMessage,
            crate::models::health::HealthStatus,
            crate::models::greeting::HelloMessage,
            crate::models::greeting::GreetingRequest,
            crate::models::greeting::GreetingResponse,
            crate::models::info::ServiceInfo,
            crate::models::info::EndpointInfo,
        )
    ),
    tags(
        (name = "Service", description = "Welcome and service information endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Greetings", description = "Hello and personalized greeting endpoints")
    ),
    info(
        description = "A simple API demonstrating CI/CD best practices",
        title = "Hello World API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_covers_all_routes() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).expect("OpenAPI doc should serialize");

        let paths = json["paths"].as_object().expect("paths should be present");
        for path in ["/", "/health", "/hello", "/greet", "/info"] {
            assert!(paths.contains_key(path), "OpenAPI doc should document {path}");
        }

        assert_eq!(json["info"]["title"], "Hello World API");
        assert_eq!(json["info"]["version"], "1.0.0");
    }
}
