use actix_web::{App, HttpServer, web::Data};
use hello_world_api::config::AppConfig;
use hello_world_api::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Hello World API Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Greeting and health-check endpoints (configured in routes)
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared application configuration injected into handlers
///
/// # Endpoints
/// - REST routes: `/`, `/health`, `/hello`, `/greet`, `/info`
/// - Swagger UI: `/docs`
/// - OpenAPI spec: `/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:8000` by default
/// - `ENVIRONMENT` variable selects the deployment environment
///   (defaults to `development`)
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env();

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(Data::new(config.clone()))
            .app_data(hello_world_api::routes::json_config())
            .configure(hello_world_api::routes::configure)
            .service(SwaggerUi::new("/docs/{_:.*}").url("/openapi.json", openapi))
    })
    .bind(("0.0.0.0", 8000))?
    .run()
    .await
}
