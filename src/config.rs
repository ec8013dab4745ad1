use std::env;

/// # Application Configuration
///
/// Read-only configuration resolved from process environment variables at
/// startup and injected into handlers via `web::Data<AppConfig>`.
///
/// ## Fields
/// - `environment`: Deployment environment name, from the `ENVIRONMENT`
///   variable, defaulting to `"development"` when unset.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub environment: String,
}

impl AppConfig {
    /// Builds the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }
}
