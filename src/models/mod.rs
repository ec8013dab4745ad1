/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp,
/// the deployment environment, and the API version.
pub mod health;

/// # Greeting Models
///
/// Request and response shapes for the hello and greeting endpoints.
pub mod greeting;

/// # Service Descriptor
///
/// Static description of the API surface returned by the info endpoint.
pub mod info;

/// Service name reported by the info endpoint.
pub const SERVICE_NAME: &str = "Hello World API";

/// API version reported by the health and info endpoints.
pub const SERVICE_VERSION: &str = "1.0.0";
