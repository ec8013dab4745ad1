use crate::models::{SERVICE_NAME, SERVICE_VERSION};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry in the service's route table descriptor.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// # Service Information Response
///
/// Static descriptor of the API returned by `GET /info`: service name,
/// version, deployment environment, and the full route table in
/// declaration order.
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub endpoints: Vec<EndpointInfo>,
}

impl ServiceInfo {
    /// Builds the descriptor. Everything is constant except `environment`.
    pub fn describe(environment: &str) -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: SERVICE_VERSION.to_string(),
            environment: environment.to_string(),
            endpoints: vec![
                EndpointInfo::new("/", "GET", "Root endpoint"),
                EndpointInfo::new("/health", "GET", "Health check"),
                EndpointInfo::new("/hello", "GET", "Simple hello"),
                EndpointInfo::new("/greet", "POST", "Personalized greeting"),
                EndpointInfo::new("/info", "GET", "API information"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_constants() {
        let info = ServiceInfo::describe("development");

        assert_eq!(info.name, "Hello World API");
        assert_eq!(info.version, "1.0.0");
        assert_eq!(info.environment, "development");
    }

    #[test]
    fn test_service_info_lists_all_five_routes_in_order() {
        let info = ServiceInfo::describe("development");

        assert_eq!(info.endpoints.len(), 5);
        let paths: Vec<&str> = info.endpoints.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/health", "/hello", "/greet", "/info"]);

        let methods: Vec<&str> = info.endpoints.iter().map(|e| e.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "GET", "GET", "POST", "GET"]);
    }
}
