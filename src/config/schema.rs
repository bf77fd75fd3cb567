//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration: a set of route definitions plus logging settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route definitions, in file order.
    pub routes: Vec<RouteDefinition>,
}

/// External description of a route.
///
/// Seeds a builder with identity, destination and priority. Conditions and
/// filters are not expressible here.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RouteDefinition {
    /// Route identifier, unique within a config.
    pub id: String,

    /// Destination URI (e.g., "http://127.0.0.1:3000/api").
    pub uri: String,

    /// Route priority (lower = higher precedence).
    #[serde(default)]
    pub order: i32,
}

impl RouteDefinition {
    pub fn new(id: impl Into<String>, uri: impl Into<String>, order: i32) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
            order,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
