//! Route configuration subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs read_config (parse & deserialize)
//!     → (binary installs logging here)
//!     → loader.rs check_config
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated)
//!     → build_routes: one RouteBuilder per RouteDefinition
//!     → Vec<Route> sorted by priority
//! ```
//!
//! # Design Decisions
//! - A definition carries id, uri and order only; conditions and filters
//!   are attached in code
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{build_routes, check_config, load_config, parse_config, read_config, ConfigError};
pub use schema::{GatewayConfig, ObservabilityConfig, RouteDefinition};
pub use validation::{validate_config, ValidationError};
