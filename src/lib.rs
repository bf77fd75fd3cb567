//! Gateway route core: the immutable routing rule and its validating builder.
//!
//! ```ignore
//! let route = Route::builder()
//!     .id("orders")
//!     .uri("http://orders.internal:8080")?
//!     .order(10)
//!     .predicate(Condition::Always)
//!     .build()?;
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::{GatewayConfig, RouteDefinition};
pub use routing::{Condition, GatewayFilter, Route, RouteBuilder, RouteError};
