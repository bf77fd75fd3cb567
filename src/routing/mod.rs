//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDefinition (config)          caller code
//!     → Route::builder_from             → Route::builder()
//!     → .predicate(..).add(filter)..    → .id(..).uri(..)?..
//!     → builder.rs build() (validate, snapshot filter chain)
//!     → Route (immutable, shared across request threads)
//!     → external matcher evaluates route.condition()
//! ```
//!
//! # Design Decisions
//! - Routes are frozen at build time; there are no setters
//! - Predicates and filters are opaque trait objects compared by identity
//! - Lower priority value wins; ordering is a comparator, not a trait

pub mod builder;
pub mod destination;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod route;

pub use builder::RouteBuilder;
pub use destination::{parse_destination, UriSyntaxError};
pub use error::RouteError;
pub use filter::{FilterRef, GatewayFilter};
pub use predicate::{Condition, Exchange, FnPredicate, Predicate};
pub use route::Route;
