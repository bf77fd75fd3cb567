//! Gateway filter seam.
//!
//! Filters transform requests and responses on their way through a matched
//! route. Execution lives in the external filter pipeline; a route only keeps
//! them in order.

use std::fmt;
use std::sync::Arc;

/// A unit of request/response processing.
pub trait GatewayFilter: Send + Sync + fmt::Debug {
    /// Name used in diagnostics.
    fn name(&self) -> &str;
}

/// Shared handle to a filter, as stored in a route's chain.
pub type FilterRef = Arc<dyn GatewayFilter>;

/// Identity of a filter instance. Two handles are the same filter iff they
/// point at the same allocation.
pub(crate) fn filter_identity(filter: &FilterRef) -> *const () {
    Arc::as_ptr(filter).cast::<()>()
}
