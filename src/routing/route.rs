//! The immutable route value.
//!
//! # Responsibilities
//! - Hold identity, destination, priority, condition and filter chain
//! - Expose read-only accessors to the matching/dispatch subsystem
//! - Behave as a value: equality, hashing, priority ordering
//!
//! # Design Decisions
//! - Only constructible through [`RouteBuilder`](super::RouteBuilder)
//! - Filter chain is a fixed-size shared slice, so clones are cheap and the
//!   chain cannot change after build
//! - Hash covers every field equality covers, priority included

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use url::Url;

use crate::config::RouteDefinition;
use crate::routing::builder::RouteBuilder;
use crate::routing::error::RouteError;
use crate::routing::filter::{filter_identity, FilterRef};
use crate::routing::predicate::Condition;

/// A routing rule: where matched requests go, when a request matches, and
/// which filters run on the way.
#[derive(Clone)]
pub struct Route {
    id: String,
    uri: Url,
    order: i32,
    condition: Condition,
    filters: Arc<[FilterRef]>,
}

impl Route {
    pub(crate) fn new(
        id: String,
        uri: Url,
        order: i32,
        condition: Condition,
        filters: Arc<[FilterRef]>,
    ) -> Self {
        Self {
            id,
            uri,
            order,
            condition,
            filters,
        }
    }

    /// Start an empty builder.
    pub fn builder() -> RouteBuilder {
        RouteBuilder::new()
    }

    /// Start a builder seeded with a definition's id, uri and order.
    ///
    /// The condition and filters are not part of a definition and must be
    /// set on the returned builder.
    pub fn builder_from(definition: &RouteDefinition) -> Result<RouteBuilder, RouteError> {
        let mut builder = RouteBuilder::new();
        builder
            .id(definition.id.as_str())
            .uri(&definition.uri)?
            .order(definition.order);
        Ok(builder)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Destination matched requests are forwarded to.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Lower value means higher precedence.
    pub fn priority(&self) -> i32 {
        self.order
    }

    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// The filter chain, in the order it was assembled.
    pub fn filters(&self) -> &[FilterRef] {
        &self.filters
    }

    /// Comparator for priority-ordered collections (lower first).
    ///
    /// ```ignore
    /// routes.sort_by(Route::cmp_priority);
    /// ```
    pub fn cmp_priority(a: &Route, b: &Route) -> Ordering {
        a.order.cmp(&b.order)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.uri == other.uri
            && self.order == other.order
            && self.condition == other.condition
            && self.filters.len() == other.filters.len()
            && self
                .filters
                .iter()
                .zip(other.filters.iter())
                .all(|(a, b)| filter_identity(a) == filter_identity(b))
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.uri.hash(state);
        self.order.hash(state);
        self.condition.hash(state);
        state.write_usize(self.filters.len());
        for filter in self.filters.iter() {
            (filter_identity(filter) as usize).hash(state);
        }
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("uri", &self.uri.as_str())
            .field("order", &self.order)
            .field("predicate", &self.condition)
            .field("gateway_filters", &self.filters)
            .finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Route{{id='{}', uri={}, order={}, predicate={:?}, gatewayFilters=[",
            self.id, self.uri, self.order, self.condition
        )?;
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", filter.name())?;
        }
        write!(f, "]}}")
    }
}
