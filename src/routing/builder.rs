//! Validating route builder.
//!
//! # Responsibilities
//! - Stage route fields incrementally through chained calls
//! - Parse destinations eagerly, at the call that supplies them
//! - Validate required fields and freeze a [`Route`] snapshot
//!
//! # Design Decisions
//! - Mutators borrow (`&mut self`) so one builder can produce many routes
//! - `build` copies the filter chain; later edits never reach a built route
//! - A condition is required; use `Condition::Always` to match everything

use std::sync::Arc;

use url::Url;

use crate::routing::destination::parse_destination;
use crate::routing::error::RouteError;
use crate::routing::filter::FilterRef;
use crate::routing::predicate::Condition;
use crate::routing::route::Route;

/// Mutable staging area for a [`Route`].
#[derive(Debug, Clone, Default)]
pub struct RouteBuilder {
    id: Option<String>,
    uri: Option<Url>,
    order: i32,
    condition: Option<Condition>,
    filters: Vec<FilterRef>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the route identifier. Checked at `build`.
    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Parse and set the destination. Only strict RFC 3986 absolute URIs
    /// are accepted; see [`parse_destination`].
    pub fn uri(&mut self, uri: &str) -> Result<&mut Self, RouteError> {
        let parsed = parse_destination(uri).map_err(|source| RouteError::MalformedDestination {
            uri: uri.to_string(),
            source,
        })?;
        self.uri = Some(parsed);
        Ok(self)
    }

    /// Set an already parsed destination.
    pub fn destination(&mut self, uri: Url) -> &mut Self {
        self.uri = Some(uri);
        self
    }

    pub fn order(&mut self, order: i32) -> &mut Self {
        self.order = order;
        self
    }

    pub fn predicate(&mut self, condition: impl Into<Condition>) -> &mut Self {
        self.condition = Some(condition.into());
        self
    }

    /// Replace the whole filter chain.
    pub fn gateway_filters(&mut self, filters: Vec<FilterRef>) -> &mut Self {
        self.filters = filters;
        self
    }

    /// Append one filter to the end of the chain.
    pub fn add(&mut self, filter: FilterRef) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Append filters in iteration order.
    pub fn add_all(&mut self, filters: impl IntoIterator<Item = FilterRef>) -> &mut Self {
        self.filters.extend(filters);
        self
    }

    /// Validate the staged fields and freeze them into a route.
    ///
    /// The builder is left untouched, whether this succeeds or not.
    pub fn build(&self) -> Result<Route, RouteError> {
        let id = match self.id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => return Err(RouteError::MissingField("id")),
        };
        let uri = self.uri.as_ref().ok_or(RouteError::MissingField("uri"))?;
        let condition = self
            .condition
            .as_ref()
            .ok_or(RouteError::MissingField("predicate"))?;

        let filters: Arc<[FilterRef]> = self.filters.iter().cloned().collect();

        tracing::debug!(
            route_id = %id,
            uri = %uri,
            order = self.order,
            filters = filters.len(),
            "Route built"
        );

        Ok(Route::new(
            id.to_string(),
            uri.clone(),
            self.order,
            condition.clone(),
            filters,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::filter::GatewayFilter;

    #[derive(Debug)]
    struct Noop;

    impl GatewayFilter for Noop {
        fn name(&self) -> &str {
            "Noop"
        }
    }

    #[test]
    fn test_defaults() {
        let route = RouteBuilder::new()
            .id("r1")
            .destination(Url::parse("http://localhost:3000").unwrap())
            .predicate(Condition::Always)
            .build()
            .unwrap();

        assert_eq!(route.priority(), 0);
        assert!(route.filters().is_empty());
    }

    #[test]
    fn test_empty_id_is_missing() {
        let err = RouteBuilder::new()
            .id("")
            .destination(Url::parse("http://localhost").unwrap())
            .predicate(Condition::Always)
            .build()
            .unwrap_err();
        assert!(matches!(err, RouteError::MissingField("id")));
    }

    #[test]
    fn test_failed_uri_keeps_previous_destination() {
        let mut builder = RouteBuilder::new();
        builder.id("r1").uri("http://first.example").unwrap();
        assert!(builder.uri("::nope::").is_err());
        assert!(builder.uri("http:first.example").is_err());

        let route = builder.predicate(Condition::Always).build().unwrap();
        assert_eq!(route.uri().as_str(), "http://first.example/");
    }

    #[test]
    fn test_failed_build_leaves_builder_reusable() {
        let mut builder = RouteBuilder::new();
        builder.id("r1").add(Arc::new(Noop));

        let err = builder.build().unwrap_err();
        assert!(matches!(err, RouteError::MissingField("uri")));

        builder.uri("http://localhost").unwrap();
        let err = builder.build().unwrap_err();
        assert!(matches!(err, RouteError::MissingField("predicate")));

        let route = builder.predicate(Condition::Always).build().unwrap();
        assert_eq!(route.filters().len(), 1);
    }

    #[test]
    fn test_gateway_filters_replaces_chain() {
        let mut builder = RouteBuilder::new();
        builder.add(Arc::new(Noop)).add(Arc::new(Noop));
        builder.gateway_filters(vec![Arc::new(Noop) as FilterRef]);
        assert_eq!(builder.filters.len(), 1);
    }

    #[test]
    fn test_uri_rejects_lenient_input() {
        for input in [
            "http://example.com/a b",
            " http://example.com/x\t",
            "http:example.com",
            "http://example.com/{x}|^",
        ] {
            let err = RouteBuilder::new().uri(input).unwrap_err();
            match err {
                RouteError::MalformedDestination { uri, .. } => assert_eq!(uri, input),
                other => panic!("unexpected error: {}", other),
            }
        }
    }
}
