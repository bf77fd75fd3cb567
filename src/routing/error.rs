//! Route construction errors.

use thiserror::Error;

use crate::routing::destination::UriSyntaxError;

/// Errors raised while staging or building a route.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The destination string is not a valid absolute URI.
    #[error("Malformed destination '{uri}': {source}")]
    MalformedDestination {
        uri: String,
        #[source]
        source: UriSyntaxError,
    },

    /// `build` was called before a required field was set.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}
