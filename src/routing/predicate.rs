//! Route matching conditions.
//!
//! # Responsibilities
//! - Define the request context a condition inspects
//! - Define the predicate seam the external matcher evaluates
//! - Represent "no condition" explicitly instead of as a missing value
//!
//! # Design Decisions
//! - Predicates are opaque: a Route stores and exposes them, never calls them
//! - Predicates compare by identity (same shared instance), like closures
//! - `Condition::Always` is the only way to build a route that matches everything

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;

/// The inbound request a predicate is evaluated against.
pub type Exchange = Request<Body>;

/// A boolean test over an inbound request.
pub trait Predicate: Send + Sync + fmt::Debug {
    /// Returns true if the request satisfies this predicate.
    fn test(&self, exchange: &Exchange) -> bool;
}

/// Adapts a plain closure into a [`Predicate`].
///
/// The label is only used for diagnostics.
pub struct FnPredicate<F> {
    label: String,
    f: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(&Exchange) -> bool + Send + Sync,
{
    pub fn new(label: impl Into<String>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnPredicate({})", self.label)
    }
}

impl<F> Predicate for FnPredicate<F>
where
    F: Fn(&Exchange) -> bool + Send + Sync,
{
    fn test(&self, exchange: &Exchange) -> bool {
        (self.f)(exchange)
    }
}

/// The matching condition attached to a route.
#[derive(Clone)]
pub enum Condition {
    /// Matches every request.
    Always,
    /// Matches when the wrapped predicate does.
    Matches(Arc<dyn Predicate>),
}

impl Condition {
    /// Wrap a closure as a labelled predicate condition.
    pub fn from_fn<F>(label: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Exchange) -> bool + Send + Sync + 'static,
    {
        Condition::Matches(Arc::new(FnPredicate::new(label, f)))
    }

    /// Evaluate the condition. Intended for the external matcher.
    pub fn test(&self, exchange: &Exchange) -> bool {
        match self {
            Condition::Always => true,
            Condition::Matches(p) => p.test(exchange),
        }
    }

    fn identity(&self) -> Option<*const ()> {
        match self {
            Condition::Always => None,
            Condition::Matches(p) => Some(Arc::as_ptr(p).cast::<()>()),
        }
    }
}

impl From<Arc<dyn Predicate>> for Condition {
    fn from(predicate: Arc<dyn Predicate>) -> Self {
        Condition::Matches(predicate)
    }
}

impl<P: Predicate + 'static> From<Arc<P>> for Condition {
    fn from(predicate: Arc<P>) -> Self {
        Condition::Matches(predicate)
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Condition {}

impl Hash for Condition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().map(|p| p as usize).hash(state);
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("Always"),
            Condition::Matches(p) => write!(f, "{:?}", p),
        }
    }
}
