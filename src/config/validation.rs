//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty and duplicate route ids
//! - Reject destinations the route builder would reject
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before any route is built

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::routing::destination::parse_destination;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("duplicate route id '{id}'")]
    DuplicateId { id: String },

    #[error("route '{id}' has invalid uri '{uri}': {reason}")]
    InvalidUri {
        id: String,
        uri: String,
        reason: String,
    },
}

/// Check a config for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, def) in config.routes.iter().enumerate() {
        if def.id.is_empty() {
            errors.push(ValidationError::EmptyId { index });
        } else if !seen.insert(def.id.as_str()) {
            errors.push(ValidationError::DuplicateId { id: def.id.clone() });
        }

        if let Err(e) = parse_destination(&def.uri) {
            errors.push(ValidationError::InvalidUri {
                id: def.id.clone(),
                uri: def.uri.clone(),
                reason: e.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        for err in &errors {
            tracing::warn!(error = %err, "Rejected route definition");
        }
        Err(errors)
    }
}
