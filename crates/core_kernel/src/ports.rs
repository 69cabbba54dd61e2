//! Ports and Adapters Infrastructure
//!
//! Domains describe the data they need through port traits that extend the
//! marker traits here. Adapters provide the data: today a static in-memory
//! catalog, later any data-fetching layer that can fill the same shapes.
//!
//! ```rust,ignore
//! #[async_trait]
//! pub trait ClaimsDataPort: DomainPort {
//!     async fn claims(&self) -> Result<Vec<Claim>, PortError>;
//! }
//!
//! impl ClaimsDataPort for StaticCatalog { ... }
//! ```

use std::fmt;
use thiserror::Error;
use serde::{Deserialize, Serialize};

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The backing source is unavailable
    #[error("Service unavailable: {service}")]
    ServiceUnavailable {
        service: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Ports are shared across request handlers, so they must be thread-safe.
pub trait DomainPort: Send + Sync + 'static {}

/// Result of a health check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub healthy: bool,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthCheckResult {
    pub fn healthy(source: impl Into<String>) -> Self {
        Self {
            healthy: true,
            source: source.into(),
            message: None,
        }
    }

    pub fn unhealthy(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            source: source.into(),
            message: Some(message.into()),
        }
    }
}

/// Anything that can report on its own readiness
pub trait HealthCheckable {
    fn health_check(&self) -> HealthCheckResult;
}
