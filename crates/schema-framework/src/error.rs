//! # Framework Errors
//!
//! This module defines the common error types used throughout the schema framework.
//! Every source of entities reports failures through [`DataAccessError`], so callers can
//! match on one closed set of outcomes no matter which backend answered.

use std::time::Duration;

use crate::object::Typed;

/// Errors surfaced by the data-access contract.
///
/// Each kind is distinct and is never coerced into an empty or default value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataAccessError {
    /// The requested identifier has no corresponding entity.
    #[error("{typename} not found: {id}")]
    NotFound { typename: &'static str, id: String },

    /// The source answered with something that does not decode into the entity shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The underlying call could not complete (connection or protocol failure).
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The underlying call did not complete in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The caller passed an argument that can never match an entity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DataAccessError {
    pub fn not_found<T: Typed>(id: impl Into<String>) -> Self {
        Self::NotFound {
            typename: T::TYPENAME,
            id: id.into(),
        }
    }

    /// True for failures of the underlying call rather than of its payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_) | Self::Timeout(_))
    }
}

/// Failure reported by a [`Transport`](crate::transport::Transport) implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("protocol error: {0}")]
    Protocol(String),
    #[error("timed out")]
    TimedOut,
}

/// Errors raised while turning partial deliveries into complete entities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("incomplete {typename}: missing {}", .missing.join(", "))]
    Incomplete {
        typename: &'static str,
        missing: Vec<&'static str>,
    },
}

/// Errors raised while loading [`ClientConfig`](crate::config::ClientConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
}
