//! Error types for user data access.

use std::time::Duration;

use schema_framework::DataAccessError;
use thiserror::Error;

/// Errors that can occur while fetching users.
///
/// One variant per [`DataAccessError`] kind, so callers never have to reach into the
/// framework type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The requested user was not found.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The source answered with data that is not a valid user.
    #[error("Malformed user data: {0}")]
    MalformedResponse(String),

    /// The source could not be reached.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// The identifier can never address a user.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<DataAccessError> for UserError {
    fn from(e: DataAccessError) -> Self {
        match e {
            DataAccessError::NotFound { id, .. } => UserError::NotFound(id),
            DataAccessError::MalformedResponse(msg) => UserError::MalformedResponse(msg),
            DataAccessError::TransportFailure(msg) => UserError::TransportFailure(msg),
            DataAccessError::Timeout(after) => UserError::Timeout(after),
            DataAccessError::InvalidArgument(msg) => UserError::InvalidArgument(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_maps_to_its_own_variant() {
        let cases = [
            (
                DataAccessError::NotFound {
                    typename: "User",
                    id: "99".to_string(),
                },
                UserError::NotFound("99".to_string()),
            ),
            (
                DataAccessError::MalformedResponse("bad".to_string()),
                UserError::MalformedResponse("bad".to_string()),
            ),
            (
                DataAccessError::TransportFailure("down".to_string()),
                UserError::TransportFailure("down".to_string()),
            ),
            (
                DataAccessError::Timeout(Duration::from_secs(1)),
                UserError::Timeout(Duration::from_secs(1)),
            ),
            (
                DataAccessError::InvalidArgument("empty".to_string()),
                UserError::InvalidArgument("empty".to_string()),
            ),
        ];
        for (framework, expected) in cases {
            assert_eq!(UserError::from(framework), expected);
        }
    }
}
