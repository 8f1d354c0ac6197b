//! # Data-Access Contract
//!
//! [`EntitySource`] is what every backend implements: the actor-backed
//! [`StoreClient`](crate::StoreClient), the transport-backed
//! [`TransportSource`](crate::transport::TransportSource), or any integrator type.

use async_trait::async_trait;

use crate::error::DataAccessError;
use crate::object::GraphQLObject;

/// Fetches complete entities of type `T`.
///
/// # Contract
///
/// - `fetch_entity` takes a non-empty identifier and yields exactly one entity whose id is
///   that identifier, or [`DataAccessError::NotFound`]. An empty identifier is rejected with
///   [`DataAccessError::InvalidArgument`].
/// - `fetch_all_entities` yields every entity, materialized, in the backing store's order.
///   An empty store yields an empty `Vec`.
/// - Every entity returned conforms fully to `T`. A payload that does not is reported as
///   [`DataAccessError::MalformedResponse`], never patched with defaults.
#[async_trait]
pub trait EntitySource<T: GraphQLObject>: Send + Sync {
    async fn fetch_entity(&self, id: &str) -> Result<T, DataAccessError>;

    async fn fetch_all_entities(&self) -> Result<Vec<T>, DataAccessError>;
}

/// Rejects identifiers that can never address an entity.
pub fn validate_id(id: &str) -> Result<(), DataAccessError> {
    if id.is_empty() {
        return Err(DataAccessError::InvalidArgument(
            "id must not be empty".to_string(),
        ));
    }
    Ok(())
}
