//! # DataAccessClient Trait
//!
//! Provides a common interface for entity-specific clients, adding default `fetch` and
//! `fetch_all` methods built on top of any [`EntitySource`].
use async_trait::async_trait;

use crate::{DataAccessError, EntitySource, GraphQLObject};

/// Trait for entity-specific clients to inherit the contract operations.
///
/// Implementors name their own error type and expose the source they wrap; the default
/// methods log the call and convert [`DataAccessError`] through `From`.
///
/// # Example
///
/// ```rust,ignore
/// struct UserClient {
///     source: Arc<dyn EntitySource<User>>,
/// }
///
/// #[async_trait]
/// impl DataAccessClient<User> for UserClient {
///     type Error = UserError;
///
///     fn source(&self) -> &dyn EntitySource<User> {
///         self.source.as_ref()
///     }
/// }
///
/// async fn usage(client: UserClient) {
///     // fetch() and fetch_all() are provided automatically!
///     let _ = client.fetch("1").await;
///     let _ = client.fetch_all().await;
/// }
/// ```
#[async_trait]
pub trait DataAccessClient<T: GraphQLObject>: Send + Sync {
    /// The entity-specific error type.
    type Error: From<DataAccessError> + Send + Sync;

    /// Access the wrapped source.
    fn source(&self) -> &dyn EntitySource<T>;

    /// Fetch one entity by id.
    #[tracing::instrument(skip(self), fields(entity_type = T::TYPENAME))]
    async fn fetch(&self, id: &str) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.source().fetch_entity(id).await?)
    }

    /// Fetch every entity, in source order.
    #[tracing::instrument(skip(self), fields(entity_type = T::TYPENAME))]
    async fn fetch_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        Ok(self.source().fetch_all_entities().await?)
    }
}
