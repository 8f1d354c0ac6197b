//! # Store Client
//!
//! The handle used to talk to a [`StoreActor`](crate::StoreActor).

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use crate::error::DataAccessError;
use crate::message::StoreRequest;
use crate::object::GraphQLObject;
use crate::source::{validate_id, EntitySource};

/// A type-safe client for a `StoreActor`.
///
/// Cloning is cheap: the client holds only a sender. When the actor has stopped, every call
/// fails with [`DataAccessError::TransportFailure`].
pub struct StoreClient<T: GraphQLObject> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: GraphQLObject> Clone for StoreClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: GraphQLObject> StoreClient<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, DataAccessError>>) -> StoreRequest<T>,
    ) -> Result<R, DataAccessError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DataAccessError::TransportFailure("store closed".to_string()))?;
        response.await.map_err(|_| {
            DataAccessError::TransportFailure("store dropped response channel".to_string())
        })?
    }

    /// Adds `entity`, replacing any stored entity with the same id.
    pub async fn insert(&self, entity: T) -> Result<(), DataAccessError> {
        validate_id(entity.entity_id())?;
        self.request(|respond_to| StoreRequest::Insert { entity, respond_to })
            .await
    }
}

#[async_trait]
impl<T: GraphQLObject> EntitySource<T> for StoreClient<T> {
    async fn fetch_entity(&self, id: &str) -> Result<T, DataAccessError> {
        validate_id(id)?;
        let id = id.to_string();
        let found = self
            .request(|respond_to| StoreRequest::Get {
                id: id.clone(),
                respond_to,
            })
            .await?;
        found.ok_or_else(|| DataAccessError::not_found::<T>(id))
    }

    async fn fetch_all_entities(&self) -> Result<Vec<T>, DataAccessError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }
}
