//! # In-Memory Store Actor
//!
//! The `StoreActor` owns the entities of one type and answers requests sequentially. It is
//! the reference backend of the data-access contract and the one the tests run against.

use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::StoreClient;
use crate::message::StoreRequest;
use crate::object::GraphQLObject;

/// The actor that holds a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the store. It owns the state and the receiver end of
/// the channel, and processes one message at a time, so no `Mutex` guards the entities.
///
/// Entities are kept in insertion order, with an index from id to position. Listing returns
/// them in that order; inserting an id that already exists replaces the entity in place.
///
/// ```rust,ignore
/// let (actor, client) = StoreActor::<User>::with_entities(32, fixtures::users());
/// tokio::spawn(actor.run());
/// let user = client.fetch_entity("1").await?;
/// ```
pub struct StoreActor<T: GraphQLObject> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    entities: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: GraphQLObject> StoreActor<T> {
    /// Creates an empty store and its client.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full, calls to
    ///   the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        Self::with_entities(buffer_size, Vec::new())
    }

    /// Creates a store seeded with `entities`, in the given order.
    pub fn with_entities(
        buffer_size: usize,
        entities: impl IntoIterator<Item = T>,
    ) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let mut actor = Self {
            receiver,
            entities: Vec::new(),
            index: HashMap::new(),
        };
        for entity in entities {
            actor.upsert(entity);
        }
        (actor, StoreClient::new(sender))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns `true` when an existing entity was replaced.
    fn upsert(&mut self, entity: T) -> bool {
        match self.index.get(entity.entity_id()) {
            Some(&position) => {
                self.entities[position] = entity;
                true
            }
            None => {
                self.index
                    .insert(entity.entity_id().to_string(), self.entities.len());
                self.entities.push(entity);
                false
            }
        }
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self) {
        let entity_type = T::TYPENAME;
        info!(entity_type, size = self.entities.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Get { id, respond_to } => {
                    let item = self
                        .index
                        .get(&id)
                        .map(|&position| self.entities[position].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.entities.len(), "List");
                    let _ = respond_to.send(Ok(self.entities.clone()));
                }
                StoreRequest::Insert { entity, respond_to } => {
                    let id = entity.entity_id().to_string();
                    let replaced = self.upsert(entity);
                    info!(entity_type, %id, replaced, size = self.entities.len(), "Inserted");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(entity_type, size = self.entities.len(), "Shutdown");
    }
}
