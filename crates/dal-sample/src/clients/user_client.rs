//! # User Client
//!
//! Provides a high-level API for fetching users from any
//! [`EntitySource<User>`](schema_framework::EntitySource): the in-memory store or a
//! transport-backed source.
use std::sync::Arc;

use async_trait::async_trait;
use schema_framework::{ClientConfig, DataAccessClient, EntitySource, Transport, TransportSource};
use tracing::{info, instrument};

use crate::model::User;
use crate::user_store::UserError;

/// Client for fetching users.
#[derive(Clone)]
pub struct UserClient {
    source: Arc<dyn EntitySource<User>>,
}

impl UserClient {
    pub fn from_source(source: impl EntitySource<User> + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Fetches through `transport`, bounded by `config.fetch_timeout_ms` per call.
    pub fn over_transport<Tr: Transport + 'static>(transport: Tr, config: &ClientConfig) -> Self {
        Self::from_source(TransportSource::<User, Tr>::with_config(transport, config))
    }
}

#[async_trait]
impl DataAccessClient<User> for UserClient {
    type Error = UserError;

    fn source(&self) -> &dyn EntitySource<User> {
        self.source.as_ref()
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn fetch_user(&self, id: &str) -> Result<User, UserError> {
        self.fetch(id).await
    }

    #[instrument(skip(self))]
    pub async fn fetch_all_users(&self) -> Result<Vec<User>, UserError> {
        self.fetch_all().await
    }
}

/// One-line summary of a user, e.g. `User 1: John Doe`.
pub fn describe_user(user: &User) -> String {
    format!("User {}: {}", user.id(), user.name())
}

pub fn log_user(user: &User) {
    info!(id = %user.id(), role = %user.role(), "{}", describe_user(user));
}
