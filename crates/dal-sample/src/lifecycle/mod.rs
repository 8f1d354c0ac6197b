//! # System Lifecycle
//!
//! [`DalSystem`] starts the user store, hands out the clients that talk to it, and stops it
//! again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the store channel
//! 2. **Store detects closure** - `receiver.recv()` returns `None` and it logs its final size
//! 3. **Await completion** - Wait for the store task to finish
//!
//! Clones of [`DalSystem::user_client`] or [`DalSystem::store`] kept elsewhere hold the
//! channel open, so drop them before calling [`DalSystem::shutdown`].

use schema_framework::{ClientConfig, StoreClient};
use tracing::{error, info};

use crate::clients::UserClient;
use crate::fixtures;
use crate::model::User;
use crate::user_store;

/// The running data-access layer.
///
/// # Example
///
/// ```ignore
/// let system = DalSystem::new();
/// let users = system.user_client.fetch_all_users().await?;
/// system.shutdown().await?;
/// ```
pub struct DalSystem {
    /// Client for fetching users.
    pub user_client: UserClient,

    /// Direct handle on the store, for inserting users.
    pub store: StoreClient<User>,

    handle: tokio::task::JoinHandle<()>,
}

impl DalSystem {
    /// Starts a store seeded with the reference users and the default configuration.
    pub fn new() -> Self {
        Self::start(&ClientConfig::default(), fixtures::users())
    }

    /// Starts a store seeded with `users`.
    pub fn start(config: &ClientConfig, users: impl IntoIterator<Item = User>) -> Self {
        let (actor, store) = user_store::new(config, users);
        let handle = tokio::spawn(actor.run());

        Self {
            user_client: UserClient::from_source(store.clone()),
            store,
            handle,
        }
    }

    /// Stops the store and waits for it to finish.
    ///
    /// Returns an error if the store task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.user_client);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for DalSystem {
    fn default() -> Self {
        Self::new()
    }
}
