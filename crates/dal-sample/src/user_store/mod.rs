//! # User Store
//!
//! The in-memory backend for [`User`], built on the framework's
//! [`StoreActor`](schema_framework::StoreActor).
//!
//! ## Structure
//!
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use dal_sample::{fixtures, user_store};
//! use dal_sample::clients::UserClient;
//! use schema_framework::ClientConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = user_store::new(&ClientConfig::default(), fixtures::users());
//!     tokio::spawn(actor.run());
//!
//!     let client = UserClient::from_source(store);
//!     let user = client.fetch_user("2").await?;
//!     assert_eq!(user.name(), "Jane Doe");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::*;

use schema_framework::{ClientConfig, StoreActor, StoreClient};

use crate::model::User;

/// Creates a user store seeded with `users`, in the given order, and its client.
pub fn new(
    config: &ClientConfig,
    users: impl IntoIterator<Item = User>,
) -> (StoreActor<User>, StoreClient<User>) {
    StoreActor::with_entities(config.store_buffer, users)
}
