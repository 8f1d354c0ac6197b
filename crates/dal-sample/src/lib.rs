//! # Data Access Layer Sample
//!
//! The `User` domain built on `schema_framework`: entity and role definitions, the shapes
//! derived from them, and a client that fetches users from any source.
//!
//! - **[model]**: [`User`](model::User), [`UserRole`](model::UserRole) and the derived shapes.
//! - **[clients]**: [`UserClient`](clients::UserClient) with `fetch_user` and `fetch_all_users`.
//! - **[user_store]**: The in-memory backend and [`UserError`](user_store::UserError).
//! - **[lifecycle]**: [`DalSystem`](lifecycle::DalSystem), which starts and stops the store.
//! - **[fixtures]**: The three reference users.

pub mod clients;
pub mod fixtures;
pub mod lifecycle;
pub mod model;
pub mod user_store;
