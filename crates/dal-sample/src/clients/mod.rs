//! Type-safe wrappers around [`EntitySource`](schema_framework::EntitySource).

pub mod user_client;

pub use user_client::*;
