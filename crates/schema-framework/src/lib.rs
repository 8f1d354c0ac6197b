//! # Schema Framework
//!
//! This crate provides the building blocks for a typed boundary between an application and
//! a GraphQL-shaped data source: a type layer derived from one schema definition, and the
//! contract every data-access backend satisfies against it.
//!
//! ## Architecture Overview
//!
//! The framework separates concerns into three layers:
//!
//! 1. **Type Layer** ([`scalars`], [`transform`], [`object`]) - Scalars with input/output
//!    representations, the field transforms, and the object traits
//! 2. **Contract Layer** ([`EntitySource`], [`DataAccessClient`]) - What a backend promises
//!    and how entity-specific clients wrap it
//! 3. **Backend Layer** ([`StoreActor`]/[`StoreClient`], [`TransportSource`]) - An in-memory
//!    store run as an actor, and a source over an integrator-supplied [`Transport`]
//!
//! ## Defining Objects and Shapes
//!
//! ```rust,ignore
//! use schema_framework::scalars::{self, Output, ID};
//! use schema_framework::{derive_shape, graphql_object};
//!
//! graphql_object! {
//!     pub struct Account as "Account" {
//!         #[id]
//!         id: Output<ID>,
//!         handle: Output<scalars::String>,
//!     }
//! }
//!
//! derive_shape! {
//!     pub struct AccountDraft from Account {
//!         required id: Output<ID>,
//!         optional handle: Output<scalars::String>,
//!     }
//! }
//! ```
//!
//! `graphql_object!` also generates `AccountPartial`, the partial-delivery companion used by
//! [`Incremental`]. See [`macros`] for the field modes of `derive_shape!`.
//!
//! ## Fetching
//!
//! ```rust,ignore
//! let (actor, client) = StoreActor::<Account>::with_entities(32, accounts);
//! tokio::spawn(actor.run());
//!
//! let one = client.fetch_entity("a-1").await?;      // or DataAccessError::NotFound
//! let all = client.fetch_all_entities().await?;     // insertion order
//! ```
//!
//! Every failure is a [`DataAccessError`]; none is ever turned into a default value.
//!
//! ## Testing
//!
//! [`mock::MockTransport`] scripts transport responses so decoding and error mapping can be
//! tested without any server. The in-memory store doubles as the reference backend.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod config;
pub mod error;
pub mod macros;
pub mod message;
pub mod mock;
pub mod object;
pub mod scalars;
pub mod source;
pub mod tracing;
pub mod transform;
pub mod transport;

#[doc(hidden)]
pub use paste;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::DataAccessClient;
pub use config::ClientConfig;
pub use error::{ConfigError, DataAccessError, ShapeError, TransportError};
pub use message::{Response, StoreRequest};
pub use object::{GraphQLObject, PartialObject, Typed, Typename};
pub use source::EntitySource;
pub use transform::{collapse, Absent, Exact, ExactShape, Incremental, InputMaybe, Maybe, Nullable};
pub use transport::{GraphQLRequest, Transport, TransportSource};
