//! # Transport-Backed Source
//!
//! [`TransportSource`] implements [`EntitySource`] on top of an integrator-supplied
//! [`Transport`]. Each contract operation becomes exactly one query-style request:
//!
//! ```text
//! fetch_entity("2")    -> query QueryUser($id: ID!) { user(id: $id) { __typename id ... } }
//! fetch_all_entities() -> query QueryUsers { users { __typename id ... } }
//! ```
//!
//! The response is the usual `{ "data": ..., "errors": [...] }` envelope. How each outcome
//! maps onto [`DataAccessError`]:
//!
//! | Outcome | Error |
//! |---------|-------|
//! | transport failed | `TransportFailure` |
//! | transport timed out, or no answer within the fetch timeout | `Timeout` |
//! | non-empty `errors` | `TransportFailure` |
//! | no `data`, or the root field is missing | `MalformedResponse` |
//! | single root field is `null` | `NotFound` |
//! | an element does not decode as the entity | `MalformedResponse` |
//! | the returned id differs from the requested one | `MalformedResponse` |

use std::marker::PhantomData;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{DataAccessError, TransportError};
use crate::object::{selection_set, GraphQLObject};
use crate::scalars::{Input, ID};
use crate::source::{validate_id, EntitySource};
use crate::transform::{Exact, ExactShape};

/// Sends one request and returns the raw response envelope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &GraphQLRequest) -> Result<Value, TransportError>;
}

/// A query-style request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    pub operation_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Exact<IdArgs>>,
}

/// Arguments of a single-entity lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdArgs {
    pub id: Input<ID>,
}

impl ExactShape for IdArgs {}

/// The response envelope.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<GraphQLErrorEntry>,
}

/// Servers may send `"errors": null` alongside good data.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQLErrorEntry {
    pub message: String,
}

/// Names of the query root fields serving one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootFields {
    /// Looks up one entity by id (`user`).
    pub single: String,
    /// Lists every entity (`users`).
    pub list: String,
}

impl RootFields {
    pub fn new(single: impl Into<String>, list: impl Into<String>) -> Self {
        Self {
            single: single.into(),
            list: list.into(),
        }
    }

    /// Conventional names: the typename with a lower-case first letter, plus `s` for lists.
    pub fn for_type<T: GraphQLObject>() -> Self {
        let mut chars = T::TYPENAME.chars();
        let single: String = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        };
        let list = format!("{single}s");
        Self { single, list }
    }
}

/// [`EntitySource`] over a [`Transport`].
pub struct TransportSource<T, Tr> {
    transport: Tr,
    root: RootFields,
    timeout: Duration,
    _entity: PhantomData<fn() -> T>,
}

impl<T: GraphQLObject, Tr: Transport> TransportSource<T, Tr> {
    pub fn new(transport: Tr) -> Self {
        Self::with_config(transport, &ClientConfig::default())
    }

    pub fn with_config(transport: Tr, config: &ClientConfig) -> Self {
        Self {
            transport,
            root: RootFields::for_type::<T>(),
            timeout: config.fetch_timeout(),
            _entity: PhantomData,
        }
    }

    pub fn with_root_fields(mut self, root: RootFields) -> Self {
        self.root = root;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn transport(&self) -> &Tr {
        &self.transport
    }

    /// The request sent by `fetch_entity(id)`.
    pub fn single_query(&self, id: &str) -> GraphQLRequest {
        GraphQLRequest {
            query: format!(
                "query Query{name}($id: ID!) {{ {field}(id: $id) {{ {selection} }} }}",
                name = T::TYPENAME,
                field = self.root.single,
                selection = selection_set::<T>(),
            ),
            operation_name: format!("Query{}", T::TYPENAME),
            variables: Some(Exact::new(IdArgs { id: id.to_string() })),
        }
    }

    /// The request sent by `fetch_all_entities()`.
    pub fn list_query(&self) -> GraphQLRequest {
        GraphQLRequest {
            query: format!(
                "query Query{name}s {{ {field} {{ {selection} }} }}",
                name = T::TYPENAME,
                field = self.root.list,
                selection = selection_set::<T>(),
            ),
            operation_name: format!("Query{}s", T::TYPENAME),
            variables: None,
        }
    }

    /// Runs `request` and extracts the value of `root` from its `data`.
    async fn execute(&self, request: GraphQLRequest, root: &str) -> Result<Value, DataAccessError> {
        let entity_type = T::TYPENAME;
        debug!(entity_type, operation = %request.operation_name, "Executing");

        let raw = match tokio::time::timeout(self.timeout, self.transport.execute(&request)).await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(TransportError::TimedOut)) | Err(_) => {
                warn!(entity_type, operation = %request.operation_name, timeout = ?self.timeout, "Timed out");
                return Err(DataAccessError::Timeout(self.timeout));
            }
            Ok(Err(e)) => {
                warn!(entity_type, operation = %request.operation_name, error = %e, "Transport failed");
                return Err(DataAccessError::TransportFailure(e.to_string()));
            }
        };

        let response: GraphQLResponse = serde_json::from_value(raw)
            .map_err(|e| DataAccessError::MalformedResponse(format!("invalid envelope: {e}")))?;
        if !response.errors.is_empty() {
            let messages: Vec<&str> = response.errors.iter().map(|e| e.message.as_str()).collect();
            warn!(entity_type, errors = ?messages, "Query returned errors");
            return Err(DataAccessError::TransportFailure(messages.join("; ")));
        }

        let mut data = response
            .data
            .ok_or_else(|| DataAccessError::MalformedResponse("response has no data".to_string()))?;
        data.get_mut(root).map(Value::take).ok_or_else(|| {
            DataAccessError::MalformedResponse(format!("missing root field `{root}`"))
        })
    }
}

fn decode<T: GraphQLObject>(value: Value, path: &str) -> Result<T, DataAccessError> {
    serde_json::from_value(value)
        .map_err(|e| DataAccessError::MalformedResponse(format!("{path}: {e}")))
}

#[async_trait]
impl<T: GraphQLObject, Tr: Transport> EntitySource<T> for TransportSource<T, Tr> {
    async fn fetch_entity(&self, id: &str) -> Result<T, DataAccessError> {
        validate_id(id)?;
        let root = self.root.single.as_str();
        let value = self.execute(self.single_query(id), root).await?;
        if value.is_null() {
            return Err(DataAccessError::not_found::<T>(id));
        }

        let entity: T = decode(value, root)?;
        if entity.entity_id() != id {
            return Err(DataAccessError::MalformedResponse(format!(
                "{root}: requested id {id:?}, received {:?}",
                entity.entity_id()
            )));
        }
        Ok(entity)
    }

    async fn fetch_all_entities(&self) -> Result<Vec<T>, DataAccessError> {
        let root = self.root.list.as_str();
        let value = self.execute(self.list_query(), root).await?;
        let Value::Array(items) = value else {
            return Err(DataAccessError::MalformedResponse(format!(
                "{root}: expected a list"
            )));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| decode(item, &format!("{root}[{i}]")))
            .collect()
    }
}
