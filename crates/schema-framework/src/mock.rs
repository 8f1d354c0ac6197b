//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements [`Transport`] entirely in memory. Queue the responses a test
//! needs, hand a clone to a [`TransportSource`](crate::transport::TransportSource), then
//! check every expectation was consumed.
//!
//! ## When to use the Mock vs the Store
//!
//! | Feature | MockTransport | StoreActor |
//! |---------|---------------|------------|
//! | **Exercises** | Response decoding and error mapping | Contract semantics over real state |
//! | **State** | None (scripted responses) | Real entities |
//! | **Error Injection** | Easy (`return_err`, `return_after`) | Only `NotFound` and closed store |
//!
//! ## Example
//!
//! ```rust,ignore
//! let mock = MockTransport::new();
//! mock.expect_query("QueryUser")
//!     .return_ok(json!({"data": {"user": {"id": "1", "name": "A", "email": "a@x", "role": "USER"}}}));
//!
//! let source = TransportSource::<User, _>::new(mock.clone());
//! let user = source.fetch_entity("1").await?;
//!
//! mock.verify(); // Ensures all expectations were met
//! ```
//!
//! Requests are matched strictly in order. A request with no expectation left, or with a
//! different operation name, panics.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;
use crate::transport::{GraphQLRequest, Transport};

/// An expected request and the scripted answer.
struct Expectation {
    operation_name: String,
    delay: Option<Duration>,
    response: Result<Value, TransportError>,
}

#[derive(Default)]
struct State {
    expectations: VecDeque<Expectation>,
    received: Vec<GraphQLRequest>,
}

/// A scripted [`Transport`]. Clones share their expectations.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Expects a request with the given operation name.
    pub fn expect_query(&self, operation_name: impl Into<String>) -> QueryExpectationBuilder {
        QueryExpectationBuilder {
            operation_name: operation_name.into(),
            state: self.state.clone(),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<GraphQLRequest> {
        self.state().received.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.state().expectations.len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &GraphQLRequest) -> Result<Value, TransportError> {
        let expectation = {
            let mut state = self.state();
            state.received.push(request.clone());
            state.expectations.pop_front()
        };

        let Some(expectation) = expectation else {
            panic!("Unexpected request: {}", request.operation_name);
        };
        if expectation.operation_name != request.operation_name {
            panic!(
                "Expected {}, received {}",
                expectation.operation_name, request.operation_name
            );
        }

        if let Some(delay) = expectation.delay {
            tokio::time::sleep(delay).await;
        }
        expectation.response
    }
}

/// Builder for query expectations.
pub struct QueryExpectationBuilder {
    operation_name: String,
    state: Arc<Mutex<State>>,
}

impl QueryExpectationBuilder {
    fn push(self, delay: Option<Duration>, response: Result<Value, TransportError>) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.expectations.push_back(Expectation {
            operation_name: self.operation_name,
            delay,
            response,
        });
    }

    /// Answers with `envelope`.
    pub fn return_ok(self, envelope: Value) {
        self.push(None, Ok(envelope));
    }

    /// Fails the call with `error`.
    pub fn return_err(self, error: TransportError) {
        self.push(None, Err(error));
    }

    /// Answers with `envelope` once `delay` has passed.
    pub fn return_after(self, delay: Duration, envelope: Value) {
        self.push(Some(delay), Ok(envelope));
    }
}
