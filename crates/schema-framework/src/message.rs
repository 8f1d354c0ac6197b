//! # Store Messages
//!
//! The requests a [`StoreClient`](crate::StoreClient) sends to its
//! [`StoreActor`](crate::StoreActor).

use tokio::sync::oneshot;

use crate::error::DataAccessError;
use crate::object::GraphQLObject;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, DataAccessError>>;

/// Internal message type sent to the store actor.
///
/// Reads map onto the two contract operations. `Insert` is how a store is filled after
/// startup. Dropping the `respond_to` receiver abandons the call; the actor notices the
/// send failure and carries on.
#[derive(Debug)]
pub enum StoreRequest<T: GraphQLObject> {
    Get {
        id: String,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Insert {
        entity: T,
        respond_to: Response<()>,
    },
}
