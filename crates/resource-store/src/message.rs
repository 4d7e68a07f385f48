//! # Generic Messages
//!
//! Requests sent from a [`ResourceClient`](crate::ResourceClient) to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::StoredEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// The variants mirror a document store's collection API: create a record, read one by id,
/// list with an optional filter and limit, and update or delete by filter. Filter-based
/// writes answer with the number of records touched, and zero means nothing matched.
#[derive(Debug)]
pub enum ResourceRequest<T: StoredEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: Option<T::Filter>,
        limit: Option<usize>,
        respond_to: Response<Vec<T>>,
    },
    UpdateWhere {
        filter: T::Filter,
        update: T::Update,
        respond_to: Response<usize>,
    },
    DeleteWhere {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
}
