//! Request types exchanged between [`RegistryClient`](crate::registry::RegistryClient)
//! and [`RegistryActor`](crate::registry::RegistryActor).

use crate::model::{Person, PersonCreate, PersonId, Statistics};
use crate::registry::RegistryError;
use tokio::sync::oneshot;

/// One-shot response channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, RegistryError>>;

/// The registry's operation set.
///
/// Each variant maps to one entry of the public contract: creation with
/// identifier assignment, point lookup, ordered snapshot listing, the
/// intentionally unsupported removal, and aggregate statistics. There is no
/// update variant: records are immutable in place, and a future update would
/// be replace-by-identifier, not field mutation.
#[derive(Debug)]
pub enum RegistryRequest {
    Add {
        params: PersonCreate,
        respond_to: Response<PersonId>,
    },
    Get {
        id: PersonId,
        respond_to: Response<Option<Person>>,
    },
    List {
        respond_to: Response<Vec<(PersonId, Person)>>,
    },
    Remove {
        id: PersonId,
        respond_to: Response<()>,
    },
    Statistics {
        respond_to: Response<Statistics>,
    },
}
