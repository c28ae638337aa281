//! The narrow contract the core exposes to its boundary collaborator.

use crate::clients::PersonError;
use crate::model::{EmployeeCreate, ManagerCreate, Person, PersonId, Statistics};
use async_trait::async_trait;

/// Everything a collaborator (an HTTP layer, a CLI, a test harness) may ask
/// of the person registry.
///
/// Implementations are expected to be cheap to clone and safe to share
/// across tasks; [`PersonClient`](crate::clients::PersonClient) is the
/// channel-backed implementation.
#[async_trait]
pub trait PersonDirectory: Send + Sync {
    /// Validates and registers an employee, returning the assigned
    /// identifier.
    async fn add_employee(&self, params: EmployeeCreate) -> Result<PersonId, PersonError>;

    /// Validates and registers a manager, returning the assigned identifier.
    async fn add_manager(&self, params: ManagerCreate) -> Result<PersonId, PersonError>;

    /// Fetches a single record; [`PersonError::NotFound`] when the
    /// identifier is unknown.
    async fn person(&self, id: PersonId) -> Result<Person, PersonError>;

    /// Snapshot of all records, ordered by ascending identifier.
    async fn persons(&self) -> Result<Vec<(PersonId, Person)>, PersonError>;

    /// Deletion is not supported yet: [`PersonError::NotFound`] for unknown
    /// identifiers, [`PersonError::NotImplemented`] for known ones. Never
    /// mutates the registry.
    async fn remove_person(&self, id: PersonId) -> Result<(), PersonError>;

    /// Aggregate metrics over the current record set.
    async fn statistics(&self) -> Result<Statistics, PersonError>;
}
