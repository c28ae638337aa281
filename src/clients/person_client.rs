//! # Person Client
//!
//! The channel-backed implementation of [`PersonDirectory`]. It wraps a
//! [`RegistryClient`] and maps engine-level errors into the caller-facing
//! [`PersonError`] taxonomy.

use crate::clients::{PersonDirectory, PersonError};
use crate::model::{EmployeeCreate, ManagerCreate, Person, PersonCreate, PersonId, Statistics};
use crate::registry::RegistryClient;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Directory handle backed by the registry actor. Cheap to clone.
#[derive(Clone)]
pub struct PersonClient {
    inner: RegistryClient,
}

impl PersonClient {
    pub fn new(inner: RegistryClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl PersonDirectory for PersonClient {
    #[instrument(skip(self))]
    async fn add_employee(&self, params: EmployeeCreate) -> Result<PersonId, PersonError> {
        debug!("Sending request");
        self.inner
            .add(PersonCreate::Employee(params))
            .await
            .map_err(PersonError::from)
    }

    #[instrument(skip(self))]
    async fn add_manager(&self, params: ManagerCreate) -> Result<PersonId, PersonError> {
        debug!("Sending request");
        self.inner
            .add(PersonCreate::Manager(params))
            .await
            .map_err(PersonError::from)
    }

    #[instrument(skip(self))]
    async fn person(&self, id: PersonId) -> Result<Person, PersonError> {
        debug!("Sending request");
        self.inner
            .get(id)
            .await
            .map_err(PersonError::from)?
            .ok_or(PersonError::NotFound(id))
    }

    #[instrument(skip(self))]
    async fn persons(&self) -> Result<Vec<(PersonId, Person)>, PersonError> {
        debug!("Sending request");
        self.inner.list().await.map_err(PersonError::from)
    }

    #[instrument(skip(self))]
    async fn remove_person(&self, id: PersonId) -> Result<(), PersonError> {
        debug!("Sending request");
        self.inner.remove(id).await.map_err(PersonError::from)
    }

    #[instrument(skip(self))]
    async fn statistics(&self) -> Result<Statistics, PersonError> {
        debug!("Sending request");
        self.inner.statistics().await.map_err(PersonError::from)
    }
}
