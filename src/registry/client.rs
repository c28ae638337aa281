//! # Registry Client
//!
//! The channel-level handle for talking to a [`RegistryActor`](crate::registry::RegistryActor).
//! It holds only a sender, so cloning is cheap and any number of concurrent
//! callers can share the registry.

use crate::model::{Person, PersonCreate, PersonId, Statistics};
use crate::registry::error::RegistryError;
use crate::registry::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

/// Sends typed requests to the registry and awaits the oneshot reply.
#[derive(Clone)]
pub struct RegistryClient {
    sender: mpsc::Sender<RegistryRequest>,
}

impl RegistryClient {
    pub fn new(sender: mpsc::Sender<RegistryRequest>) -> Self {
        Self { sender }
    }

    /// Validates, stores, and returns the assigned identifier.
    pub async fn add(&self, params: PersonCreate) -> Result<PersonId, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Add { params, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// O(1) lookup; `None` when the identifier is unknown.
    pub async fn get(&self, id: PersonId) -> Result<Option<Person>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Get { id, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Cloned snapshot of all records, ordered by ascending identifier.
    pub async fn list(&self) -> Result<Vec<(PersonId, Person)>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::List { respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Always fails: [`RegistryError::NotFound`] for unknown identifiers,
    /// [`RegistryError::NotImplemented`] otherwise.
    pub async fn remove(&self, id: PersonId) -> Result<(), RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Remove { id, respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }

    /// Aggregates over the registry's current contents.
    pub async fn statistics(&self) -> Result<Statistics, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Statistics { respond_to })
            .await
            .map_err(|_| RegistryError::RegistryClosed)?;
        response.await.map_err(|_| RegistryError::RegistryDropped)?
    }
}
