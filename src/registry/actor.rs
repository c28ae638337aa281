//! # Registry Actor
//!
//! The server half of the registry: it exclusively owns the identifier
//! counter and the id-to-person mapping, and processes requests sequentially
//! from an mpsc channel.
//!
//! **Concurrency model**: the sequential message loop *is* the single
//! critical section guarding the collection and the counter. Identifier
//! assignment and insertion happen inside one loop iteration, so no two
//! callers can receive the same identifier and no reader can observe a
//! half-inserted record — without a `Mutex` or `RwLock` anywhere.

use crate::model::{Person, PersonId, Statistics};
use crate::registry::client::RegistryClient;
use crate::registry::error::RegistryError;
use crate::registry::message::RegistryRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the live record set and assigns identifiers.
///
/// Constructed once per process by the composition root and consumed by
/// [`run`](RegistryActor::run); all interaction goes through
/// [`RegistryClient`] handles.
pub struct RegistryActor {
    receiver: mpsc::Receiver<RegistryRequest>,
    store: HashMap<PersonId, Person>,
    next_id: u32,
}

impl RegistryActor {
    /// Creates the actor and its first client.
    ///
    /// `buffer_size` is the mpsc channel capacity; senders wait when it is
    /// full.
    pub fn new(buffer_size: usize) -> (Self, RegistryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = RegistryClient::new(sender);
        (actor, client)
    }

    /// Runs the request loop until every client has been dropped.
    ///
    /// The counter increments exactly once per successful add. Validation
    /// happens *before* an identifier is assigned, so a rejected payload
    /// leaves the sequence untouched.
    pub async fn run(mut self) {
        info!("Registry started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RegistryRequest::Add { params, respond_to } => {
                    debug!(?params, "Add");
                    match Person::from_create(params) {
                        Ok(person) => {
                            let id = PersonId(self.next_id);
                            self.next_id += 1;
                            let role = person.role();
                            self.store.insert(id, person);
                            info!(%id, %role, size = self.store.len(), "Added");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(error = %e, "Add rejected");
                            let _ = respond_to.send(Err(RegistryError::Validation(e)));
                        }
                    }
                }
                RegistryRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(%id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RegistryRequest::List { respond_to } => {
                    let mut entries: Vec<(PersonId, Person)> = self
                        .store
                        .iter()
                        .map(|(id, person)| (*id, person.clone()))
                        .collect();
                    entries.sort_by_key(|(id, _)| *id);
                    debug!(size = entries.len(), "List");
                    let _ = respond_to.send(Ok(entries));
                }
                RegistryRequest::Remove { id, respond_to } => {
                    // Deletion is intentionally unfinished. Distinguish "no
                    // such record" from "operation unsupported", and mutate
                    // nothing either way.
                    if self.store.contains_key(&id) {
                        warn!(%id, "Remove requested but not supported");
                        let _ = respond_to.send(Err(RegistryError::NotImplemented("remove")));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(RegistryError::NotFound(id)));
                    }
                }
                RegistryRequest::Statistics { respond_to } => {
                    let stats = Statistics::from_persons(self.store.values());
                    debug!(count = stats.count, "Statistics");
                    let _ = respond_to.send(Ok(stats));
                }
            }
        }

        info!(size = self.store.len(), "Registry shutdown");
    }
}
