use crate::clients::PersonClient;
use crate::registry::RegistryActor;
use tracing::{error, info};

/// Composition root for the person registry.
///
/// Constructs the registry exactly once, spawns its task, and hands out the
/// boundary-facing client. The registry's lifetime is the process's
/// lifetime: there is no reload or reset, only the graceful
/// [`shutdown`](RegistrySystem::shutdown) at exit.
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new();
/// let id = system.persons.add_employee(params).await?;
/// let stats = system.persons.statistics().await?;
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Directory handle; clone it freely for concurrent callers.
    pub persons: PersonClient,

    /// Handle of the running registry task, kept for graceful shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl RegistrySystem {
    /// Spawns the registry actor and wires up its client.
    pub fn new() -> Self {
        let (actor, registry_client) = RegistryActor::new(32);
        let handle = tokio::spawn(actor.run());

        Self {
            persons: PersonClient::new(registry_client),
            handle,
        }
    }

    /// Gracefully shuts the registry down.
    ///
    /// Dropping the client closes the request channel; the actor drains any
    /// queued messages, logs its final size, and exits. The join surfaces a
    /// panic inside the registry task, which is the only failure mode here.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down registry system...");

        drop(self.persons);

        if let Err(e) = self.handle.await {
            error!("Registry task failed: {:?}", e);
            return Err(format!("Registry task failed: {:?}", e));
        }

        info!("Registry system shutdown complete.");
        Ok(())
    }
}

impl Default for RegistrySystem {
    fn default() -> Self {
        Self::new()
    }
}
