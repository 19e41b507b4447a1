use tracing::{debug, error, info};

use crate::actor_framework::FormService;
use crate::clients::FormClient;
use crate::form_actor::FormController;
use crate::store::{is_valid_key, FileStorage, RecordStore, Storage, StorageError};

use super::config::AppConfig;
use super::error::SystemError;

/// The running application: one form service and a client for it.
///
/// Responsible for opening storage, hydrating the store, starting the
/// service, and waiting for it on shutdown.
pub struct FormSystem {
    pub client: FormClient,
    handle: tokio::task::JoinHandle<()>,
}

impl FormSystem {
    /// Starts the system on file storage under `config.data_dir`.
    ///
    /// Fails before hydrating if the storage key cannot name a slot file.
    pub fn start(config: &AppConfig) -> Result<Self, SystemError> {
        if !is_valid_key(&config.storage_key) {
            return Err(StorageError::InvalidKey(config.storage_key.clone()).into());
        }
        let storage = FileStorage::open(&config.data_dir)?;
        info!(data_dir = %storage.dir().display(), "Opened file storage");
        Ok(Self::with_storage(storage, config))
    }

    /// Starts the system on any storage backend.
    pub fn with_storage<S: Storage>(storage: S, config: &AppConfig) -> Self {
        let store = RecordStore::load_initial(storage, config.storage_key.clone());
        let controller = FormController::new(store);
        let (service, client) = FormService::new(config.channel_capacity, controller);
        let handle = tokio::spawn(service.run());

        info!(key = %config.storage_key, "Form system started");
        Self { client, handle }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        // Already-stopped services are fine; only a panicked task is an error.
        if let Err(e) = self.client.shutdown().await {
            debug!(error = %e, "Service already stopped");
        }
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Form service task failed: {:?}", e);
            return Err(SystemError::TaskFailed(format!("{e:?}")));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
