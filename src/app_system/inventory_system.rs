use tracing::{error, info};
use crate::config::DatabaseConfig;
use crate::error::StorageError;
use crate::store::{StoreActor, StoreClient};

/// Owns the storage side of a run.
///
/// `start` acquires the connection and spawns the store actor; `shutdown`
/// releases them. Callers must reach `shutdown` on every exit path.
pub struct InventorySystem {
    pub product_client: StoreClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    pub async fn start(config: &DatabaseConfig) -> Result<Self, StorageError> {
        info!("Starting inventory system");
        let conn = StoreActor::connect(&config.url).await?;
        let (actor, product_client) = StoreActor::new(32, conn);
        let handle = tokio::spawn(actor.run());

        Ok(Self {
            product_client,
            handle,
        })
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory system...");
        // The actor stops and closes its connection once the last client is gone.
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Store task failed: {:?}", e);
            return Err(format!("Store task failed: {:?}", e));
        }

        info!("Inventory system shutdown complete.");
        Ok(())
    }
}
