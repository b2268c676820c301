use thiserror::Error;
use tracing::{error, info};

use crate::clients::ProductClient;
use crate::config::InventoryConfig;
use crate::error::ScreenError;
use crate::product_actor;
use crate::screens::{CreateScreen, EditScreen, ListScreen};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Starts the product actor and hands out screens wired to it.
///
/// Must be created inside a tokio runtime.
pub struct InventorySystem {
    pub product_client: ProductClient,
    config: InventoryConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl InventorySystem {
    pub fn new(config: InventoryConfig) -> Self {
        info!(
            buffer_size = config.actor.buffer_size,
            min_name_length = config.validation.min_name_length,
            "Starting inventory system"
        );

        let (product_actor, product_client) = product_actor::new(config.actor.buffer_size);
        let product_handle = tokio::spawn(product_actor.run());

        Self {
            product_client,
            config,
            handles: vec![product_handle],
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn list_screen(&self) -> ListScreen {
        ListScreen::new(self.product_client.clone(), self.config.stock.low_stock_threshold)
    }

    pub fn create_screen(&self) -> CreateScreen {
        CreateScreen::new(self.product_client.clone(), self.config.validation)
    }

    pub async fn edit_screen(&self, code: u64) -> Result<EditScreen, ScreenError> {
        EditScreen::load(self.product_client.clone(), self.config.validation, code).await
    }

    /// Drops the system's client and waits for the actor to stop.
    ///
    /// The actor stops once every client is gone, so screens handed out by
    /// this system must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
