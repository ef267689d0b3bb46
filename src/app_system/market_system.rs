use tracing::{error, info, instrument};
use crate::app_system::MarketConfig;
use crate::client::MarketClient;
use crate::service::MarketService;

/// Owns the running marketplace service and hands out its client.
///
/// There is exactly one service per system, so all marketplace state lives
/// behind a single mailbox.
pub struct MarketSystem {
    pub client: MarketClient,
    handle: tokio::task::JoinHandle<()>,
}

impl MarketSystem {
    /// Builds, optionally seeds, and spawns the service. Must be called from
    /// within a tokio runtime.
    #[instrument(name = "market_system", skip(config), fields(buffer_size = config.buffer_size, seed = config.seed))]
    pub fn new(config: &MarketConfig) -> Self {
        info!("Starting marketplace system");

        let (mut service, client) = MarketService::new(config.buffer_size);
        if config.seed {
            service.seed();
        }
        let handle = tokio::spawn(service.run());

        info!("Marketplace system started");
        Self { client, handle }
    }

    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down marketplace system");

        // A closed mailbox means the service is already gone.
        let _ = self.client.shutdown().await;
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Service shutdown error");
            return Err(format!("Marketplace service failed: {}", e));
        }

        info!("Marketplace system shutdown complete");
        Ok(())
    }
}
