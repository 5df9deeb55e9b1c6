use crate::config::{ConfigError, DirectoryConfig};
use crate::source::{HttpPageSource, PageSource};
use crate::store::{DirectoryActor, DirectoryClient, DirectoryError};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the directory view.
///
/// `DirectorySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the directory actor
/// - **Dependency Wiring**: Injecting the page source into the actor
///
/// # Example
///
/// ```ignore
/// let system = DirectorySystem::new(&DirectoryConfig::default())?;
///
/// let view = system.client.loaded().await?;
/// let view = system.client.search("bluth").await?;
///
/// system.shutdown().await?;
/// ```
pub struct DirectorySystem {
    /// Client for interacting with the directory actor
    pub client: DirectoryClient,

    handle: tokio::task::JoinHandle<()>,
}

impl DirectorySystem {
    /// Starts a directory backed by the configured HTTP endpoint.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &DirectoryConfig) -> Result<Self, ConfigError> {
        let source =
            HttpPageSource::with_timeout(config.endpoint_url()?, config.request_timeout())?;
        info!(endpoint = %source.endpoint(), "Using HTTP page source");
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Starts a directory backed by any [`PageSource`].
    pub fn with_source(config: &DirectoryConfig, source: Arc<dyn PageSource>) -> Self {
        let (actor, client) = DirectoryActor::new(config.channel_capacity());
        let handle = tokio::spawn(actor.run(source));
        Self { client, handle }
    }

    /// Gracefully shuts down the directory.
    ///
    /// Dropping the client closes the request channel; the actor drains what
    /// is queued and exits. Clones of the client held elsewhere keep the actor
    /// alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), DirectoryError> {
        info!("Shutting down directory...");
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Directory actor task failed");
            return Err(DirectoryError::TaskFailed(e.to_string()));
        }

        info!("Directory shutdown complete.");
        Ok(())
    }
}
