use crate::clients::{PodNetworkAttachmentClient, PodNetworkClient};
use crate::config::{ConfigError, RegistryConfig};
use crate::model::add_to_scheme;
use crate::pod_network::PodNetworkStrategy;
use crate::pod_network_attachment::PodNetworkAttachmentStrategy;
use registry_framework::names::{NameGenerator, SimpleNameGenerator};
use registry_framework::scheme::{ObjectTyper, Scheme};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Refusing to start: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the networking registry.
///
/// `NetworkingRegistry` is responsible for:
/// - **Construction**: Building the scheme, the name generator and one
///   strategy per kind, once, at startup
/// - **Lifecycle Management**: Starting and stopping one store per kind
/// - **Access**: Handing out the typed clients
///
/// # Example
///
/// ```ignore
/// let registry = NetworkingRegistry::start(&RegistryConfig::default())?;
///
/// let network = registry.pod_networks.create_pod_network(pn).await?;
/// let attachment = registry.attachments.create_pod_network_attachment(pna).await?;
///
/// // Gracefully shut down when done
/// registry.shutdown().await?;
/// ```
pub struct NetworkingRegistry {
    /// Client for the PodNetwork store
    pub pod_networks: PodNetworkClient,

    /// Client for the PodNetworkAttachment store
    pub attachments: PodNetworkAttachmentClient,

    /// Task handles for both stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl NetworkingRegistry {
    /// Creates both stores and starts them.
    ///
    /// This method:
    /// 1. Rejects an unusable config (a zero `store_buffer_size`) before
    ///    anything is spawned
    /// 2. Registers both kinds in a shared `Scheme`
    /// 3. Builds each kind's strategy with the scheme and a name generator injected
    /// 4. Spawns each store in its own Tokio task
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: &RegistryConfig) -> Result<Self, LifecycleError> {
        config.validate()?;

        let mut scheme = Scheme::new();
        add_to_scheme(&mut scheme);
        let typer: Arc<dyn ObjectTyper> = Arc::new(scheme);
        let names: Arc<dyn NameGenerator> = Arc::new(SimpleNameGenerator);

        let network_strategy = PodNetworkStrategy::new(typer.clone(), names.clone());
        let attachment_strategy = PodNetworkAttachmentStrategy::new(typer, names);

        let (network_store, pod_networks) =
            crate::pod_network::new(Arc::new(network_strategy), config.store_buffer_size);
        let (attachment_store, attachments) = crate::pod_network_attachment::new(
            Arc::new(attachment_strategy),
            config.store_buffer_size,
        );

        let network_handle = tokio::spawn(network_store.run());
        let attachment_handle = tokio::spawn(attachment_store.run());
        info!(buffer_size = config.store_buffer_size, "Registry started");

        Ok(Self {
            pod_networks,
            attachments,
            handles: vec![network_handle, attachment_handle],
        })
    }

    /// Gracefully shuts down both stores.
    ///
    /// Dropping the clients closes the store channels; each store drains what
    /// is queued and exits its loop. Clones of the clients held elsewhere keep
    /// their store alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down registry...");

        drop(self.pod_networks);
        drop(self.attachments);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
