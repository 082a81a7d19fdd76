use networking_registry::clients::ResourceClient;
use networking_registry::config::RegistryConfig;
use networking_registry::lifecycle::{init_tracing, NetworkingRegistry};
use networking_registry::model::{ParametersRef, PodNetwork, PodNetworkAttachment};
use registry_framework::object::{self, Resource};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = RegistryConfig::from_env()?;
    init_tracing(config.log_format);

    info!("Starting networking registry");
    let registry = NetworkingRegistry::start(&config)?;

    // Create a network
    let mut network = PodNetwork::new("default", "example.com/macvlan");
    network
        .spec
        .parameters_refs
        .push(ParametersRef::new("example.com", "MacvlanConfig", "eth1"));

    let span = tracing::info_span!("network_creation");
    let network = async {
        info!("Creating PodNetwork");
        registry.pod_networks.create_pod_network(network).await
    }
    .instrument(span)
    .await?
    .object;
    info!(name = network.name(), uid = network.uid(), "PodNetwork created");

    // Attach to it, letting the store pick the name
    let attachment = PodNetworkAttachment {
        metadata: object::generated("default-"),
        ..PodNetworkAttachment::new("", "default")
    };
    let span = tracing::info_span!("attachment_creation");
    let attachment = async {
        info!("Creating PodNetworkAttachment");
        registry
            .attachments
            .create_pod_network_attachment_checked(&registry.pod_networks, attachment)
            .await
    }
    .instrument(span)
    .await?
    .object;
    info!(name = attachment.name(), "PodNetworkAttachment created");

    // Try to move the attachment to another network: rejected
    let mut moved = attachment.clone();
    moved.spec.pod_network_name = "other".into();
    match registry.attachments.update_pod_network_attachment(moved).await {
        Ok(_) => error!("Immutable field change was accepted"),
        Err(e) => info!(error = %e, "Update rejected as expected"),
    }

    let attachments = registry.attachments.list().await?;
    info!(count = attachments.len(), "Attachments stored");

    registry.shutdown().await?;

    info!("Registry stopped");
    Ok(())
}
