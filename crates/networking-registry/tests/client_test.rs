use networking_registry::clients::{PodNetworkClient, ResourceClient};
use networking_registry::model::{add_to_scheme, PodNetwork, PodNetworkAttachment};
use networking_registry::pod_network::{PodNetworkError, PodNetworkStrategy};
use networking_registry::pod_network_attachment::{
    PodNetworkAttachmentError, PodNetworkAttachmentStrategy,
};
use registry_framework::field::ErrorType;
use registry_framework::mock::MockClient;
use registry_framework::names::SimpleNameGenerator;
use registry_framework::scheme::Scheme;
use registry_framework::{Persisted, StoreError};
use std::sync::Arc;

fn attachment_strategy() -> Arc<PodNetworkAttachmentStrategy> {
    let mut scheme = Scheme::new();
    add_to_scheme(&mut scheme);
    Arc::new(PodNetworkAttachmentStrategy::new(
        Arc::new(scheme),
        Arc::new(SimpleNameGenerator),
    ))
}

/// Real attachment store with a mocked PodNetwork dependency.
///
/// - Real PodNetworkAttachment store (validation runs for real)
/// - Mocked PodNetwork client (isolates the existence check)
#[tokio::test]
async fn test_checked_create_with_mocked_networks() {
    let mut network_mock = MockClient::<PodNetworkStrategy>::new();
    network_mock
        .expect_get("default")
        .return_ok(Some(PodNetwork::new("default", "example.com/macvlan")));
    network_mock.expect_get("missing").return_ok(None);
    let networks = PodNetworkClient::new(network_mock.client());

    let (store, generic_client) =
        networking_registry::pod_network_attachment::new(attachment_strategy(), 8);
    let attachments = generic_client;
    let store_handle = tokio::spawn(store.run());

    let created = attachments
        .create_pod_network_attachment_checked(
            &networks,
            PodNetworkAttachment::new("pna", "default"),
        )
        .await
        .expect("attachment to an existing network");
    assert_eq!(created.object.spec.pod_network_name, "default");

    let err = attachments
        .create_pod_network_attachment_checked(
            &networks,
            PodNetworkAttachment::new("orphan", "missing"),
        )
        .await
        .unwrap_err();
    let errors = err.field_errors().expect("field errors");
    assert_eq!(errors.len(), 1);
    let field_error = errors.iter().next().unwrap();
    assert_eq!(field_error.field, "spec.podNetworkName");
    assert_eq!(field_error.error_type, ErrorType::NotFound);

    // Only the first attachment reached the store
    assert_eq!(attachments.list().await.unwrap().len(), 1);

    network_mock.verify();

    drop(attachments);
    store_handle.await.unwrap();
}

/// Pure mock: the typed client maps every store error to its own variant.
#[tokio::test]
async fn test_pod_network_client_maps_store_errors() {
    let mut mock = MockClient::<PodNetworkStrategy>::new();
    mock.expect_create().return_err(StoreError::AlreadyExists {
        kind: "PodNetwork".into(),
        name: "default".into(),
    });
    mock.expect_update().return_err(StoreError::Forbidden {
        kind: "PodNetwork".into(),
        name: "ghost".into(),
        reason: "no such object".into(),
    });
    mock.expect_delete("gone").return_err(StoreError::NotFound {
        kind: "PodNetwork".into(),
        name: "gone".into(),
    });
    mock.expect_list().return_err(StoreError::StoreDropped);

    let client = PodNetworkClient::new(mock.client());

    assert_eq!(
        client
            .create_pod_network(PodNetwork::new("default", ""))
            .await
            .unwrap_err(),
        PodNetworkError::AlreadyExists("default".into())
    );
    assert_eq!(
        client
            .update_pod_network(PodNetwork::new("ghost", ""))
            .await
            .unwrap_err(),
        PodNetworkError::Forbidden("no such object".into())
    );
    assert_eq!(
        client.delete("gone").await.unwrap_err(),
        PodNetworkError::NotFound("gone".into())
    );
    assert!(matches!(
        client.list().await.unwrap_err(),
        PodNetworkError::StoreCommunication(_)
    ));

    mock.verify();
}

/// Pure mock: read-modify-write sends the read object back with its revision.
#[tokio::test]
async fn test_modify_pod_network_round_trip() {
    let mut stored = PodNetwork::new("default", "example.com/macvlan");
    stored.metadata.resource_version = Some("7".into());

    let mut mock = MockClient::<PodNetworkStrategy>::new();
    mock.expect_get("default").return_ok(Some(stored.clone()));
    let mut disabled = stored.clone();
    disabled.spec.enabled = false;
    mock.expect_update().return_ok(Persisted {
        object: disabled,
        warnings: Vec::new(),
    });
    mock.expect_get("absent").return_ok(None);

    let client = PodNetworkClient::new(mock.client());

    let updated = client
        .modify_pod_network("default".to_string(), |pn| pn.spec.enabled = false)
        .await
        .unwrap();
    assert!(!updated.object.spec.enabled);

    let err = client
        .modify_pod_network("absent".to_string(), |_| {})
        .await
        .unwrap_err();
    assert_eq!(err, PodNetworkError::NotFound("absent".into()));

    mock.verify();
}

#[tokio::test]
async fn test_attachment_client_reports_store_closed() {
    let (store, generic_client) =
        networking_registry::pod_network_attachment::new(attachment_strategy(), 1);
    drop(store);
    let client = generic_client;

    let err = client
        .create_pod_network_attachment(PodNetworkAttachment::new("pna", "default"))
        .await
        .unwrap_err();
    assert!(matches!(err, PodNetworkAttachmentError::StoreCommunication(_)));
}
