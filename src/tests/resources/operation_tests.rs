use crate::{
    ClientConfig, ClusterDetails, ClusterHost, ConsoleClient, ConsoleError, OperationGate,
    OperationGateConfig, OperationName, OperationRequest, OperationRunner, RunningOperations,
    SystemdUnit, UiState,
    core::{
        domain::value_object::{AccessToken, ConsoleUrl},
        infrastructure::api_client::ApiClient,
    },
};
use tracing_test::traced_test;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

const CLUSTER_ID: &str = "cluster-1";

fn create_test_client(mock_server: &MockServer) -> ConsoleClient {
    let base_url = ConsoleUrl::new(mock_server.uri()).unwrap();
    let token = AccessToken::new("test-token").unwrap();
    ConsoleClient {
        api_client: ApiClient::new(base_url, token, &ClientConfig::default()).unwrap(),
    }
}

fn cluster_host() -> ClusterHost {
    ClusterHost {
        id: "host-1".to_string(),
        name: "vmhana01".to_string(),
        status: "Online".to_string(),
        systemd_units: vec![SystemdUnit {
            name: "pacemaker.service".to_string(),
            unit_file_state: "disabled".to_string(),
        }],
    }
}

fn gate(registry_operation: Option<crate::RunningOperation>) -> OperationGate {
    OperationGate::new(OperationGateConfig {
        cluster_id: CLUSTER_ID.to_string(),
        running_operation: registry_operation,
    })
}

#[tokio::test]
#[traced_test]
async fn test_cluster_maintenance_flow() {
    let mock_server = MockServer::start().await;
    let runner = OperationRunner::new(create_test_client(&mock_server), RunningOperations::new());

    Mock::given(method("POST"))
        .and(path(
            "/api/v1/clusters/cluster-1/operations/cluster_maintenance_change",
        ))
        .and(body_json(serde_json::json!({"maintenance": true})))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(serde_json::json!({"operation_id": "op-1"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let ops = gate(None).cluster_operations(&ClusterDetails::default(), true);
    let mut state = UiState::default();
    ops[0].click(&mut state);

    let request = OperationRequest::from_ui_state(CLUSTER_ID, &state).unwrap();
    let accepted = runner.run(&request).await.unwrap();
    assert_eq!(accepted.operation_id, "op-1");
    assert!(logs_contain("operation accepted"));

    let running = runner.registry().get(CLUSTER_ID).await;
    let ops = gate(running).cluster_operations(&ClusterDetails::default(), true);
    assert!(ops[0].running);
    assert!(ops[0].disabled);

    runner.registry().complete(CLUSTER_ID).await;
    let running = runner.registry().get(CLUSTER_ID).await;
    let ops = gate(running).cluster_operations(&ClusterDetails::default(), true);
    assert!(!ops[0].running);
    assert!(!ops[0].disabled);
}

#[tokio::test]
async fn test_pacemaker_enable_flow() {
    let mock_server = MockServer::start().await;
    let runner = OperationRunner::new(create_test_client(&mock_server), RunningOperations::new());

    Mock::given(method("POST"))
        .and(path(
            "/api/v1/clusters/cluster-1/hosts/host-1/operations/pacemaker_enable",
        ))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(serde_json::json!({"operation_id": "op-2"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let host = cluster_host();
    let ops = gate(None).cluster_host_operations(&host);
    let mut state = UiState::default();
    ops[1].click(&mut state);
    assert_eq!(state.current_host.as_ref(), Some(&host));

    let request = OperationRequest::from_ui_state(CLUSTER_ID, &state).unwrap();
    runner.run(&request).await.unwrap();

    let running = runner.registry().get(CLUSTER_ID).await;
    let ops = gate(running).cluster_host_operations(&host);
    assert!(!ops[0].running);
    assert!(ops[1].running);
    assert!(!ops[2].running);
    assert!(ops.iter().all(|op| op.disabled));
}

#[tokio::test]
async fn test_forbidden_operation_flow() {
    let mock_server = MockServer::start().await;
    let runner = OperationRunner::new(create_test_client(&mock_server), RunningOperations::new());

    Mock::given(method("POST"))
        .and(path(
            "/api/v1/clusters/cluster-1/operations/cluster_maintenance_change",
        ))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": [{"title": "Forbidden", "detail": "Unauthorized"}]
        })))
        .mount(&mock_server)
        .await;

    let request = OperationRequest::cluster(
        CLUSTER_ID,
        OperationName::ClusterMaintenanceChange,
        serde_json::json!({"maintenance": false, "resource_id": "rsc_ip"})
            .as_object()
            .cloned()
            .unwrap(),
    );

    let result = runner.run(&request).await;
    match result {
        Err(ConsoleError::Forbidden { errors }) => assert_eq!(errors, vec!["Unauthorized"]),
        other => panic!("Expected forbidden, got {:?}", other),
    }

    let running = runner.registry().get(CLUSTER_ID).await.unwrap();
    assert!(running.forbidden);

    let ops = gate(Some(running)).cluster_host_operations(&cluster_host());
    assert!(ops.iter().all(|op| op.disabled && !op.running));

    assert!(runner.registry().clear_forbidden(CLUSTER_ID).await);
    assert!(runner.registry().get(CLUSTER_ID).await.is_none());
}

#[tokio::test]
async fn test_server_error_releases_cluster() {
    let mock_server = MockServer::start().await;
    let runner = OperationRunner::new(create_test_client(&mock_server), RunningOperations::new());

    Mock::given(method("POST"))
        .and(path(
            "/api/v1/clusters/cluster-1/operations/cluster_resource_refresh",
        ))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let request = OperationRequest::cluster(
        CLUSTER_ID,
        OperationName::ClusterResourceRefresh,
        Default::default(),
    );

    let result = runner.run(&request).await;
    assert!(matches!(result, Err(ConsoleError::Api { status: 500, .. })));
    assert!(runner.registry().get(CLUSTER_ID).await.is_none());
}

#[tokio::test]
async fn test_identifiers_stay_within_their_path_segment() {
    let mock_server = MockServer::start().await;
    let runner = OperationRunner::new(create_test_client(&mock_server), RunningOperations::new());

    Mock::given(method("POST"))
        .and(path(
            "/api/v1/clusters/east%2F1/hosts/h%3F1%231/operations/pacemaker_disable",
        ))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(serde_json::json!({"operation_id": "op-3"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = OperationRequest::cluster_host(
        "east/1",
        "h?1#1",
        OperationName::PacemakerDisable,
        Default::default(),
    );

    let accepted = runner.run(&request).await.unwrap();
    assert_eq!(accepted.operation_id, "op-3");
}
