use crate::{
    ClientConfig, ConsoleClient, ConsoleError, GroupedResource,
    core::{
        domain::value_object::{AccessToken, ConsoleUrl},
        infrastructure::api_client::ApiClient,
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

fn create_test_client(mock_server: &MockServer) -> ConsoleClient {
    let base_url = ConsoleUrl::new(mock_server.uri()).unwrap();
    let token = AccessToken::new("test-token").unwrap();
    ConsoleClient {
        api_client: ApiClient::new(base_url, token, &ClientConfig::default()).unwrap(),
    }
}

async fn mount_inventory(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "cluster-1",
                "name": "hana_cluster",
                "details": {
                    "maintenance_mode": false,
                    "resources": [
                        {
                            "id": "stonith-sbd",
                            "node": "vmhana01",
                            "parent": null,
                            "type": "stonith:external/sbd",
                            "role": "Started",
                            "status": "Active",
                            "managed": true,
                            "fail_count": "0"
                        },
                        {
                            "id": "rsc_SAPHana_PRD_HDB00",
                            "node": "vmhana01",
                            "parent": {
                                "id": "msl_SAPHana_PRD_HDB00",
                                "multi_state": true,
                                "managed": true
                            },
                            "type": "ocf::suse:SAPHana",
                            "role": "Promoted",
                            "status": "Active",
                            "managed": true,
                            "fail_count": "0"
                        },
                        {
                            "id": "rsc_SAPHana_PRD_HDB00",
                            "node": "vmhana02",
                            "parent": {
                                "id": "msl_SAPHana_PRD_HDB00",
                                "multi_state": true,
                                "managed": true
                            },
                            "type": "ocf::suse:SAPHana",
                            "role": "Unpromoted",
                            "status": "Active",
                            "managed": true,
                            "fail_count": "0"
                        },
                        {
                            "id": "rsc_ip_PRD_HDB00",
                            "node": "vmhana03",
                            "parent": {
                                "id": "g_ip_PRD_HDB00",
                                "multi_state": null,
                                "managed": false
                            },
                            "type": "ocf::heartbeat:IPaddr2",
                            "role": "Started",
                            "status": "Active",
                            "managed": false,
                            "fail_count": "0"
                        }
                    ]
                }
            },
            {
                "id": "cluster-2",
                "name": "unknown_cluster",
                "details": null
            }
        ])))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "host-1", "hostname": "vmhana01", "agent_version": "2.3.0"},
            {"id": "host-2", "hostname": "vmhana02"}
        ])))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_clusters_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_inventory(&mock_server).await;

    let clusters = client.clusters().await.unwrap();
    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].name, "hana_cluster");
    let details = clusters[0].details.as_ref().unwrap();
    assert!(!details.maintenance_mode);
    assert_eq!(details.resources.len(), 4);
    assert!(clusters[1].details.is_none());
}

#[tokio::test]
async fn test_hosts_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_inventory(&mock_server).await;

    let hosts = client.hosts().await.unwrap();
    assert_eq!(hosts.len(), 2);
    assert_eq!(hosts[1].hostname, "vmhana02");
}

#[tokio::test]
async fn test_grouped_resources() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_inventory(&mock_server).await;

    let rows = client.grouped_resources("cluster-1").await.unwrap();
    assert_eq!(rows.len(), 3);

    match &rows[0] {
        GroupedResource::Single(row) => {
            assert_eq!(row.resource.id, "stonith-sbd");
            assert_eq!(row.host_id.as_deref(), Some("host-1"));
        }
        GroupedResource::Group(_) => panic!("Expected a standalone resource"),
    }

    match &rows[1] {
        GroupedResource::Group(group) => {
            assert_eq!(group.parent.id, "msl_SAPHana_PRD_HDB00");
            assert_eq!(group.group_type, "ocf::suse:SAPHana");
            let host_ids: Vec<Option<&str>> = group
                .children
                .iter()
                .map(|row| row.host_id.as_deref())
                .collect();
            assert_eq!(host_ids, vec![Some("host-1"), Some("host-2")]);
        }
        GroupedResource::Single(_) => panic!("Expected a group"),
    }

    match &rows[2] {
        GroupedResource::Group(group) => {
            assert_eq!(group.group_type, "Group");
            assert!(!group.parent.managed);
            assert_eq!(group.children[0].host_id, None);
        }
        GroupedResource::Single(_) => panic!("Expected a group"),
    }
}

#[tokio::test]
async fn test_grouped_resources_without_details() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_inventory(&mock_server).await;

    let rows = client.grouped_resources("cluster-2").await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_grouped_resources_unknown_cluster() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_inventory(&mock_server).await;

    let result = client.grouped_resources("missing").await;
    assert!(matches!(result, Err(ConsoleError::NotFound(_))));
}

#[tokio::test]
async fn test_clusters_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/api/v1/clusters"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = client.clusters().await;
    assert!(matches!(result, Err(ConsoleError::Authentication(_))));
}
