//! Show the resources and the available operations of every cluster.
//!
//! Reads `CONSOLE_URL` and `CONSOLE_ACCESS_TOKEN` from the environment, fetches the
//! inventory, and prints each cluster's grouped resources with the state of their
//! maintenance operation.

use cluster_console::{
    ConsoleClient, ConsoleResult, GroupedResource, OperationGate, OperationGateConfig,
    RunningOperations, group_resources,
};

#[tokio::main]
async fn main() -> ConsoleResult<()> {
    let url = std::env::var("CONSOLE_URL").unwrap_or_else(|_| "http://localhost:4000".into());
    let token = std::env::var("CONSOLE_ACCESS_TOKEN").unwrap_or_default();

    let client = ConsoleClient::builder()
        .base_url(url)?
        .access_token(token)?
        .rate_limit(5, 5)
        .build()?;

    let registry = RunningOperations::new();
    let hosts = client.hosts().await?;

    for cluster in client.clusters().await? {
        let gate = OperationGate::new(OperationGateConfig {
            cluster_id: cluster.id.clone(),
            running_operation: registry.get(&cluster.id).await,
        });
        let details = cluster.details.unwrap_or_default();

        let maintenance = &gate.cluster_operations(&details, !hosts.is_empty())[0];
        println!(
            "Cluster {} - {} (disabled: {})",
            cluster.name, maintenance.value, maintenance.disabled
        );

        for row in group_resources(&details.resources, &hosts) {
            let operation = &gate.resource_operations(&row)[0];
            match &row {
                GroupedResource::Group(group) => println!(
                    "  {} [{}] {} children - {} running: {}",
                    group.parent.id,
                    group.group_type,
                    group.children.len(),
                    operation.value,
                    operation.running
                ),
                GroupedResource::Single(single) => println!(
                    "  {} on {} - {} running: {}",
                    single.resource.id,
                    single.host_id.as_deref().unwrap_or("(unknown host)"),
                    operation.value,
                    operation.running
                ),
            }
        }
    }

    Ok(())
}
