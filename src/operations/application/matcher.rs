//! Predicates telling whether a running operation concerns a given target.
//!
//! None of these fail: missing metadata, targets or params simply do not match.

use crate::core::domain::model::operation::{
    OperationMetadata, OperationName, OperationParams, RunningOperation,
};

const NODE_ID: &str = "node_id";
const RESOURCE_ID: &str = "resource_id";

/// Normalizes both metadata shapes into one params object.
///
/// Fan-out metadata yields the arguments of its first target, single-agent metadata
/// its `params`.
#[must_use]
pub fn get_local_or_target_params(
    metadata: Option<&OperationMetadata>,
) -> Option<&OperationParams> {
    match metadata? {
        OperationMetadata::Fanout { targets, .. } => targets.first()?.arguments.as_ref(),
        OperationMetadata::Single { params, .. } => params.as_ref(),
    }
}

fn param_equals(operation: &RunningOperation, key: &str, expected: &str) -> bool {
    get_local_or_target_params(operation.metadata.as_ref())
        .and_then(|params| params.get(key))
        .and_then(serde_json::Value::as_str)
        == Some(expected)
}

/// True when `operation` belongs to `group_id` and is `name`.
#[must_use]
pub fn operation_running(
    operation: Option<&RunningOperation>,
    group_id: &str,
    name: OperationName,
) -> bool {
    operation.is_some_and(|op| op.group_id == group_id && op.operation == name)
}

/// Matches an operation addressed to `host_id`, directly or as one of its targets.
#[must_use]
pub fn matches_host_id_or_target(operation: &RunningOperation, host_id: &str) -> bool {
    let Some(metadata) = operation.metadata.as_ref() else {
        return false;
    };

    metadata.host_id() == Some(host_id)
        || metadata
            .targets()
            .iter()
            .any(|target| target.agent_id.as_deref() == Some(host_id))
}

#[must_use]
pub fn matches_node_maintenance(operation: &RunningOperation, node_id: &str) -> bool {
    param_equals(operation, NODE_ID, node_id)
}

#[must_use]
pub fn matches_resource_maintenance(operation: &RunningOperation, resource_id: &str) -> bool {
    param_equals(operation, RESOURCE_ID, resource_id)
}

/// Cluster-wide maintenance carries neither a `resource_id` nor a `node_id`.
#[must_use]
pub fn matches_cluster_maintenance(operation: &RunningOperation) -> bool {
    get_local_or_target_params(operation.metadata.as_ref()).is_some_and(|params| {
        !params.contains_key(RESOURCE_ID) && !params.contains_key(NODE_ID)
    })
}
