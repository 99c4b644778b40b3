//! Operation gating, resource grouping and a REST client for a SAP cluster monitoring console.
//!
//! The pure parts ([`group_resources`], [`OperationGate`], the matchers) shape already
//! fetched inventory data for display. [`ConsoleClient`] fetches that data and sends the
//! operations confirmed by the user, and [`OperationRunner`] keeps the single in-flight
//! operation of each cluster tracked in [`RunningOperations`].

mod client;
pub mod core;
pub mod operations;
pub mod resources;

#[cfg(test)]
mod tests;

pub use crate::client::{ConsoleClient, ConsoleClientBuilder};
pub use crate::core::domain::error::{ConsoleError, ConsoleResult, ValidationError};
pub use crate::core::domain::model::{
    ability::{Ability, is_authorized},
    cluster::{Cluster, ClusterDetails},
    config::{ClientConfig, RateLimitConfig},
    host::{ClusterHost, Host, SystemdUnit, can_disable_unit, can_enable_unit},
    operation::{
        OperationMetadata, OperationName, OperationParams, OperationTarget, RunningOperation,
    },
    resource::{MaintenanceTarget, Resource, ResourceParent},
};
pub use crate::core::domain::value_object::{AccessToken, ConsoleUrl};
pub use crate::operations::application::{
    matcher::{
        get_local_or_target_params, matches_cluster_maintenance, matches_host_id_or_target,
        matches_node_maintenance, matches_resource_maintenance, operation_running,
    },
    request::operation_request::OperationRequest,
    response::operation_response::OperationAccepted,
    service::{
        operation_gate::{
            GuardedOperation, ModalRequest, OperationCallbacks, OperationDescriptor,
            OperationGate, OperationGateConfig, OperationIntent,
        },
        operation_runner::{OperationRunner, OperationTransport},
        running_operations::RunningOperations,
    },
    ui_state::{UiAction, UiState, reduce},
};
pub use crate::resources::application::service::resource_grouper::{
    GroupedResource, ResourceGroup, ResourceRow, group_resources,
};
