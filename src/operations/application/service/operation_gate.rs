//! Computes the state of the operations offered for a cluster, its hosts and its resources.
//!
//! At most one operation runs per cluster. While it runs, every operation of that
//! cluster is disabled, and the ones matching the running operation's target are
//! flagged as running. Permissions are not evaluated here, see
//! [`OperationDescriptor::guard`].

use crate::core::domain::model::{
    ability::{Ability, is_authorized},
    cluster::ClusterDetails,
    host::{ClusterHost, PACEMAKER_UNIT, can_disable_unit, can_enable_unit},
    operation::{OperationName, OperationParams, RunningOperation},
    resource::MaintenanceTarget,
};
use crate::operations::application::matcher::{
    matches_cluster_maintenance, matches_host_id_or_target, matches_node_maintenance,
    matches_resource_maintenance, operation_running,
};
use serde_json::Value;
use tracing::debug;

pub const CLUSTER_MAINTENANCE_LABEL: &str = "Cluster maintenance";
pub const NODE_MAINTENANCE_LABEL: &str = "Node maintenance";
pub const PACEMAKER_ENABLE_LABEL: &str = "Enable pacemaker at boot";
pub const PACEMAKER_DISABLE_LABEL: &str = "Disable pacemaker at boot";
pub const RESOURCE_MAINTENANCE_LABEL: &str = "Resource maintenance";

const MAINTENANCE_CHANGE_PERMISSION: &str = "maintenance_change:cluster";
const PACEMAKER_ENABLE_PERMISSION: &str = "pacemaker_enable:cluster";
const PACEMAKER_DISABLE_PERMISSION: &str = "pacemaker_disable:cluster";

/// Open/close request for the confirmation modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRequest {
    pub open: bool,
    pub operation: OperationName,
}

/// Receivers of the side effects of clicking an operation.
pub trait OperationCallbacks {
    /// Stages the parameters of the pending operation.
    fn set_operation_params(&mut self, params: OperationParams);
    /// Opens or closes the confirmation modal.
    fn set_operation_modal_open(&mut self, request: ModalRequest);
    /// Remembers the host a host-scoped operation targets.
    fn set_current_operation_host(&mut self, host: ClusterHost);
}

/// What clicking an operation does, as data.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationIntent {
    pub operation: OperationName,
    pub params: Option<OperationParams>,
    pub host: Option<ClusterHost>,
}

/// UI state of one candidate operation.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDescriptor {
    /// Label.
    pub value: String,
    pub running: bool,
    pub disabled: bool,
    /// Grants allowing the operation, in `name:resource` form.
    pub permitted: Vec<String>,
    pub intent: OperationIntent,
}

/// A descriptor combined with the current user's abilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardedOperation {
    pub disabled: bool,
    pub forbidden: bool,
}

impl OperationDescriptor {
    /// Replays the intent on `callbacks`: host, then params, then the modal.
    pub fn click<C>(&self, callbacks: &mut C)
    where
        C: OperationCallbacks + ?Sized,
    {
        if let Some(host) = &self.intent.host {
            callbacks.set_current_operation_host(host.clone());
        }
        if let Some(params) = &self.intent.params {
            callbacks.set_operation_params(params.clone());
        }
        callbacks.set_operation_modal_open(ModalRequest {
            open: true,
            operation: self.intent.operation,
        });
    }

    /// Folds the user's permissions into the disabled state.
    #[must_use]
    pub fn guard(&self, abilities: &[Ability]) -> GuardedOperation {
        let forbidden = !is_authorized(abilities, &self.permitted);
        GuardedOperation {
            disabled: self.disabled || forbidden,
            forbidden,
        }
    }
}

/// Inputs shared by every operation of a cluster.
#[derive(Debug, Clone)]
pub struct OperationGateConfig {
    pub cluster_id: String,
    /// The operation currently tracked for the cluster, if any.
    pub running_operation: Option<RunningOperation>,
}

/// Builds operation descriptors for one cluster.
#[derive(Debug, Clone)]
pub struct OperationGate {
    config: OperationGateConfig,
}

impl OperationGate {
    pub fn new(config: OperationGateConfig) -> Self {
        Self { config }
    }

    /// True while any operation of this cluster is in flight.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.config
            .running_operation
            .as_ref()
            .is_some_and(|op| op.group_id == self.config.cluster_id)
    }

    fn is_running<F>(&self, name: OperationName, matches: F) -> bool
    where
        F: Fn(&RunningOperation) -> bool,
    {
        let running = self.config.running_operation.as_ref();
        operation_running(running, &self.config.cluster_id, name)
            && running.is_some_and(matches)
    }

    /// Operations acting on the whole cluster.
    #[must_use]
    pub fn cluster_operations(
        &self,
        details: &ClusterDetails,
        some_host_online: bool,
    ) -> Vec<OperationDescriptor> {
        let blocked = self.is_blocked();
        debug!(
            cluster_id = %self.config.cluster_id,
            blocked,
            some_host_online,
            "building cluster operations"
        );

        vec![OperationDescriptor {
            value: CLUSTER_MAINTENANCE_LABEL.to_string(),
            running: self.is_running(
                OperationName::ClusterMaintenanceChange,
                matches_cluster_maintenance,
            ),
            disabled: blocked || !some_host_online,
            permitted: vec![MAINTENANCE_CHANGE_PERMISSION.to_string()],
            intent: OperationIntent {
                operation: OperationName::ClusterMaintenanceChange,
                params: Some(params([(
                    "maintenance",
                    Value::Bool(!details.maintenance_mode),
                )])),
                host: None,
            },
        }]
    }

    /// Operations acting on one node of the cluster.
    #[must_use]
    pub fn cluster_host_operations(&self, host: &ClusterHost) -> Vec<OperationDescriptor> {
        let blocked = self.is_blocked();
        debug!(
            cluster_id = %self.config.cluster_id,
            host_id = %host.id,
            blocked,
            "building cluster host operations"
        );

        vec![
            OperationDescriptor {
                value: NODE_MAINTENANCE_LABEL.to_string(),
                running: self.is_running(OperationName::ClusterMaintenanceChange, |op| {
                    matches_node_maintenance(op, &host.name)
                }),
                disabled: blocked,
                permitted: vec![MAINTENANCE_CHANGE_PERMISSION.to_string()],
                intent: OperationIntent {
                    operation: OperationName::ClusterMaintenanceChange,
                    params: Some(params([
                        ("maintenance", Value::Bool(!host.in_maintenance())),
                        ("node_id", Value::String(host.name.clone())),
                    ])),
                    host: Some(host.clone()),
                },
            },
            OperationDescriptor {
                value: PACEMAKER_ENABLE_LABEL.to_string(),
                running: self.is_running(OperationName::PacemakerEnable, |op| {
                    matches_host_id_or_target(op, &host.id)
                }),
                disabled: blocked || !can_enable_unit(&host.systemd_units, PACEMAKER_UNIT),
                permitted: vec![PACEMAKER_ENABLE_PERMISSION.to_string()],
                intent: OperationIntent {
                    operation: OperationName::PacemakerEnable,
                    params: None,
                    host: Some(host.clone()),
                },
            },
            OperationDescriptor {
                value: PACEMAKER_DISABLE_LABEL.to_string(),
                running: self.is_running(OperationName::PacemakerDisable, |op| {
                    matches_host_id_or_target(op, &host.id)
                }),
                disabled: blocked || !can_disable_unit(&host.systemd_units, PACEMAKER_UNIT),
                permitted: vec![PACEMAKER_DISABLE_PERMISSION.to_string()],
                intent: OperationIntent {
                    operation: OperationName::PacemakerDisable,
                    params: None,
                    host: Some(host.clone()),
                },
            },
        ]
    }

    /// Operations acting on a resource or a resource group.
    #[must_use]
    pub fn resource_operations<R>(&self, resource: &R) -> Vec<OperationDescriptor>
    where
        R: MaintenanceTarget + ?Sized,
    {
        let resource_id = resource.resource_id();

        vec![OperationDescriptor {
            value: RESOURCE_MAINTENANCE_LABEL.to_string(),
            running: self.is_running(OperationName::ClusterMaintenanceChange, |op| {
                matches_resource_maintenance(op, resource_id)
            }),
            disabled: self.is_blocked(),
            permitted: vec![MAINTENANCE_CHANGE_PERMISSION.to_string()],
            intent: OperationIntent {
                operation: OperationName::ClusterMaintenanceChange,
                params: Some(params([
                    ("maintenance", Value::Bool(resource.is_managed())),
                    ("resource_id", Value::String(resource_id.to_string())),
                ])),
                host: None,
            },
        }]
    }
}

fn params<const N: usize>(entries: [(&str, Value); N]) -> OperationParams {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}
