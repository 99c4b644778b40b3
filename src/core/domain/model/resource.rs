//! Domain models for cluster-managed resources.
//!
//! The backend reports a flat list of pacemaker resources per cluster. Resources that
//! belong to a group, clone or promotable set carry a `parent` describing it.

use serde::{Deserialize, Serialize};

/// A resource managed by the cluster (primitive, clone child, group member...).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Resource {
    /// Resource identifier (e.g. `rsc_ip_PRD_HDB00`).
    pub id: String,
    /// Hostname of the node currently running the resource.
    #[serde(default)]
    pub node: Option<String>,
    /// The enclosing group/clone, if any.
    #[serde(default)]
    pub parent: Option<ResourceParent>,
    /// Resource agent type (e.g. `ocf::heartbeat:IPaddr2`).
    #[serde(default, rename = "type")]
    pub resource_type: String,
    /// Current role (e.g. `Started`, `Promoted`).
    #[serde(default)]
    pub role: String,
    /// Current status (e.g. `Active`).
    #[serde(default)]
    pub status: String,
    /// Whether pacemaker manages the resource (false while in maintenance).
    #[serde(default)]
    pub managed: bool,
    /// Failure count as reported by the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_count: Option<String>,
}

/// The parent (group, clone or multi-state set) of a resource.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceParent {
    /// Parent identifier.
    pub id: String,
    /// Set for clones/promotable sets, absent for plain groups.
    #[serde(default)]
    pub multi_state: Option<bool>,
    /// Whether pacemaker manages the parent.
    #[serde(default)]
    pub managed: bool,
}

/// Something a resource maintenance change can be requested for.
pub trait MaintenanceTarget {
    /// Identifier sent as `resource_id`.
    fn resource_id(&self) -> &str;
    /// Whether pacemaker currently manages the target.
    fn is_managed(&self) -> bool;
}

impl MaintenanceTarget for Resource {
    fn resource_id(&self) -> &str {
        &self.id
    }

    fn is_managed(&self) -> bool {
        self.managed
    }
}
