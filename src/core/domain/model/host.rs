//! Domain models for hosts and cluster nodes.

use serde::{Deserialize, Serialize};

/// The systemd unit running the pacemaker daemon.
pub const PACEMAKER_UNIT: &str = "pacemaker.service";

/// A host registered in the console, as returned by the `/hosts` endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Host {
    /// Host (agent) identifier.
    pub id: String,
    /// Hostname reported by the agent.
    pub hostname: String,
}

/// A cluster node joined with the host that runs it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClusterHost {
    /// Host (agent) identifier.
    pub id: String,
    /// Node name inside the cluster.
    pub name: String,
    /// Node status (e.g. `Online`, `Maintenance`, `Offline`).
    #[serde(default)]
    pub status: String,
    /// Systemd units tracked on the host.
    #[serde(default)]
    pub systemd_units: Vec<SystemdUnit>,
}

impl ClusterHost {
    /// Returns true if the node is in maintenance mode.
    #[must_use]
    pub fn in_maintenance(&self) -> bool {
        self.status == "Maintenance"
    }
}

/// State of a systemd unit on a host.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SystemdUnit {
    pub name: String,
    /// e.g. `enabled`, `disabled`, `static`.
    pub unit_file_state: String,
}

fn unit_file_state<'a>(units: &'a [SystemdUnit], name: &str) -> Option<&'a str> {
    units
        .iter()
        .find(|unit| unit.name == name)
        .map(|unit| unit.unit_file_state.as_str())
}

/// True if the named unit is known and currently disabled at boot.
#[must_use]
pub fn can_enable_unit(units: &[SystemdUnit], name: &str) -> bool {
    unit_file_state(units, name) == Some("disabled")
}

/// True if the named unit is known and currently enabled at boot.
#[must_use]
pub fn can_disable_unit(units: &[SystemdUnit], name: &str) -> bool {
    unit_file_state(units, name) == Some("enabled")
}
