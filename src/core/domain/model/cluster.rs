//! Domain models for clusters returned by the `/clusters` endpoint.

use crate::core::domain::model::resource::Resource;
use serde::{Deserialize, Serialize};

/// A pacemaker cluster known to the console.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Cluster {
    /// Cluster identifier.
    pub id: String,
    /// Cluster name.
    #[serde(default)]
    pub name: String,
    /// Cluster details, absent for unknown cluster types.
    #[serde(default)]
    pub details: Option<ClusterDetails>,
}

/// Cluster-wide state used to build the cluster operations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClusterDetails {
    /// Whether the whole cluster is in maintenance mode.
    #[serde(default)]
    pub maintenance_mode: bool,
    /// Flat resource list, see [`crate::group_resources`].
    #[serde(default)]
    pub resources: Vec<Resource>,
}
