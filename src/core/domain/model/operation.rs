//! Domain models for cluster operations and their in-flight tracking.
//!
//! An operation request is either addressed to a single agent (`params`, optionally a
//! `hostID`) or fanned out to several agents (`targets`, one argument set each).
//! Both shapes describe the same logical operation, see
//! [`crate::operations::application::matcher::get_local_or_target_params`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Free-form operation parameters (`maintenance`, `node_id`, `resource_id`...).
pub type OperationParams = serde_json::Map<String, serde_json::Value>;

/// Operations the console can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationName {
    ClusterMaintenanceChange,
    ClusterResourceRefresh,
    PacemakerEnable,
    PacemakerDisable,
    ClusterHostStart,
    ClusterHostStop,
}

impl OperationName {
    /// Wire name, as used in request paths.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClusterMaintenanceChange => "cluster_maintenance_change",
            Self::ClusterResourceRefresh => "cluster_resource_refresh",
            Self::PacemakerEnable => "pacemaker_enable",
            Self::PacemakerDisable => "pacemaker_disable",
            Self::ClusterHostStart => "cluster_host_start",
            Self::ClusterHostStop => "cluster_host_stop",
        }
    }

    /// True for operations addressed to a single host of the cluster.
    #[must_use]
    pub fn is_host_scoped(&self) -> bool {
        matches!(
            self,
            Self::PacemakerEnable
                | Self::PacemakerDisable
                | Self::ClusterHostStart
                | Self::ClusterHostStop
        )
    }
}

impl fmt::Display for OperationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One agent addressed by a fanned-out operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<OperationParams>,
}

impl OperationTarget {
    /// Reads a target, dropping fields of the wrong type.
    fn from_value(value: &Value) -> Self {
        Self {
            agent_id: string_field(value, "agent_id"),
            arguments: object_field(value, "arguments"),
        }
    }
}

/// Metadata attached to a running operation.
///
/// Decoding is shape based: objects carrying `targets` are [`OperationMetadata::Fanout`],
/// anything else is [`OperationMetadata::Single`]. Fields of an unexpected type decode
/// as absent instead of failing, so they simply never match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationMetadata {
    Fanout {
        targets: Vec<OperationTarget>,
        #[serde(rename = "hostID", skip_serializing_if = "Option::is_none")]
        host_id: Option<String>,
    },
    Single {
        #[serde(skip_serializing_if = "Option::is_none")]
        params: Option<OperationParams>,
        #[serde(rename = "hostID", skip_serializing_if = "Option::is_none")]
        host_id: Option<String>,
    },
}

impl<'de> Deserialize<'de> for OperationMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let host_id = string_field(&value, "hostID");

        Ok(match value.get("targets") {
            Some(targets) => Self::Fanout {
                targets: targets
                    .as_array()
                    .map(|targets| targets.iter().map(OperationTarget::from_value).collect())
                    .unwrap_or_default(),
                host_id,
            },
            None => Self::Single {
                params: object_field(&value, "params"),
                host_id,
            },
        })
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn object_field(value: &Value, key: &str) -> Option<OperationParams> {
    value.get(key).and_then(Value::as_object).cloned()
}

impl OperationMetadata {
    /// Metadata for a request addressed to one agent.
    #[must_use]
    pub fn single(params: OperationParams, host_id: Option<String>) -> Self {
        Self::Single {
            params: Some(params),
            host_id,
        }
    }

    /// The single-host identifier, if one was recorded.
    #[must_use]
    pub fn host_id(&self) -> Option<&str> {
        match self {
            Self::Fanout { host_id, .. } | Self::Single { host_id, .. } => host_id.as_deref(),
        }
    }

    /// Fan-out targets; empty for single-agent metadata.
    #[must_use]
    pub fn targets(&self) -> &[OperationTarget] {
        match self {
            Self::Fanout { targets, .. } => targets,
            Self::Single { .. } => &[],
        }
    }
}

/// The operation currently in flight for a group (a cluster).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunningOperation {
    #[serde(rename = "groupID")]
    pub group_id: String,
    pub operation: OperationName,
    #[serde(default)]
    pub metadata: Option<OperationMetadata>,
    /// Set when the backend refused the operation.
    #[serde(default)]
    pub forbidden: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl RunningOperation {
    pub fn new(
        group_id: impl Into<String>,
        operation: OperationName,
        metadata: Option<OperationMetadata>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            operation,
            metadata,
            forbidden: false,
            errors: Vec::new(),
        }
    }
}
