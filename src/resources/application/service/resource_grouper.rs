//! Groups a flat cluster resource list into parent/child rows.
//!
//! Resources sharing a parent collapse into one [`ResourceGroup`]; resources without a
//! parent stay as standalone rows. Every row carries the id of the host running it so
//! callers can link to the host page.

use crate::core::domain::model::{
    host::Host,
    resource::{MaintenanceTarget, Resource, ResourceParent},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

const PLAIN_GROUP_TYPE: &str = "Group";

/// A resource annotated with the host currently running it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceRow {
    #[serde(flatten)]
    pub resource: Resource,
    /// `None` when the node hostname matches no known host.
    #[serde(default, rename = "hostID", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
}

/// A parent resource together with its children.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ResourceGroup {
    #[serde(flatten)]
    pub parent: ResourceParent,
    #[serde(rename = "type")]
    pub group_type: String,
    pub children: Vec<ResourceRow>,
}

/// One display row of the resources table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GroupedResource {
    Group(ResourceGroup),
    Single(ResourceRow),
}

impl GroupedResource {
    /// Identifier of the row (parent id for groups).
    #[must_use]
    pub fn id(&self) -> &str {
        self.resource_id()
    }

    #[must_use]
    pub fn children(&self) -> &[ResourceRow] {
        match self {
            Self::Group(group) => &group.children,
            Self::Single(_) => &[],
        }
    }
}

impl MaintenanceTarget for ResourceRow {
    fn resource_id(&self) -> &str {
        &self.resource.id
    }

    fn is_managed(&self) -> bool {
        self.resource.managed
    }
}

impl MaintenanceTarget for ResourceGroup {
    fn resource_id(&self) -> &str {
        &self.parent.id
    }

    fn is_managed(&self) -> bool {
        self.parent.managed
    }
}

impl MaintenanceTarget for GroupedResource {
    fn resource_id(&self) -> &str {
        match self {
            Self::Group(group) => group.resource_id(),
            Self::Single(row) => row.resource_id(),
        }
    }

    fn is_managed(&self) -> bool {
        match self {
            Self::Group(group) => group.is_managed(),
            Self::Single(row) => row.is_managed(),
        }
    }
}

/// Plain groups are shown as `Group`, clones and promotable sets take their
/// first child's agent type.
#[must_use]
pub fn derive_type(parent: &ResourceParent, first_child: &Resource) -> String {
    match parent.multi_state {
        None => PLAIN_GROUP_TYPE.to_string(),
        Some(_) => first_child.resource_type.clone(),
    }
}

fn resolve_host_id(hosts: &[Host], node: Option<&str>) -> Option<String> {
    let node = node?;
    hosts
        .iter()
        .find(|host| host.hostname == node)
        .map(|host| host.id.clone())
}

/// Collapses `resources` into display rows.
///
/// Rows are keyed by parent id, or by the resource's own id when it has no parent,
/// and emitted in the order their key first appears.
#[must_use]
pub fn group_resources(resources: &[Resource], hosts: &[Host]) -> Vec<GroupedResource> {
    let mut buckets: Vec<Vec<ResourceRow>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for resource in resources {
        let key = resource
            .parent
            .as_ref()
            .map_or(resource.id.as_str(), |parent| parent.id.as_str());
        let row = ResourceRow {
            resource: resource.clone(),
            host_id: resolve_host_id(hosts, resource.node.as_deref()),
        };

        match index.get(key) {
            Some(&position) => buckets[position].push(row),
            None => {
                index.insert(key, buckets.len());
                buckets.push(vec![row]);
            }
        }
    }

    let grouped: Vec<GroupedResource> = buckets.into_iter().flat_map(emit_bucket).collect();
    debug!(
        resources = resources.len(),
        rows = grouped.len(),
        "grouped cluster resources"
    );
    grouped
}

fn emit_bucket(bucket: Vec<ResourceRow>) -> Vec<GroupedResource> {
    let parent = bucket
        .first()
        .and_then(|first| first.resource.parent.clone());

    match parent {
        Some(parent) => {
            let group_type = derive_type(&parent, &bucket[0].resource);
            vec![GroupedResource::Group(ResourceGroup {
                parent,
                group_type,
                children: bucket,
            })]
        }
        None => bucket.into_iter().map(GroupedResource::Single).collect(),
    }
}
