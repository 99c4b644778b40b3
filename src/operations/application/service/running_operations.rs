//! In-memory tracking of the operation in flight for each group.

use crate::core::domain::{
    error::{ConsoleError, ConsoleResult},
    model::operation::{OperationMetadata, OperationName, RunningOperation},
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Running operations keyed by group id, at most one per group.
///
/// Cloning shares the underlying store.
#[derive(Debug, Clone, Default)]
pub struct RunningOperations {
    operations: Arc<RwLock<HashMap<String, RunningOperation>>>,
}

impl RunningOperations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking an operation.
    ///
    /// # Errors
    /// Returns `ConsoleError::OperationInFlight` if the group already has one, forbidden
    /// entries included until they are cleared.
    pub async fn begin(
        &self,
        group_id: &str,
        operation: OperationName,
        metadata: Option<OperationMetadata>,
    ) -> ConsoleResult<RunningOperation> {
        let mut operations = self.operations.write().await;
        if let Some(current) = operations.get(group_id) {
            warn!(
                group_id,
                running = %current.operation,
                requested = %operation,
                "rejecting operation, group busy"
            );
            return Err(ConsoleError::OperationInFlight(group_id.to_string()));
        }

        let running = RunningOperation::new(group_id, operation, metadata);
        operations.insert(group_id.to_string(), running.clone());
        debug!(group_id, %operation, "operation started");
        Ok(running)
    }

    pub async fn get(&self, group_id: &str) -> Option<RunningOperation> {
        self.operations.read().await.get(group_id).cloned()
    }

    /// All tracked operations, ordered by group id.
    pub async fn list(&self) -> Vec<RunningOperation> {
        let mut list: Vec<RunningOperation> =
            self.operations.read().await.values().cloned().collect();
        list.sort_by(|a, b| a.group_id.cmp(&b.group_id));
        list
    }

    /// Stops tracking the group's operation.
    pub async fn complete(&self, group_id: &str) -> Option<RunningOperation> {
        let removed = self.operations.write().await.remove(group_id);
        if removed.is_some() {
            debug!(group_id, "operation completed");
        }
        removed
    }

    /// Marks the group's operation as refused by the backend.
    ///
    /// Returns false when nothing runs for the group.
    pub async fn set_forbidden(&self, group_id: &str, errors: Vec<String>) -> bool {
        let mut operations = self.operations.write().await;
        match operations.get_mut(group_id) {
            Some(running) => {
                running.forbidden = true;
                running.errors = errors;
                true
            }
            None => false,
        }
    }

    /// Drops the group's operation if it was forbidden.
    pub async fn clear_forbidden(&self, group_id: &str) -> bool {
        let mut operations = self.operations.write().await;
        if operations.get(group_id).is_some_and(|op| op.forbidden) {
            operations.remove(group_id);
            true
        } else {
            false
        }
    }
}
