use crate::core::domain::{
    error::{ConsoleResult, ValidationError},
    model::operation::{OperationMetadata, OperationName, OperationParams},
};
use crate::operations::application::ui_state::UiState;

/// A confirmed operation, ready to be sent to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub cluster_id: String,
    /// Set for operations addressed to one node of the cluster.
    pub host_id: Option<String>,
    pub operation: OperationName,
    pub params: OperationParams,
}

impl OperationRequest {
    pub fn cluster(
        cluster_id: impl Into<String>,
        operation: OperationName,
        params: OperationParams,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            host_id: None,
            operation,
            params,
        }
    }

    pub fn cluster_host(
        cluster_id: impl Into<String>,
        host_id: impl Into<String>,
        operation: OperationName,
        params: OperationParams,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            host_id: Some(host_id.into()),
            operation,
            params,
        }
    }

    /// Builds the request staged in `state` by a descriptor click.
    ///
    /// Host-scoped operations are addressed to the selected host; maintenance changes
    /// always go to the cluster, their `node_id`/`resource_id` travel in the params.
    pub fn from_ui_state(cluster_id: impl Into<String>, state: &UiState) -> ConsoleResult<Self> {
        let operation = state.modal.ok_or_else(|| ValidationError::Field {
            field: "operation".to_string(),
            message: "No operation is pending confirmation".to_string(),
        })?;
        let params = state.operation_params.clone().unwrap_or_default();

        let request = if operation.is_host_scoped() {
            let host = state.current_host.as_ref().ok_or_else(|| ValidationError::Field {
                field: "host".to_string(),
                message: format!("Operation {} requires a selected host", operation),
            })?;
            Self::cluster_host(cluster_id, host.id.clone(), operation, params)
        } else {
            Self::cluster(cluster_id, operation, params)
        };
        request.validate()?;
        Ok(request)
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.cluster_id.is_empty() {
            return Err(ValidationError::Field {
                field: "cluster_id".to_string(),
                message: "Cluster id cannot be empty".to_string(),
            });
        }
        match (&self.host_id, self.operation.is_host_scoped()) {
            (None, true) => Err(ValidationError::ConstraintViolation(format!(
                "Operation {} must target a host",
                self.operation
            ))),
            (Some(_), false) => Err(ValidationError::ConstraintViolation(format!(
                "Operation {} cannot target a single host",
                self.operation
            ))),
            (Some(host_id), true) if host_id.is_empty() => Err(ValidationError::Field {
                field: "host_id".to_string(),
                message: "Host id cannot be empty".to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Metadata recorded while the request is in flight.
    #[must_use]
    pub fn metadata(&self) -> OperationMetadata {
        OperationMetadata::single(self.params.clone(), self.host_id.clone())
    }
}
