use crate::core::domain::{
    error::{ConsoleError, ConsoleResult},
    model::operation::{OperationName, OperationParams},
};
use crate::operations::application::{
    request::operation_request::OperationRequest,
    response::operation_response::OperationAccepted,
    service::running_operations::RunningOperations,
};
use async_trait::async_trait;
use tracing::{info, warn};

/// Sends operation requests to the backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OperationTransport: Send + Sync {
    async fn request_cluster_operation(
        &self,
        cluster_id: &str,
        operation: OperationName,
        params: &OperationParams,
    ) -> ConsoleResult<OperationAccepted>;

    async fn request_cluster_host_operation(
        &self,
        cluster_id: &str,
        host_id: &str,
        operation: OperationName,
        params: &OperationParams,
    ) -> ConsoleResult<OperationAccepted>;
}

/// Dispatches confirmed operations while keeping the running operations up to date.
pub struct OperationRunner<T> {
    transport: T,
    registry: RunningOperations,
}

impl<T: OperationTransport> OperationRunner<T> {
    pub fn new(transport: T, registry: RunningOperations) -> Self {
        Self {
            transport,
            registry,
        }
    }

    pub fn registry(&self) -> &RunningOperations {
        &self.registry
    }

    /// Starts `request`.
    ///
    /// The cluster is marked busy before the request is sent. On success it stays busy
    /// until [`RunningOperations::complete`] is called (the backend reports completion
    /// asynchronously). A refused request stays tracked as forbidden with the backend's
    /// errors; any other failure releases the cluster.
    ///
    /// # Errors
    /// - `ConsoleError::Validation` if the request is inconsistent
    /// - `ConsoleError::OperationInFlight` if the cluster is busy
    /// - any transport error
    pub async fn run(&self, request: &OperationRequest) -> ConsoleResult<OperationAccepted> {
        request.validate()?;
        self.registry
            .begin(&request.cluster_id, request.operation, Some(request.metadata()))
            .await?;

        let result = match &request.host_id {
            Some(host_id) => {
                self.transport
                    .request_cluster_host_operation(
                        &request.cluster_id,
                        host_id,
                        request.operation,
                        &request.params,
                    )
                    .await
            }
            None => {
                self.transport
                    .request_cluster_operation(
                        &request.cluster_id,
                        request.operation,
                        &request.params,
                    )
                    .await
            }
        };

        match result {
            Ok(accepted) => {
                info!(
                    cluster_id = %request.cluster_id,
                    operation = %request.operation,
                    operation_id = %accepted.operation_id,
                    "operation accepted"
                );
                Ok(accepted)
            }
            Err(ConsoleError::Forbidden { errors }) => {
                warn!(
                    cluster_id = %request.cluster_id,
                    operation = %request.operation,
                    "operation forbidden"
                );
                self.registry
                    .set_forbidden(&request.cluster_id, errors.clone())
                    .await;
                Err(ConsoleError::Forbidden { errors })
            }
            Err(error) => {
                warn!(
                    cluster_id = %request.cluster_id,
                    operation = %request.operation,
                    %error,
                    "operation request failed"
                );
                self.registry.complete(&request.cluster_id).await;
                Err(error)
            }
        }
    }
}
