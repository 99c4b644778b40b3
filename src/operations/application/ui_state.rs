//! Pending-operation state of an operations page.
//!
//! Descriptor clicks stage an operation here; the page renders the confirmation
//! modal from it and builds the request once the user confirms.

use crate::core::domain::model::{
    host::ClusterHost,
    operation::{OperationName, OperationParams},
};
use crate::operations::application::service::operation_gate::{ModalRequest, OperationCallbacks};
use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Operation whose confirmation modal is open.
    pub modal: Option<OperationName>,
    pub operation_params: Option<OperationParams>,
    pub current_host: Option<ClusterHost>,
}

impl UiState {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    OpenModal(OperationName),
    /// Keeps params and host so the caller can still confirm with them.
    CloseModal,
    SetParams(OperationParams),
    SelectHost(ClusterHost),
}

#[must_use]
pub fn reduce(state: UiState, action: UiAction) -> UiState {
    trace!(?action, "reducing ui action");
    match action {
        UiAction::OpenModal(operation) => UiState {
            modal: Some(operation),
            ..state
        },
        UiAction::CloseModal => UiState {
            modal: None,
            ..state
        },
        UiAction::SetParams(params) => UiState {
            operation_params: Some(params),
            ..state
        },
        UiAction::SelectHost(host) => UiState {
            current_host: Some(host),
            ..state
        },
    }
}

impl UiState {
    fn dispatch(&mut self, action: UiAction) {
        *self = reduce(std::mem::take(self), action);
    }
}

impl OperationCallbacks for UiState {
    fn set_operation_params(&mut self, params: OperationParams) {
        self.dispatch(UiAction::SetParams(params));
    }

    fn set_operation_modal_open(&mut self, request: ModalRequest) {
        if request.open {
            self.dispatch(UiAction::OpenModal(request.operation));
        } else {
            self.dispatch(UiAction::CloseModal);
        }
    }

    fn set_current_operation_host(&mut self, host: ClusterHost) {
        self.dispatch(UiAction::SelectHost(host));
    }
}
