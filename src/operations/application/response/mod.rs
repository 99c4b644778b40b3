pub mod operation_response;
