pub mod operation_request;
