pub mod operation_gate;
pub mod operation_runner;
pub mod running_operations;
