mod cluster_tests;
mod operation_tests;
