pub mod ability;
pub mod cluster;
pub mod config;
pub mod host;
pub mod operation;
pub mod resource;
