pub mod resource_grouper;
