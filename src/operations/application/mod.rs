pub mod matcher;
pub mod request;
pub mod response;
pub mod service;
pub mod ui_state;
