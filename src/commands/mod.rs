pub mod config;
pub mod employees;
pub mod permissions;
pub mod request;
pub mod session;
