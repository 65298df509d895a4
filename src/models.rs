pub mod auth;
pub mod catalog;
pub mod common;
pub mod crm;
pub mod dashboard;
pub mod inventory;
pub mod operations;
