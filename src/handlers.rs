pub mod auth;
pub mod catalog;
pub mod crm;
pub mod dashboard;
pub mod documents;
pub mod exports;
pub mod inventory;
pub mod operations;
pub mod responses;
