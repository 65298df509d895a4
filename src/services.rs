pub mod auth;
pub mod catalog_service;
pub mod crm_service;
pub mod dashboard_service;
pub mod document_service;
pub mod inactivation;
pub mod inventory_service;
pub mod operation_service;
pub mod records;
