pub mod auth;
pub mod form;
pub mod i18n;
