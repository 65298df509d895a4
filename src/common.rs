pub mod error;
pub mod export;
pub mod format;
pub mod i18n;
pub mod validation;
