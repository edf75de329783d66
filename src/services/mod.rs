pub mod account_service;
pub mod catalog_service;
