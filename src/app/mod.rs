pub mod browser;
pub mod directory_service;
pub mod error;
pub mod form;
