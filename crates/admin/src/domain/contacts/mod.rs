//! Contacts

pub mod errors;
pub mod models;
pub mod service;

pub use errors::ContactsServiceError;
pub use service::*;
