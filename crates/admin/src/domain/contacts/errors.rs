//! Contacts service errors.

use thiserror::Error;

use crate::api::AdminApiError;

#[derive(Debug, Error)]
pub enum ContactsServiceError {
    #[error("contact name and phone are required")]
    MissingRequiredData,

    #[error("backend request failed")]
    Api(#[from] AdminApiError),
}
