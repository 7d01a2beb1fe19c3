//! Orders service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::AdminApiError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("backend request failed")]
    Api(#[source] AdminApiError),
}

impl From<AdminApiError> for OrdersServiceError {
    fn from(error: AdminApiError) -> Self {
        match error {
            AdminApiError::Status(StatusCode::NOT_FOUND) => Self::NotFound,
            other => Self::Api(other),
        }
    }
}
