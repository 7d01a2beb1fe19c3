//! Reviews service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::api::AdminApiError;

#[derive(Debug, Error)]
pub enum ReviewsServiceError {
    #[error("review request not found")]
    NotFound,

    #[error("backend request failed")]
    Api(#[source] AdminApiError),
}

impl From<AdminApiError> for ReviewsServiceError {
    fn from(error: AdminApiError) -> Self {
        match error {
            AdminApiError::Status(StatusCode::NOT_FOUND) => Self::NotFound,
            other => Self::Api(other),
        }
    }
}
