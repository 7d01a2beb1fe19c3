//! Analytics service errors.

use thiserror::Error;

use crate::api::AdminApiError;

#[derive(Debug, Error)]
pub enum AnalyticsServiceError {
    #[error("backend request failed")]
    Api(#[from] AdminApiError),
}
