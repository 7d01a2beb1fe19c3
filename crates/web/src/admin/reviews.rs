//! Admin review moderation endpoints.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utsav_admin::domain::reviews::{
    ReviewsServiceError,
    models::{ReviewRequest, ReviewStatus},
};
use uuid::Uuid;

use crate::{admin::source_label, extensions::*, state::State};

/// One review request on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewResponse {
    /// Review UUID.
    pub id: Uuid,

    /// Reviewed catalog item id.
    pub item_id: String,

    /// Reviewer name.
    pub customer_name: String,

    /// Star rating, 1–5.
    pub rating: u8,

    /// Review text.
    pub comment: String,

    /// Moderation status key.
    pub status: String,

    /// When the review was submitted (RFC 3339).
    pub created_at: String,
}

impl From<ReviewRequest> for ReviewResponse {
    fn from(review: ReviewRequest) -> Self {
        Self {
            id: review.id,
            item_id: review.item_id.to_string(),
            customer_name: review.customer_name,
            rating: review.rating,
            comment: review.comment,
            status: review.status.key().to_owned(),
            created_at: review.created_at.to_string(),
        }
    }
}

/// Review list on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReviewsResponse {
    /// `live` or `fallback`.
    pub source: String,

    /// The review requests.
    pub reviews: Vec<ReviewResponse>,
}

/// Moderation request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateReviewRequest {
    /// New status key (`pending`, `approved` or `hidden`).
    pub status: String,
}

fn into_status_error(error: &ReviewsServiceError) -> StatusError {
    match error {
        ReviewsServiceError::NotFound => StatusError::not_found().brief("Review not found"),
        ReviewsServiceError::Api(source) => {
            error!("reviews backend error: {source}");

            StatusError::internal_server_error()
        }
    }
}

/// Review Index Handler
///
/// Returns all review requests.
#[endpoint(tags("admin-reviews"), summary = "List Review Requests")]
pub(crate) async fn index_handler(depot: &mut Depot) -> Result<Json<ReviewsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let reviews = state
        .admin
        .reviews
        .list_requests()
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(ReviewsResponse {
        source: source_label(reviews.source),
        reviews: reviews.data.into_iter().map(Into::into).collect(),
    }))
}

/// Review Moderation Handler
///
/// Approves or hides one review.
#[endpoint(tags("admin-reviews"), summary = "Moderate Review")]
pub(crate) async fn update_handler(
    id: PathParam<Uuid>,
    json: JsonBody<UpdateReviewRequest>,
    depot: &mut Depot,
) -> Result<Json<ReviewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let status = ReviewStatus::from_key(&request.status).ok_or_else(|| {
        StatusError::bad_request().brief(format!("unknown review status `{}`", request.status))
    })?;

    let review = state
        .admin
        .reviews
        .set_status(id.into_inner(), status)
        .await
        .map_err(|error| into_status_error(&error))?;

    Ok(Json(review.into()))
}
