//! Reviews service.

use async_trait::async_trait;
use mockall::automock;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use crate::{
    api::{AdminApiClient, should_fall_back},
    domain::{
        Sourced,
        reviews::{
            errors::ReviewsServiceError,
            models::{ReviewRequest, ReviewStatus},
        },
    },
    sample,
};

#[automock]
#[async_trait]
pub trait ReviewsService: Send + Sync {
    /// List all review requests, newest first.
    async fn list_requests(&self) -> Result<Sourced<Vec<ReviewRequest>>, ReviewsServiceError>;

    /// Set the moderation status of one review.
    async fn set_status(
        &self,
        id: Uuid,
        status: ReviewStatus,
    ) -> Result<ReviewRequest, ReviewsServiceError>;
}

/// Reviews backed by the admin REST API, degrading to the bundled sample
/// list when the backend is unreachable. Writes never degrade.
#[derive(Debug, Clone)]
pub struct ApiReviewsService {
    api: AdminApiClient,
}

impl ApiReviewsService {
    pub fn new(api: AdminApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ReviewsService for ApiReviewsService {
    async fn list_requests(&self) -> Result<Sourced<Vec<ReviewRequest>>, ReviewsServiceError> {
        match self.api.get_json("/reviews").await {
            Ok(reviews) => Ok(Sourced::live(reviews)),
            Err(error) if should_fall_back(&error) => {
                warn!("reviews backend unavailable, showing sample data: {error}");

                Ok(Sourced::fallback(sample::review_requests()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ReviewStatus,
    ) -> Result<ReviewRequest, ReviewsServiceError> {
        Ok(self
            .api
            .put_json(&format!("/reviews/{id}"), &json!({ "status": status }))
            .await?)
    }
}

/// In-memory review requests, seeded from the sample set.
#[derive(Debug)]
pub struct MemReviewsService {
    reviews: RwLock<Vec<ReviewRequest>>,
}

impl MemReviewsService {
    pub fn new() -> Self {
        Self {
            reviews: RwLock::new(sample::review_requests()),
        }
    }
}

impl Default for MemReviewsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewsService for MemReviewsService {
    async fn list_requests(&self) -> Result<Sourced<Vec<ReviewRequest>>, ReviewsServiceError> {
        Ok(Sourced::live(self.reviews.read().await.clone()))
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: ReviewStatus,
    ) -> Result<ReviewRequest, ReviewsServiceError> {
        let mut reviews = self.reviews.write().await;

        let review = reviews
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or(ReviewsServiceError::NotFound)?;

        review.status = status;

        Ok(review.clone())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn moderation_status_sticks() -> TestResult {
        let service = MemReviewsService::new();

        let first = service
            .list_requests()
            .await?
            .data
            .first()
            .expect("sample reviews exist")
            .clone();

        service.set_status(first.id, ReviewStatus::Hidden).await?;

        let after = service.list_requests().await?.data;
        let hidden = after.iter().find(|review| review.id == first.id);

        assert_eq!(hidden.map(|review| review.status), Some(ReviewStatus::Hidden));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_review_is_not_found() {
        let service = MemReviewsService::new();

        let result = service
            .set_status(Uuid::now_v7(), ReviewStatus::Approved)
            .await;

        assert!(
            matches!(result, Err(ReviewsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
