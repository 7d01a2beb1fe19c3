//! Admin Context

use std::sync::Arc;

use crate::{
    api::{AdminApiClient, AdminApiConfig},
    domain::{
        analytics::{AnalyticsService, ApiAnalyticsService, MemAnalyticsService},
        contacts::{ApiContactsService, ContactsService, MemContactsService},
        orders::{ApiOrdersService, MemOrdersService, OrdersService},
        reviews::{ApiReviewsService, MemReviewsService, ReviewsService},
    },
};

/// The admin console's service wiring.
#[derive(Clone)]
pub struct AdminContext {
    /// Orders service.
    pub orders: Arc<dyn OrdersService>,

    /// Analytics service.
    pub analytics: Arc<dyn AnalyticsService>,

    /// Contacts service.
    pub contacts: Arc<dyn ContactsService>,

    /// Review moderation service.
    pub reviews: Arc<dyn ReviewsService>,
}

impl AdminContext {
    /// Services talking to a remote admin API, with fallback-to-sample
    /// reads.
    pub fn remote(config: AdminApiConfig) -> Self {
        let api = AdminApiClient::new(config);

        Self {
            orders: Arc::new(ApiOrdersService::new(api.clone())),
            analytics: Arc::new(ApiAnalyticsService::new(api.clone())),
            contacts: Arc::new(ApiContactsService::new(api.clone())),
            reviews: Arc::new(ApiReviewsService::new(api)),
        }
    }

    /// In-memory services seeded with sample data; backs the bundled web
    /// server and offline development.
    pub fn in_memory() -> Self {
        Self {
            orders: Arc::new(MemOrdersService::new()),
            analytics: Arc::new(MemAnalyticsService::new()),
            contacts: Arc::new(MemContactsService::new()),
            reviews: Arc::new(MemReviewsService::new()),
        }
    }
}
