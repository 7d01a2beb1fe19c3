//! Test helpers.

use std::sync::Arc;

use async_trait::async_trait;
use salvo::{affix_state::inject, prelude::*};
use utsav::{
    card::{CaptureError, CardExporter, CardFace, CardSurface},
    catalog,
    store::MemoryStore,
};
use utsav_admin::{
    context::AdminContext,
    domain::{
        analytics::MockAnalyticsService, contacts::MockContactsService,
        orders::MockOrdersService, reviews::MockReviewsService, settings::SettingsService,
    },
};

use crate::{auth::AdminKey, state::State};

pub(crate) const TEST_ADMIN_KEY: &str = "test-admin-key";

/// Canned [`CardSurface`] for handler tests.
pub(crate) enum TestSurface {
    /// Always succeeds with fixed bytes.
    Png(Vec<u8>),

    /// Always fails with a fetch error.
    Fail,
}

#[async_trait]
impl CardSurface for TestSurface {
    async fn capture(&self, _face: &CardFace, _scale: u32) -> Result<Vec<u8>, CaptureError> {
        match self {
            Self::Png(bytes) => Ok(bytes.clone()),
            Self::Fail => Err(CaptureError::ArtworkFetch("test surface failure".to_owned())),
        }
    }
}

fn strict_orders() -> MockOrdersService {
    let mut orders = MockOrdersService::new();

    orders.expect_list_orders().never();
    orders.expect_update_order().never();

    orders
}

fn strict_analytics() -> MockAnalyticsService {
    let mut analytics = MockAnalyticsService::new();

    analytics.expect_dashboard().never();
    analytics.expect_revenue_report().never();

    analytics
}

fn strict_contacts() -> MockContactsService {
    let mut contacts = MockContactsService::new();

    contacts.expect_list_contacts().never();
    contacts.expect_add_contact().never();

    contacts
}

fn strict_reviews() -> MockReviewsService {
    let mut reviews = MockReviewsService::new();

    reviews.expect_list_requests().never();
    reviews.expect_set_status().never();

    reviews
}

fn state_with(admin: AdminContext, surface: TestSurface) -> Arc<State> {
    Arc::new(State {
        admin,
        catalog: catalog::builtin(),
        settings: SettingsService::new(Arc::new(MemoryStore::new())),
        exporter: CardExporter::new(Arc::new(surface)),
        admin_key: AdminKey::new(TEST_ADMIN_KEY),
        public_base_url: "http://test.local".to_owned(),
    })
}

fn admin_with(
    orders: MockOrdersService,
    analytics: MockAnalyticsService,
    contacts: MockContactsService,
    reviews: MockReviewsService,
) -> AdminContext {
    AdminContext {
        orders: Arc::new(orders),
        analytics: Arc::new(analytics),
        contacts: Arc::new(contacts),
        reviews: Arc::new(reviews),
    }
}

/// State with strict mocks everywhere and a succeeding card surface.
pub(crate) fn test_state() -> Arc<State> {
    state_with(
        admin_with(
            strict_orders(),
            strict_analytics(),
            strict_contacts(),
            strict_reviews(),
        ),
        TestSurface::Png(b"PNG".to_vec()),
    )
}

pub(crate) fn state_with_orders(orders: MockOrdersService) -> Arc<State> {
    state_with(
        admin_with(orders, strict_analytics(), strict_contacts(), strict_reviews()),
        TestSurface::Png(b"PNG".to_vec()),
    )
}

pub(crate) fn state_with_analytics(analytics: MockAnalyticsService) -> Arc<State> {
    state_with(
        admin_with(strict_orders(), analytics, strict_contacts(), strict_reviews()),
        TestSurface::Png(b"PNG".to_vec()),
    )
}

pub(crate) fn state_with_contacts(contacts: MockContactsService) -> Arc<State> {
    state_with(
        admin_with(strict_orders(), strict_analytics(), contacts, strict_reviews()),
        TestSurface::Png(b"PNG".to_vec()),
    )
}

pub(crate) fn state_with_reviews(reviews: MockReviewsService) -> Arc<State> {
    state_with(
        admin_with(strict_orders(), strict_analytics(), strict_contacts(), reviews),
        TestSurface::Png(b"PNG".to_vec()),
    )
}

pub(crate) fn state_with_surface(surface: TestSurface) -> Arc<State> {
    state_with(
        admin_with(
            strict_orders(),
            strict_analytics(),
            strict_contacts(),
            strict_reviews(),
        ),
        surface,
    )
}

/// Wrap a route tree with injected state.
pub(crate) fn service_with(state: Arc<State>, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state)).push(route))
}
