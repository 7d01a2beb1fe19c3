//! Admin analytics endpoints.

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::error;
use utsav_admin::domain::analytics::{
    AnalyticsServiceError,
    models::{DashboardSummary, RevenueReport, percent_points},
};

use crate::{admin::source_label, extensions::*, state::State};

/// Dashboard headline figures on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DashboardResponse {
    /// `live` or `fallback`.
    pub source: String,

    /// All tracked visitor sessions.
    pub total_visitors: u64,

    /// First-time visitors.
    pub new_visitors: u64,

    /// Returning visitors.
    pub returning_visitors: u64,

    /// Distinct customers who placed at least one order.
    pub unique_customers: u64,

    /// Orders placed.
    pub orders_count: u64,

    /// Revenue in whole rupees.
    pub total_revenue: u64,

    /// Cart abandonment in percent points, e.g. `"18.00"`.
    pub cart_abandonment_percent: String,
}

impl DashboardResponse {
    fn new(summary: DashboardSummary, source: String) -> Self {
        let cart_abandonment_percent = percent_points(summary.cart_abandonment_rate()).to_string();

        Self {
            source,
            total_visitors: summary.total_visitors,
            new_visitors: summary.new_visitors,
            returning_visitors: summary.returning_visitors,
            unique_customers: summary.unique_customers,
            orders_count: summary.orders_count,
            total_revenue: summary.total_revenue,
            cart_abandonment_percent,
        }
    }
}

/// One day of the revenue report on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DailyRevenueResponse {
    /// The day (ISO 8601 date).
    pub date: String,

    /// Orders placed that day.
    pub orders: u64,

    /// Revenue that day, in whole rupees.
    pub revenue: u64,
}

/// Revenue report on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RevenueResponse {
    /// `live` or `fallback`.
    pub source: String,

    /// Orders in the window.
    pub total_orders: u64,

    /// Item revenue in whole rupees.
    pub total_revenue: u64,

    /// Delivery-fee revenue in whole rupees.
    pub delivery_revenue: u64,

    /// Item plus delivery revenue.
    pub grand_total: u64,

    /// Per-day breakdown, oldest first.
    pub daily: Vec<DailyRevenueResponse>,
}

impl RevenueResponse {
    fn new(report: RevenueReport, source: String) -> Self {
        Self {
            source,
            total_orders: report.total_orders,
            total_revenue: report.total_revenue,
            delivery_revenue: report.delivery_revenue,
            grand_total: report.grand_total,
            daily: report
                .daily
                .into_iter()
                .map(|day| DailyRevenueResponse {
                    date: day.date.to_string(),
                    orders: day.orders,
                    revenue: day.revenue,
                })
                .collect(),
        }
    }
}

fn into_status_error(error: &AnalyticsServiceError) -> StatusError {
    let AnalyticsServiceError::Api(source) = error;

    error!("analytics backend error: {source}");

    StatusError::internal_server_error()
}

/// Dashboard Handler
///
/// Returns the dashboard headline figures.
#[endpoint(tags("admin-analytics"), summary = "Dashboard Summary")]
pub(crate) async fn dashboard_handler(
    depot: &mut Depot,
) -> Result<Json<DashboardResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .admin
        .analytics
        .dashboard()
        .await
        .map_err(|error| into_status_error(&error))?;

    let source = source_label(summary.source);

    Ok(Json(DashboardResponse::new(summary.data, source)))
}

/// Revenue Report Handler
///
/// Returns the revenue report for the current window.
#[endpoint(tags("admin-analytics"), summary = "Revenue Report")]
pub(crate) async fn revenue_handler(
    depot: &mut Depot,
) -> Result<Json<RevenueResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let report = state
        .admin
        .analytics
        .revenue_report()
        .await
        .map_err(|error| into_status_error(&error))?;

    let source = source_label(report.source);

    Ok(Json(RevenueResponse::new(report.data, source)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use utsav_admin::{domain::Sourced, sample};

    use crate::test_helpers::{service_with, state_with_analytics};

    use super::*;

    use utsav_admin::domain::analytics::MockAnalyticsService;

    fn routes() -> Router {
        Router::with_path("admin/analytics")
            .push(Router::with_path("dashboard").get(dashboard_handler))
            .push(Router::with_path("revenue").get(revenue_handler))
    }

    #[tokio::test]
    async fn test_dashboard_reports_percent_points() -> TestResult {
        let mut analytics = MockAnalyticsService::new();

        analytics
            .expect_dashboard()
            .once()
            .return_once(|| Ok(Sourced::live(sample::dashboard())));
        analytics.expect_revenue_report().never();

        let response: DashboardResponse =
            TestClient::get("http://example.com/admin/analytics/dashboard")
                .send(&service_with(state_with_analytics(analytics), routes()))
                .await
                .take_json()
                .await?;

        assert_eq!(response.source, "live");
        assert_eq!(response.cart_abandonment_percent, "18.00");
        assert_eq!(response.total_visitors, 1_248);

        Ok(())
    }

    #[tokio::test]
    async fn test_revenue_report_serializes_daily_rows() -> TestResult {
        let mut analytics = MockAnalyticsService::new();

        analytics.expect_dashboard().never();
        analytics
            .expect_revenue_report()
            .once()
            .return_once(|| Ok(Sourced::fallback(sample::revenue_report())));

        let response: RevenueResponse =
            TestClient::get("http://example.com/admin/analytics/revenue")
                .send(&service_with(state_with_analytics(analytics), routes()))
                .await
                .take_json()
                .await?;

        assert_eq!(response.source, "fallback");
        assert_eq!(response.daily.len(), 3);
        assert_eq!(
            response.grand_total,
            response.total_revenue + response.delivery_revenue
        );
        assert_eq!(
            response.daily.first().map(|day| day.date.as_str()),
            Some("2026-10-15")
        );

        Ok(())
    }
}
