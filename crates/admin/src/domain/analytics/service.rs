//! Analytics service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    api::{AdminApiClient, should_fall_back},
    domain::{
        Sourced,
        analytics::{
            errors::AnalyticsServiceError,
            models::{DashboardSummary, RevenueReport},
        },
    },
    sample,
};

#[automock]
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// The dashboard headline figures.
    async fn dashboard(&self) -> Result<Sourced<DashboardSummary>, AnalyticsServiceError>;

    /// The revenue report for the current window.
    async fn revenue_report(&self) -> Result<Sourced<RevenueReport>, AnalyticsServiceError>;
}

/// Analytics backed by the admin REST API, degrading to the bundled sample
/// figures when the backend is unreachable.
#[derive(Debug, Clone)]
pub struct ApiAnalyticsService {
    api: AdminApiClient,
}

impl ApiAnalyticsService {
    pub fn new(api: AdminApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AnalyticsService for ApiAnalyticsService {
    async fn dashboard(&self) -> Result<Sourced<DashboardSummary>, AnalyticsServiceError> {
        match self.api.get_json("/analytics/dashboard").await {
            Ok(summary) => Ok(Sourced::live(summary)),
            Err(error) if should_fall_back(&error) => {
                warn!("analytics backend unavailable, showing sample dashboard: {error}");

                Ok(Sourced::fallback(sample::dashboard()))
            }
            Err(error) => Err(error.into()),
        }
    }

    async fn revenue_report(&self) -> Result<Sourced<RevenueReport>, AnalyticsServiceError> {
        match self.api.get_json("/analytics/revenue").await {
            Ok(report) => Ok(Sourced::live(report)),
            Err(error) if should_fall_back(&error) => {
                warn!("analytics backend unavailable, showing sample revenue: {error}");

                Ok(Sourced::fallback(sample::revenue_report()))
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// In-memory analytics serving the sample figures as live data; backs the
/// bundled server.
#[derive(Debug, Default)]
pub struct MemAnalyticsService;

impl MemAnalyticsService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AnalyticsService for MemAnalyticsService {
    async fn dashboard(&self) -> Result<Sourced<DashboardSummary>, AnalyticsServiceError> {
        Ok(Sourced::live(sample::dashboard()))
    }

    async fn revenue_report(&self) -> Result<Sourced<RevenueReport>, AnalyticsServiceError> {
        Ok(Sourced::live(sample::revenue_report()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::api::AdminApiConfig;

    use super::*;

    #[tokio::test]
    async fn unreachable_backend_degrades_to_sample_figures() -> TestResult {
        let service = ApiAnalyticsService::new(AdminApiClient::new(AdminApiConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            admin_key: "secret".to_owned(),
        }));

        let dashboard = service.dashboard().await?;

        assert!(dashboard.is_fallback());
        assert!(dashboard.data.total_visitors > 0, "sample has figures");

        Ok(())
    }

    #[tokio::test]
    async fn revenue_report_daily_sums_match_totals() -> TestResult {
        let service = MemAnalyticsService::new();

        let report = service.revenue_report().await?.data;

        let daily_revenue: u64 = report.daily.iter().map(|day| day.revenue).sum();
        let daily_orders: u64 = report.daily.iter().map(|day| day.orders).sum();

        assert_eq!(daily_revenue, report.total_revenue);
        assert_eq!(daily_orders, report.total_orders);
        assert_eq!(
            report.grand_total,
            report.total_revenue + report.delivery_revenue
        );

        Ok(())
    }
}
