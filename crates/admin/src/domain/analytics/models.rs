//! Analytics Models
//!
//! These are display summaries computed by the backend; the console never
//! derives figures of its own from unrelated data.

use decimal_percentage::Percentage;
use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The dashboard headline figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
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

    /// Fraction of carts abandoned before checkout, in `0..=1`.
    pub cart_abandonment: Decimal,
}

impl DashboardSummary {
    /// The abandonment fraction as a percentage value.
    pub fn cart_abandonment_rate(&self) -> Percentage {
        Percentage::from(self.cart_abandonment)
    }
}

/// One day of the revenue report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRevenue {
    /// The day.
    pub date: Date,

    /// Orders placed that day.
    pub orders: u64,

    /// Revenue that day, in whole rupees.
    pub revenue: u64,
}

/// Revenue over the reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// Orders in the window.
    pub total_orders: u64,

    /// Item revenue in whole rupees.
    pub total_revenue: u64,

    /// Delivery-fee revenue in whole rupees.
    pub delivery_revenue: u64,

    /// Item plus delivery revenue.
    pub grand_total: u64,

    /// Per-day breakdown, oldest first.
    pub daily: Vec<DailyRevenue>,
}

/// Convert a fractional [`Percentage`] to percent points for display
/// (`0.18` → `18`).
pub fn percent_points(percentage: Percentage) -> Decimal {
    ((percentage * Decimal::ONE) * Decimal::from(100)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abandonment_rate_wraps_the_fraction() {
        let summary = DashboardSummary {
            total_visitors: 100,
            new_visitors: 60,
            returning_visitors: 40,
            unique_customers: 12,
            orders_count: 15,
            total_revenue: 24_000,
            cart_abandonment: Decimal::new(18, 2),
        };

        assert_eq!(
            percent_points(summary.cart_abandonment_rate()),
            Decimal::from(18)
        );
    }
}
