//! Bundled sample data.
//!
//! Seeds the in-memory services and stands in for the backend when it is
//! unreachable. Reads served from here are tagged
//! [`DataSource::Fallback`](crate::domain::DataSource::Fallback) by the API
//! services so the console can label them; the figures themselves are
//! static, not derived from anything.

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use utsav::catalog::ItemId;
use uuid::Uuid;

use crate::domain::{
    analytics::models::{DailyRevenue, DashboardSummary, RevenueReport},
    contacts::models::Contact,
    orders::models::{DeliveryStatus, Order, OrderLine, PaymentStatus},
    reviews::models::{ReviewRequest, ReviewStatus},
};

fn line(item_id: &str, name: &str, quantity: u32, price: u64) -> OrderLine {
    OrderLine {
        item_id: ItemId::from(item_id),
        name: name.to_owned(),
        quantity,
        price,
    }
}

/// Sample orders covering the main status combinations.
pub fn orders() -> Vec<Order> {
    let now = Timestamp::now();

    vec![
        Order {
            id: Uuid::now_v7(),
            customer_name: "Priya Sharma".to_owned(),
            phone: "+91 98200 44556".to_owned(),
            address: "B-203, Shanti Heights, Borivali (W), Mumbai".to_owned(),
            lines: vec![
                line("poha-chivda", "Poha Chivda", 2, 600),
                line("besan-laddu", "Besan Laddu", 1, 1050),
            ],
            total: 2250,
            delivery_status: DeliveryStatus::Pending,
            payment_status: PaymentStatus::Pending,
            notes: None,
            created_at: now,
            updated_at: now,
        },
        Order {
            id: Uuid::now_v7(),
            customer_name: "Rohit Deshmukh".to_owned(),
            phone: "+91 99870 11223".to_owned(),
            address: "14, Sai Krupa Society, Dahisar (E), Mumbai".to_owned(),
            lines: vec![
                line("rice-chakli", "Rice Chakli", 3, 625),
                line("gujjia", "Gujjia", 20, 35),
            ],
            total: 2575,
            delivery_status: DeliveryStatus::OutForDelivery,
            payment_status: PaymentStatus::Paid,
            notes: Some("Call before delivery".to_owned()),
            created_at: now,
            updated_at: now,
        },
        Order {
            id: Uuid::now_v7(),
            customer_name: "Sunita Kulkarni".to_owned(),
            phone: "+91 98330 55667".to_owned(),
            address: "7A, Gokul Niwas, Kandivali (W), Mumbai".to_owned(),
            lines: vec![line(
                "makhana-chivda-dry-fruits",
                "Makhana Chivda - Masala & Dry Fruits",
                1,
                1850,
            )],
            total: 1850,
            delivery_status: DeliveryStatus::Delivered,
            payment_status: PaymentStatus::Paid,
            notes: None,
            created_at: now,
            updated_at: now,
        },
    ]
}

/// Sample dashboard figures.
pub fn dashboard() -> DashboardSummary {
    DashboardSummary {
        total_visitors: 1_248,
        new_visitors: 803,
        returning_visitors: 445,
        unique_customers: 67,
        orders_count: 92,
        total_revenue: 148_750,
        cart_abandonment: Decimal::new(18, 2),
    }
}

/// Sample revenue report; daily figures sum to the window totals.
pub fn revenue_report() -> RevenueReport {
    let daily = vec![
        DailyRevenue {
            date: Date::constant(2026, 10, 15),
            orders: 12,
            revenue: 18_450,
        },
        DailyRevenue {
            date: Date::constant(2026, 10, 16),
            orders: 9,
            revenue: 14_200,
        },
        DailyRevenue {
            date: Date::constant(2026, 10, 17),
            orders: 17,
            revenue: 26_900,
        },
    ];

    let total_orders = daily.iter().map(|day| day.orders).sum();
    let total_revenue: u64 = daily.iter().map(|day| day.revenue).sum();
    let delivery_revenue = 1_900;

    RevenueReport {
        total_orders,
        total_revenue,
        delivery_revenue,
        grand_total: total_revenue + delivery_revenue,
        daily,
    }
}

/// Sample contact list.
pub fn contacts() -> Vec<Contact> {
    let now = Timestamp::now();

    vec![
        Contact {
            id: Uuid::now_v7(),
            name: "Anjali Patil".to_owned(),
            phone: "+91 98200 77889".to_owned(),
            email: Some("anjali.patil@example.com".to_owned()),
            relationship: "customer".to_owned(),
            notes: Some("Orders every Diwali".to_owned()),
            created_at: now,
        },
        Contact {
            id: Uuid::now_v7(),
            name: "Vikram Mehta".to_owned(),
            phone: "+91 98920 33445".to_owned(),
            email: None,
            relationship: "friend".to_owned(),
            notes: None,
            created_at: now,
        },
    ]
}

/// Sample review requests across the moderation states.
pub fn review_requests() -> Vec<ReviewRequest> {
    let now = Timestamp::now();

    vec![
        ReviewRequest {
            id: Uuid::now_v7(),
            item_id: ItemId::from("poha-chivda"),
            customer_name: "Priya Sharma".to_owned(),
            rating: 5,
            comment: "Crispy and fresh, just like homemade!".to_owned(),
            status: ReviewStatus::Approved,
            created_at: now,
        },
        ReviewRequest {
            id: Uuid::now_v7(),
            item_id: ItemId::from("besan-laddu"),
            customer_name: "Rohit Deshmukh".to_owned(),
            rating: 4,
            comment: "Lovely cardamom flavour, slightly sweet for my taste.".to_owned(),
            status: ReviewStatus::Pending,
            created_at: now,
        },
        ReviewRequest {
            id: Uuid::now_v7(),
            item_id: ItemId::from("rice-chakli"),
            customer_name: "Anonymous".to_owned(),
            rating: 1,
            comment: "spam spam spam".to_owned(),
            status: ReviewStatus::Hidden,
            created_at: now,
        },
    ]
}
