use clap::{Args, Subcommand};
use tabled::{builder::Builder, settings::Style};
use utsav::catalog::format_inr;
use utsav_admin::domain::analytics::models::percent_points;

use crate::cli::{ApiArgs, warn_if_fallback};

#[derive(Debug, Args)]
pub(crate) struct AnalyticsCommand {
    #[command(subcommand)]
    command: AnalyticsSubcommand,
}

#[derive(Debug, Subcommand)]
enum AnalyticsSubcommand {
    /// Show the dashboard headline figures
    Dashboard(DashboardArgs),
    /// Show the revenue report
    Revenue(RevenueArgs),
}

#[derive(Debug, Args)]
struct DashboardArgs {
    #[command(flatten)]
    api: ApiArgs,
}

#[derive(Debug, Args)]
struct RevenueArgs {
    #[command(flatten)]
    api: ApiArgs,
}

pub(crate) async fn run(command: AnalyticsCommand) -> Result<(), String> {
    match command.command {
        AnalyticsSubcommand::Dashboard(args) => dashboard(args).await,
        AnalyticsSubcommand::Revenue(args) => revenue(args).await,
    }
}

async fn dashboard(args: DashboardArgs) -> Result<(), String> {
    let context = args.api.context();

    let summary = context
        .analytics
        .dashboard()
        .await
        .map_err(|error| format!("failed to load dashboard: {error}"))?;

    warn_if_fallback(summary.is_fallback());

    let data = summary.data;

    println!("total_visitors: {}", data.total_visitors);
    println!("new_visitors: {}", data.new_visitors);
    println!("returning_visitors: {}", data.returning_visitors);
    println!("unique_customers: {}", data.unique_customers);
    println!("orders: {}", data.orders_count);
    println!("revenue: {}", format_inr(data.total_revenue));
    println!(
        "cart_abandonment: {}%",
        percent_points(data.cart_abandonment_rate())
    );

    Ok(())
}

async fn revenue(args: RevenueArgs) -> Result<(), String> {
    let context = args.api.context();

    let report = context
        .analytics
        .revenue_report()
        .await
        .map_err(|error| format!("failed to load revenue report: {error}"))?;

    warn_if_fallback(report.is_fallback());

    let data = report.data;

    let mut builder = Builder::default();

    builder.push_record(["date", "orders", "revenue"]);

    for day in &data.daily {
        builder.push_record([
            day.date.to_string(),
            day.orders.to_string(),
            format_inr(day.revenue),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    println!("{table}");
    println!();
    println!("total_orders: {}", data.total_orders);
    println!("item_revenue: {}", format_inr(data.total_revenue));
    println!("delivery_revenue: {}", format_inr(data.delivery_revenue));
    println!("grand_total: {}", format_inr(data.grand_total));

    Ok(())
}
