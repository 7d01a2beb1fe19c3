use clap::{Args, Subcommand};
use tabled::{builder::Builder, settings::Style};
use utsav::catalog::format_inr;
use utsav_admin::domain::orders::models::{DeliveryStatus, OrderUpdate, PaymentStatus};
use uuid::Uuid;

use crate::cli::{ApiArgs, warn_if_fallback};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List all orders
    List(ListOrdersArgs),
    /// Update one order's status or notes
    Update(UpdateOrderArgs),
}

#[derive(Debug, Args)]
struct ListOrdersArgs {
    #[command(flatten)]
    api: ApiArgs,
}

#[derive(Debug, Args)]
struct UpdateOrderArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Order UUID
    #[arg(long)]
    id: Uuid,

    /// New delivery status
    /// (pending|confirmed|preparing|out_for_delivery|delivered|cancelled)
    #[arg(long)]
    delivery_status: Option<String>,

    /// New payment status (pending|paid|refunded)
    #[arg(long)]
    payment_status: Option<String>,

    /// Admin notes
    #[arg(long)]
    notes: Option<String>,
}

pub(crate) async fn run(command: OrdersCommand) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List(args) => list(args).await,
        OrdersSubcommand::Update(args) => update(args).await,
    }
}

async fn list(args: ListOrdersArgs) -> Result<(), String> {
    let context = args.api.context();

    let orders = context
        .orders
        .list_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    warn_if_fallback(orders.is_fallback());

    if orders.data.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["id", "customer", "items", "total", "delivery", "payment"]);

    for order in &orders.data {
        let items = order
            .lines
            .iter()
            .map(|line| format!("{} × {}", line.quantity, line.name))
            .collect::<Vec<_>>()
            .join(", ");

        builder.push_record([
            order.id.to_string(),
            order.customer_name.clone(),
            items,
            format_inr(order.total),
            order.delivery_status.key().to_owned(),
            order.payment_status.key().to_owned(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}

async fn update(args: UpdateOrderArgs) -> Result<(), String> {
    let delivery_status = args
        .delivery_status
        .as_deref()
        .map(|key| {
            DeliveryStatus::from_key(key).ok_or_else(|| format!("unknown delivery status `{key}`"))
        })
        .transpose()?;

    let payment_status = args
        .payment_status
        .as_deref()
        .map(|key| {
            PaymentStatus::from_key(key).ok_or_else(|| format!("unknown payment status `{key}`"))
        })
        .transpose()?;

    if delivery_status.is_none() && payment_status.is_none() && args.notes.is_none() {
        return Err("nothing to update; pass --delivery-status, --payment-status or --notes"
            .to_owned());
    }

    let context = args.api.context();

    let order = context
        .orders
        .update_order(
            args.id,
            OrderUpdate {
                delivery_status,
                payment_status,
                notes: args.notes,
            },
        )
        .await
        .map_err(|error| format!("failed to update order: {error}"))?;

    println!("order: {}", order.id);
    println!("delivery_status: {}", order.delivery_status.key());
    println!("payment_status: {}", order.payment_status.key());
    println!(
        "notes: {}",
        order.notes.as_deref().unwrap_or("(none)")
    );

    Ok(())
}
