use clap::{Args, Subcommand};
use tabled::{builder::Builder, settings::Style};
use utsav_admin::domain::reviews::models::ReviewStatus;
use uuid::Uuid;

use crate::cli::{ApiArgs, warn_if_fallback};

#[derive(Debug, Args)]
pub(crate) struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReviewsSubcommand {
    /// List review requests
    List(ListReviewsArgs),
    /// Approve or hide one review
    SetStatus(SetStatusArgs),
}

#[derive(Debug, Args)]
struct ListReviewsArgs {
    #[command(flatten)]
    api: ApiArgs,
}

#[derive(Debug, Args)]
struct SetStatusArgs {
    #[command(flatten)]
    api: ApiArgs,

    /// Review UUID
    #[arg(long)]
    id: Uuid,

    /// New status (pending|approved|hidden)
    #[arg(long)]
    status: String,
}

pub(crate) async fn run(command: ReviewsCommand) -> Result<(), String> {
    match command.command {
        ReviewsSubcommand::List(args) => list(args).await,
        ReviewsSubcommand::SetStatus(args) => set_status(args).await,
    }
}

async fn list(args: ListReviewsArgs) -> Result<(), String> {
    let context = args.api.context();

    let reviews = context
        .reviews
        .list_requests()
        .await
        .map_err(|error| format!("failed to list reviews: {error}"))?;

    warn_if_fallback(reviews.is_fallback());

    if reviews.data.is_empty() {
        println!("no review requests found");
        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record(["id", "item", "customer", "rating", "status", "comment"]);

    for review in &reviews.data {
        builder.push_record([
            review.id.to_string(),
            review.item_id.to_string(),
            review.customer_name.clone(),
            format!("{}★", review.rating),
            review.status.key().to_owned(),
            review.comment.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    println!("{table}");

    Ok(())
}

async fn set_status(args: SetStatusArgs) -> Result<(), String> {
    let status = ReviewStatus::from_key(&args.status)
        .ok_or_else(|| format!("unknown review status `{}`", args.status))?;

    let context = args.api.context();

    let review = context
        .reviews
        .set_status(args.id, status)
        .await
        .map_err(|error| format!("failed to update review: {error}"))?;

    println!("review: {}", review.id);
    println!("status: {}", review.status.key());

    Ok(())
}
