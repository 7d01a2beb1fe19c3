use clap::{Args, Parser, Subcommand};
use utsav_admin::{api::AdminApiConfig, context::AdminContext};

mod analytics;
mod contacts;
mod orders;
mod reviews;

#[derive(Debug, Parser)]
#[command(name = "utsav-admin", about = "Utsav admin console", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Orders(orders::OrdersCommand),
    Analytics(analytics::AnalyticsCommand),
    Contacts(contacts::ContactsCommand),
    Reviews(reviews::ReviewsCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Orders(command) => orders::run(command).await,
            Commands::Analytics(command) => analytics::run(command).await,
            Commands::Contacts(command) => contacts::run(command).await,
            Commands::Reviews(command) => reviews::run(command).await,
        }
    }
}

/// Backend connection arguments shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct ApiArgs {
    /// Admin API base URL
    #[arg(long, env = "ADMIN_API_URL", default_value = "http://localhost:8698")]
    base_url: String,

    /// Shared admin secret
    #[arg(long, env = "ADMIN_KEY", hide_env_values = true)]
    admin_key: String,
}

impl ApiArgs {
    pub(crate) fn context(&self) -> AdminContext {
        AdminContext::remote(AdminApiConfig {
            base_url: self.base_url.clone(),
            admin_key: self.admin_key.clone(),
        })
    }
}

/// One consistent warning line for reads served from sample data.
pub(crate) fn warn_if_fallback(is_fallback: bool) {
    if is_fallback {
        println!("backend unreachable; showing bundled sample data\n");
    }
}
