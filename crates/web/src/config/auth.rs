//! Admin Auth Config

use clap::Args;

/// Admin authentication settings.
///
/// There is deliberately no default: a deployment must choose its own
/// secret.
#[derive(Debug, Args)]
pub struct AdminAuthConfig {
    /// Shared admin secret expected in the `admin_key` query parameter
    #[arg(long, env = "ADMIN_KEY", hide_env_values = true)]
    pub admin_key: String,
}
