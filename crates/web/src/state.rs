//! State

use std::sync::Arc;

use thiserror::Error;
use utsav::{
    card::CardExporter,
    catalog::{self, Catalog},
    store::MemoryStore,
};
use utsav_admin::{context::AdminContext, domain::settings::SettingsService};

use crate::{auth::AdminKey, config::ServerConfig, greeting::surface::HttpCardSurface};

/// Errors from building the server state.
#[derive(Debug, Error)]
pub(crate) enum StateInitError {
    /// The configured admin key is unusable.
    #[error("admin key must not be blank")]
    BlankAdminKey,
}

/// Shared application state injected into every handler.
pub(crate) struct State {
    /// Admin domain services.
    pub(crate) admin: AdminContext,

    /// The read-only product catalog.
    pub(crate) catalog: Catalog,

    /// Website settings and hidden-item sets.
    pub(crate) settings: SettingsService,

    /// Card export pipeline.
    pub(crate) exporter: CardExporter,

    /// Verifier for the shared admin secret.
    pub(crate) admin_key: AdminKey,

    /// Public base URL for share links and preview metadata.
    pub(crate) public_base_url: String,
}

impl State {
    /// Build production state from configuration.
    pub(crate) fn from_config(config: &ServerConfig) -> Result<Arc<Self>, StateInitError> {
        if config.auth.admin_key.trim().is_empty() {
            return Err(StateInitError::BlankAdminKey);
        }

        Ok(Arc::new(Self {
            admin: AdminContext::in_memory(),
            catalog: catalog::builtin(),
            settings: SettingsService::new(Arc::new(MemoryStore::new())),
            exporter: CardExporter::new(Arc::new(HttpCardSurface::new())),
            admin_key: AdminKey::new(&config.auth.admin_key),
            public_base_url: config.server.public_base_url.clone(),
        }))
    }
}
