//! Website settings

pub mod models;
pub mod service;

pub use models::WebsiteSettings;
pub use service::SettingsService;
