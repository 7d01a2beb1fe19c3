//! Admin settings endpoints.
//!
//! Settings live in the injected key-value store on the server, the
//! counterpart of the original console's browser-local persistence.

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::{JsonBody, PathParam}},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use utsav::catalog::ItemId;
use utsav_admin::domain::settings::WebsiteSettings;

use crate::{extensions::*, state::State};

/// Website settings on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SettingsPayload {
    /// Shop display name.
    pub shop_name: String,

    /// One-line tagline.
    pub tagline: String,

    /// Landing-page description.
    pub description: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact email address.
    pub email: String,

    /// Pickup/delivery area.
    pub address: String,

    /// FSSAI license number.
    pub fssai_license: String,

    /// Note shown on the order form.
    pub delivery_note: String,

    /// Whether the storefront currently accepts orders.
    pub accepting_orders: bool,
}

impl From<WebsiteSettings> for SettingsPayload {
    fn from(settings: WebsiteSettings) -> Self {
        Self {
            shop_name: settings.shop_name,
            tagline: settings.tagline,
            description: settings.description,
            phone: settings.phone,
            email: settings.email,
            address: settings.address,
            fssai_license: settings.fssai_license,
            delivery_note: settings.delivery_note,
            accepting_orders: settings.accepting_orders,
        }
    }
}

impl From<SettingsPayload> for WebsiteSettings {
    fn from(payload: SettingsPayload) -> Self {
        Self {
            shop_name: payload.shop_name,
            tagline: payload.tagline,
            description: payload.description,
            phone: payload.phone,
            email: payload.email,
            address: payload.address,
            fssai_license: payload.fssai_license,
            delivery_note: payload.delivery_note,
            accepting_orders: payload.accepting_orders,
        }
    }
}

/// Product visibility request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HiddenRequest {
    /// Whether the product should be hidden from the storefront.
    pub hidden: bool,
}

/// Product visibility response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct HiddenResponse {
    /// The product id.
    pub id: String,

    /// Whether it is now hidden.
    pub hidden: bool,
}

/// Settings Handler
///
/// Returns the current website settings (defaults when none were saved).
#[endpoint(tags("admin-settings"), summary = "Get Settings")]
pub(crate) async fn get_handler(depot: &mut Depot) -> Result<Json<SettingsPayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let settings = state
        .settings
        .website_settings()
        .or_500("failed to read website settings")?;

    Ok(Json(settings.into()))
}

/// Settings Update Handler
///
/// Replaces the website settings.
#[endpoint(tags("admin-settings"), summary = "Update Settings")]
pub(crate) async fn put_handler(
    json: JsonBody<SettingsPayload>,
    depot: &mut Depot,
) -> Result<Json<SettingsPayload>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let settings: WebsiteSettings = json.into_inner().into();

    state
        .settings
        .save_website_settings(&settings)
        .or_500("failed to save website settings")?;

    Ok(Json(settings.into()))
}

/// Product Visibility Handler
///
/// Hides or unhides one catalog item on the public storefront.
#[endpoint(tags("admin-settings"), summary = "Set Product Visibility")]
pub(crate) async fn hide_product_handler(
    id: PathParam<String>,
    json: JsonBody<HiddenRequest>,
    depot: &mut Depot,
) -> Result<Json<HiddenResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ItemId::new(id.into_inner());

    if state.catalog.item(&id).is_none() {
        return Err(StatusError::not_found().brief("Item not found"));
    }

    let hidden = json.into_inner().hidden;

    state
        .settings
        .set_product_hidden(&id, hidden)
        .or_500("failed to update product visibility")?;

    Ok(Json(HiddenResponse {
        id: id.to_string(),
        hidden,
    }))
}
