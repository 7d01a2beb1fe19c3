//! Catalog endpoints.
//!
//! Public, read-only views of the built-in menu. Items the admin has hidden
//! are filtered out before anything leaves the server.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utsav::catalog::{CatalogItem, Category, ItemId};

use crate::{extensions::*, state::State};

/// One catalog item on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ItemResponse {
    /// Stable item id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description.
    pub description: String,

    /// Price in whole rupees.
    pub price: u64,

    /// Unit label.
    pub unit: String,

    /// Product photo URLs.
    pub images: Vec<String>,

    /// Average rating, when any reviews exist.
    pub rating: Option<String>,

    /// Number of reviews behind the rating.
    pub total_reviews: Option<u32>,
}

impl From<&CatalogItem> for ItemResponse {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            unit: item.unit.clone(),
            images: item.images.to_vec(),
            rating: item.rating.map(|rating| rating.to_string()),
            total_reviews: item.total_reviews,
        }
    }
}

/// One category on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoryResponse {
    /// Stable category id.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description.
    pub description: String,

    /// Decorative emoji.
    pub icon: String,

    /// Visible items in this category.
    pub items: Vec<ItemResponse>,
}

/// The whole menu on the wire.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CatalogResponse {
    /// Shop display name.
    pub shop_name: String,

    /// Number of visible items across all categories.
    pub item_count: usize,

    /// Categories in display order.
    pub categories: Vec<CategoryResponse>,
}

fn visible_category(category: &Category, hidden: &FxHashSet<ItemId>) -> CategoryResponse {
    CategoryResponse {
        id: category.id.clone(),
        name: category.name.clone(),
        description: category.description.clone(),
        icon: category.icon.clone(),
        items: category
            .items
            .iter()
            .filter(|item| !hidden.contains(&item.id))
            .map(ItemResponse::from)
            .collect(),
    }
}

/// Catalog Index Handler
///
/// Returns the full menu with hidden items filtered out.
#[endpoint(tags("catalog"), summary = "Get Catalog")]
pub(crate) async fn index_handler(depot: &mut Depot) -> Result<Json<CatalogResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    // A broken settings store must not take the public menu down; it only
    // stops items from being hidden.
    let hidden = state.settings.hidden_products().unwrap_or_else(|error| {
        warn!("could not read hidden products, showing everything: {error}");

        FxHashSet::default()
    });

    let categories: Vec<CategoryResponse> = state
        .catalog
        .categories()
        .iter()
        .map(|category| visible_category(category, &hidden))
        .collect();

    let item_count = categories.iter().map(|category| category.items.len()).sum();

    Ok(Json(CatalogResponse {
        shop_name: utsav::catalog::shop_info().name,
        item_count,
        categories,
    }))
}

/// Catalog Item Handler
///
/// Returns a single item, or 404 when it is unknown or hidden.
#[endpoint(tags("catalog"), summary = "Get Catalog Item")]
pub(crate) async fn get_handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ItemResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = ItemId::new(id.into_inner());

    if state.settings.is_product_hidden(&id) {
        return Err(StatusError::not_found().brief("Item not found"));
    }

    state
        .catalog
        .item(&id)
        .map(|item| Json(ItemResponse::from(item)))
        .ok_or_else(|| StatusError::not_found().brief("Item not found"))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;
    use utsav::catalog::ItemId;

    use crate::test_helpers::{service_with, test_state};

    use super::*;

    fn routes() -> Router {
        Router::with_path("catalog")
            .get(index_handler)
            .push(Router::with_path("items/{id}").get(get_handler))
    }

    #[tokio::test]
    async fn test_index_returns_the_full_menu() -> TestResult {
        let state = test_state();

        let response: CatalogResponse = TestClient::get("http://example.com/catalog")
            .send(&service_with(state, routes()))
            .await
            .take_json()
            .await?;

        assert!(response.item_count > 20, "full menu is served");
        assert_eq!(response.categories.len(), 5, "all categories present");
        assert_eq!(response.shop_name, "Aparna's Diwali Delights");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_filters_hidden_items() -> TestResult {
        let state = test_state();

        state
            .settings
            .set_product_hidden(&ItemId::from("poha-chivda"), true)?;

        let response: CatalogResponse = TestClient::get("http://example.com/catalog")
            .send(&service_with(state, routes()))
            .await
            .take_json()
            .await?;

        let all_ids: Vec<&str> = response
            .categories
            .iter()
            .flat_map(|category| category.items.iter().map(|item| item.id.as_str()))
            .collect();

        assert!(!all_ids.contains(&"poha-chivda"), "hidden item filtered");
        assert!(all_ids.contains(&"rice-chakli"), "other items remain");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_known_item() -> TestResult {
        let response: ItemResponse =
            TestClient::get("http://example.com/catalog/items/poha-chivda")
                .send(&service_with(test_state(), routes()))
                .await
                .take_json()
                .await?;

        assert_eq!(response.id, "poha-chivda");
        assert_eq!(response.price, 600);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_unknown_item_returns_404() {
        let res = TestClient::get("http://example.com/catalog/items/no-such-item")
            .send(&service_with(test_state(), routes()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_hidden_item_returns_404() -> TestResult {
        let state = test_state();

        state
            .settings
            .set_product_hidden(&ItemId::from("poha-chivda"), true)?;

        let res = TestClient::get("http://example.com/catalog/items/poha-chivda")
            .send(&service_with(state, routes()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
