//! Settings service.
//!
//! Settings and the hidden-product/hidden-review sets are UI-side state:
//! they live in the injected key-value store so they survive reloads without
//! touching the backend.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use utsav::{
    catalog::ItemId,
    store::{self, HIDDEN_PRODUCTS_KEY, HIDDEN_REVIEWS_KEY, KeyValueStore, SETTINGS_KEY, StoreError},
};
use uuid::Uuid;

use crate::domain::settings::models::WebsiteSettings;

/// Reads and writes website settings through the injected store.
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Current website settings, or the defaults when nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a stored value exists but does not
    /// parse.
    pub fn website_settings(&self) -> Result<WebsiteSettings, StoreError> {
        Ok(store::get_json(self.store.as_ref(), SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Persist new website settings.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when serialization fails.
    pub fn save_website_settings(&self, settings: &WebsiteSettings) -> Result<(), StoreError> {
        store::set_json(self.store.as_ref(), SETTINGS_KEY, settings)
    }

    /// The set of catalog items hidden from the storefront.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a stored value exists but does not
    /// parse.
    pub fn hidden_products(&self) -> Result<FxHashSet<ItemId>, StoreError> {
        Ok(store::get_json(self.store.as_ref(), HIDDEN_PRODUCTS_KEY)?.unwrap_or_default())
    }

    /// Hide or unhide a catalog item.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the stored set does not parse or cannot
    /// be re-serialized.
    pub fn set_product_hidden(&self, id: &ItemId, hidden: bool) -> Result<(), StoreError> {
        let mut set = self.hidden_products()?;

        if hidden {
            set.insert(id.clone());
        } else {
            set.remove(id);
        }

        store::set_json(self.store.as_ref(), HIDDEN_PRODUCTS_KEY, &set)
    }

    /// Whether an item is hidden; unreadable state counts as visible.
    pub fn is_product_hidden(&self, id: &ItemId) -> bool {
        self.hidden_products()
            .map(|set| set.contains(id))
            .unwrap_or(false)
    }

    /// The set of reviews hidden from the storefront.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a stored value exists but does not
    /// parse.
    pub fn hidden_reviews(&self) -> Result<FxHashSet<Uuid>, StoreError> {
        Ok(store::get_json(self.store.as_ref(), HIDDEN_REVIEWS_KEY)?.unwrap_or_default())
    }

    /// Hide or unhide a review.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the stored set does not parse or cannot
    /// be re-serialized.
    pub fn set_review_hidden(&self, id: Uuid, hidden: bool) -> Result<(), StoreError> {
        let mut set = self.hidden_reviews()?;

        if hidden {
            set.insert(id);
        } else {
            set.remove(&id);
        }

        store::set_json(self.store.as_ref(), HIDDEN_REVIEWS_KEY, &set)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use utsav::store::MemoryStore;

    use super::*;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn defaults_before_anything_is_saved() -> TestResult {
        let settings = service().website_settings()?;

        assert_eq!(settings, WebsiteSettings::default());
        assert!(settings.accepting_orders);

        Ok(())
    }

    #[test]
    fn saved_settings_survive_a_reload() -> TestResult {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

        let mut settings = WebsiteSettings::default();
        settings.accepting_orders = false;
        settings.delivery_note = "Closed for Diwali week".to_owned();

        SettingsService::new(Arc::clone(&store)).save_website_settings(&settings)?;

        // A fresh service over the same store sees the saved state.
        let reloaded = SettingsService::new(store).website_settings()?;

        assert_eq!(reloaded, settings);

        Ok(())
    }

    #[test]
    fn hiding_a_product_round_trips() -> TestResult {
        let service = service();
        let id = ItemId::from("poha-chivda");

        assert!(!service.is_product_hidden(&id));

        service.set_product_hidden(&id, true)?;

        assert!(service.is_product_hidden(&id));

        service.set_product_hidden(&id, false)?;

        assert!(!service.is_product_hidden(&id));

        Ok(())
    }

    #[test]
    fn hidden_reviews_round_trip() -> TestResult {
        let service = service();
        let id = Uuid::now_v7();

        service.set_review_hidden(id, true)?;

        assert!(service.hidden_reviews()?.contains(&id));

        Ok(())
    }
}
