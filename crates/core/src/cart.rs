//! Session cart with merge semantics.
//!
//! The cart holds at most one line per catalog item; adding an item that is
//! already present bumps its quantity instead of inserting a second line.
//! All operations are synchronous and infallible; the only user-visible
//! outcomes are [`Notice`]s.

use serde::{Deserialize, Serialize};

use crate::{
    catalog::{CatalogItem, ItemId},
    notice::Notice,
    store::{self, CART_KEY, KeyValueStore, StoreError},
};

/// One aggregated row in the cart: a catalog item and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The catalog item this line refers to.
    pub id: ItemId,

    /// Item name, copied from the catalog at add time.
    pub name: String,

    /// Unit price in whole rupees, copied from the catalog at add time.
    pub price: u64,

    /// Unit label the price refers to.
    pub unit: String,

    /// How many units; always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.price * u64::from(self.quantity)
    }
}

/// The session-scoped shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item` to the cart.
    ///
    /// If a line for the item already exists its quantity is incremented;
    /// otherwise a new line with quantity 1 is inserted. Always succeeds and
    /// returns the confirmation notice to show the user.
    pub fn add(&mut self, item: &CatalogItem) -> Notice {
        match self.lines.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                unit: item.unit.clone(),
                quantity: 1,
            }),
        }

        Notice::added_to_cart(&item.name)
    }

    /// Set the quantity of the line with `id`.
    ///
    /// A quantity of 0 removes the line. When no line with `id` exists this
    /// is a no-op; the quantity controls only ever reference lines that are
    /// present.
    pub fn update_quantity(&mut self, id: &ItemId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.id == *id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line with `id`, if present.
    ///
    /// Returns the removal notice when a line was actually removed.
    pub fn remove(&mut self, id: &ItemId) -> Option<Notice> {
        let before = self.lines.len();

        self.lines.retain(|line| line.id != *id);

        (self.lines.len() < before).then(Notice::item_removed)
    }

    /// Empty the cart; used after checkout completes.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities (the cart-count badge).
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of `price × quantity` over all lines, in whole rupees.
    #[must_use]
    pub fn total_price(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Whether the cart has no lines; callers show an "empty cart" message
    /// instead of a summary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Persist the cart to the injected store so a session survives a
    /// reload. Opt-in; a cart that is never persisted starts empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the cart cannot be serialized.
    pub fn persist(&self, kv: &dyn KeyValueStore) -> Result<(), StoreError> {
        store::set_json(kv, CART_KEY, self)
    }

    /// Restore a previously persisted cart, or an empty one when nothing
    /// was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when a stored value exists but does not
    /// parse.
    pub fn restore(kv: &dyn KeyValueStore) -> Result<Self, StoreError> {
        Ok(store::get_json(kv, CART_KEY)?.unwrap_or_default())
    }
}
