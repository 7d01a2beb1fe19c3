//! Transient user-facing notifications.
//!
//! Every confirmation and every caught failure in the storefront surfaces as
//! a [`Notice`] rather than an exception: the UI layer renders them as toasts
//! and throws them away.

/// A transient notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Short headline.
    pub title: String,

    /// One or two sentences of detail.
    pub body: String,
}

impl Notice {
    /// Create a notice from a title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation shown after an item lands in the cart.
    #[must_use]
    pub fn added_to_cart(item_name: &str) -> Self {
        Self::new(
            "Added to Cart!",
            format!("{item_name} has been added to your cart."),
        )
    }

    /// Confirmation shown after a cart line is removed.
    #[must_use]
    pub fn item_removed() -> Self {
        Self::new("Item Removed", "Item has been removed from your cart.")
    }

    /// Shown when the user opens an empty cart.
    #[must_use]
    pub fn cart_empty() -> Self {
        Self::new(
            "Cart is Empty",
            "Add some delicious items to your cart first!",
        )
    }

    /// Confirmation shown once a greeting passes the completeness gate.
    #[must_use]
    pub fn greeting_created() -> Self {
        Self::new(
            "Greeting Created!",
            "Your personalized greeting is ready to share.",
        )
    }

    /// Shown when a card export fails; the composer state is untouched and
    /// the user can retry.
    #[must_use]
    pub fn export_failed(reason: &str) -> Self {
        Self::new("Download Failed", format!("{reason}. Please try again."))
    }

    /// Shown when both the clipboard write and the legacy fallback failed.
    #[must_use]
    pub fn copy_failed() -> Self {
        Self::new(
            "Copy Failed",
            "Could not access the clipboard. Please copy the text manually.",
        )
    }
}
