//! Order hand-off to the external checkout collaborator.
//!
//! Checkout itself (payment, delivery scheduling) happens outside this crate;
//! what the core owns is validating the customer details and composing the
//! plain-text order summary that gets handed to the messaging compose screen.

use serde::{Deserialize, Serialize};

use crate::{
    cart::Cart,
    catalog::{ShopInfo, format_inr},
};

/// Customer details collected on the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: String,

    /// Contact phone number used for confirmation.
    pub phone: String,

    /// Full delivery address.
    pub address: String,

    /// Requested delivery date in display form.
    pub delivery_date: String,
}

impl CustomerDetails {
    /// Whether every required field is filled in. Like the greeting gate,
    /// incompleteness disables the submit control rather than raising.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.phone.is_empty()
            && !self.address.is_empty()
            && !self.delivery_date.is_empty()
    }
}

/// Compose the plain-text order summary for the messaging hand-off.
///
/// Lists every cart line with its line total, then the grand total and the
/// delivery details. The caller is expected to have checked
/// [`Cart::is_empty`] and [`CustomerDetails::is_complete`] first; an empty
/// cart still produces a well-formed (if useless) message.
#[must_use]
pub fn order_message(cart: &Cart, customer: &CustomerDetails, shop: &ShopInfo) -> String {
    let mut message = format!("🪔 New order for {}\n\n", shop.name);

    for line in cart.lines() {
        message.push_str(&format!(
            "• {} × {} ({}) — {}\n",
            line.quantity,
            line.name,
            line.unit,
            format_inr(line.line_total()),
        ));
    }

    message.push_str(&format!("\nTotal: {}\n", format_inr(cart.total_price())));
    message.push_str(&format!("\nName: {}\n", customer.name));
    message.push_str(&format!("Phone: {}\n", customer.phone));
    message.push_str(&format!("Address: {}\n", customer.address));
    message.push_str(&format!("Delivery date: {}", customer.delivery_date));

    message
}
