//! # Cart Types
//!
//! Typed schema for the checkout request body and the provider line items
//! built from it. Deserialization happens once, up front; handlers never
//! poke at loose JSON.

use serde::{Deserialize, Serialize};

fn default_qty() -> u32 {
    1
}

/// A single item in the shopping cart, as sent by the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Product display name
    pub name: String,

    /// Optional variant (size, flavor, ...) appended to the display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,

    /// Unit price in major currency units (e.g. 12.50)
    pub price: f64,

    /// Quantity, defaults to 1 when omitted
    #[serde(default = "default_qty")]
    pub qty: u32,
}

impl CartItem {
    /// Display name for the provider: `"Coffee · Large"` when an option is
    /// present, bare `"Coffee"` otherwise.
    pub fn display_name(&self) -> String {
        match &self.option {
            Some(option) => format!("{} · {}", self.name, option),
            None => self.name.clone(),
        }
    }

    /// Unit price in the smallest currency unit, nearest-integer rounding
    pub fn unit_amount(&self) -> i64 {
        (self.price * 100.0).round() as i64
    }

    /// Quantity as a positive integer
    pub fn quantity(&self) -> u32 {
        self.qty.max(1)
    }
}

/// The checkout request body: `{ "cart": [ ... ] }`
///
/// A body that fails to deserialize into this shape is treated as an empty
/// cart, which then fails validation downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub cart: Vec<CartItem>,
}

impl CheckoutRequest {
    /// Check if the cart has no items
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Build provider line items for the whole cart
    pub fn line_items(&self) -> Vec<LineItem> {
        self.cart.iter().map(LineItem::from_cart_item).collect()
    }
}

/// One priced, quantified entry sent to the payment provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Product display name (name plus variant)
    pub name: String,

    /// Unit price in smallest currency unit (cents, centavos)
    pub unit_amount: i64,

    /// Quantity
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item from a cart item
    pub fn from_cart_item(item: &CartItem) -> Self {
        Self {
            name: item.display_name(),
            unit_amount: item.unit_amount(),
            quantity: item.quantity(),
        }
    }

    /// Total amount for this line item in smallest currency unit
    pub fn total(&self) -> i64 {
        self.unit_amount * self.quantity as i64
    }
}

/// A checkout session created by a payment provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID
    pub id: String,

    /// URL to redirect the customer to for payment
    pub url: String,
}
