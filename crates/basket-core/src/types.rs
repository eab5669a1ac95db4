//! # Domain Types
//!
//! Core domain types used throughout Basket.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │  CartLineItem   │   │  CheckoutSummary    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │──►│  product_id     │──►│  items_purchased    │   │
//! │  │  name           │   │  product_name   │   │  total_cost         │   │
//! │  │  price          │   │  quantity       │   │  confirmation_msg   │   │
//! │  │  (immutable)    │   │  price_at_add   │   │  order_id           │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item copies the product name and price when it is first created.
//! Later catalog changes never reach an item already in a cart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

/// Catalog identifier of a product.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase. Seeded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique catalog id.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Money,
}

impl Product {
    /// Creates a product.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Product {
            id,
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product's entry in a cart.
///
/// ## Invariants
/// - `quantity >= 1`; an item reaching zero is removed from its cart
/// - `product_name`, `price_at_add` and `added_at` are frozen at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product this line refers to.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub product_name: String,

    /// Quantity in cart.
    pub quantity: i64,

    /// Unit price at time of adding (frozen).
    pub price_at_add: Money,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a line item from a product, freezing its name and price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLineItem {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            price_at_add: product.price,
            added_at: Utc::now(),
        }
    }

    /// `quantity × price_at_add`, or `None` if it overflows.
    pub fn subtotal(&self) -> Option<Money> {
        self.price_at_add.checked_multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Result of a successful checkout. Not persisted.
///
/// `items_purchased` is an owned copy; it shares nothing with the live cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Reference for the processed order.
    #[ts(as = "String")]
    pub order_id: Uuid,

    /// The line items that were purchased, in cart order.
    pub items_purchased: Vec<CartLineItem>,

    /// Sum of all line subtotals.
    pub total_cost: Money,

    /// Fixed confirmation text.
    pub confirmation_message: String,

    /// When checkout completed.
    #[ts(as = "String")]
    pub checked_out_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_snapshots_product() {
        let mouse = Product::new(2, "Mouse", Money::from_cents(2550));
        let item = CartLineItem::from_product(&mouse, 2);

        assert_eq!(item.product_id, 2);
        assert_eq!(item.product_name, "Mouse");
        assert_eq!(item.price_at_add, Money::from_cents(2550));
        assert_eq!(item.subtotal(), Some(Money::from_cents(5100)));
    }

    #[test]
    fn test_line_item_wire_format() {
        let webcam = Product::new(5, "Webcam", Money::from_cents(5000));
        let json = serde_json::to_value(CartLineItem::from_product(&webcam, 1)).unwrap();

        assert_eq!(json["productId"], 5);
        assert_eq!(json["productName"], "Webcam");
        assert_eq!(json["priceAtAdd"], 50.0);
        assert!(json.get("addedAt").is_some());
    }
}
