//! # Cart Rules
//!
//! The mutation rules for a single cart: add, remove, total, checkout.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item(product, n)                                                   │
//! │    ├── n <= 0 ──────────────────────────► InvalidArgument               │
//! │    ├── product already in cart ─────────► quantity += n (price kept)    │
//! │    └── otherwise ───────────────────────► push snapshot line            │
//! │                                                                         │
//! │  remove_item(product_id, n)                                             │
//! │    ├── n <= 0 ──────────────────────────► InvalidArgument               │
//! │    ├── not in cart ─────────────────────► no-op                         │
//! │    ├── quantity > n ────────────────────► quantity -= n                 │
//! │    └── quantity <= n ───────────────────► line removed                  │
//! │                                                                         │
//! │  checkout()                                                             │
//! │    ├── empty ───────────────────────────► InvalidState (untouched)      │
//! │    └── otherwise ───────────────────────► summary, cart emptied         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure is detected before the cart is touched, so a failed call
//! always leaves the cart exactly as it was.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLineItem, CheckoutSummary, Product, ProductId};
use crate::validation::{validate_quantity, validate_quantity_to_remove};
use crate::CHECKOUT_CONFIRMATION;

/// What [`Cart::remove_item`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The line stays, with this many units left.
    Decremented { remaining: i64 },
    /// The line was dropped from the cart.
    Removed,
    /// No line for that product; nothing changed.
    NotInCart,
}

/// An ordered list of line items, at most one per product.
///
/// Serializes as a plain JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Wraps an existing ordered list of line items.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Cart { items }
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Consumes the cart, returning its line items.
    pub fn into_items(self) -> Vec<CartLineItem> {
        self.items
    }

    /// Number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines (saturating).
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Returns the line for `product_id`, if any.
    pub fn find(&self, product_id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Adds `quantity` units of `product`.
    ///
    /// An existing line only has its quantity increased; its price snapshot
    /// is not refreshed.
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_qty = item
                .quantity
                .checked_add(quantity)
                .ok_or(CoreError::AmountOverflow { what: "quantity" })?;
            ensure_subtotal_fits(item.price_at_add, new_qty)?;
            item.quantity = new_qty;
            return Ok(());
        }

        ensure_subtotal_fits(product.price, quantity)?;
        self.items.push(CartLineItem::from_product(product, quantity));
        Ok(())
    }

    /// Removes up to `quantity_to_remove` units of `product_id`.
    ///
    /// Removing a product that is not in the cart is a no-op, and
    /// over-removal clamps to dropping the whole line.
    pub fn remove_item(
        &mut self,
        product_id: ProductId,
        quantity_to_remove: i64,
    ) -> CoreResult<RemoveOutcome> {
        validate_quantity_to_remove(quantity_to_remove)?;

        let Some(index) = self.items.iter().position(|i| i.product_id == product_id) else {
            return Ok(RemoveOutcome::NotInCart);
        };

        let item = &mut self.items[index];
        if item.quantity > quantity_to_remove {
            item.quantity -= quantity_to_remove;
            Ok(RemoveOutcome::Decremented {
                remaining: item.quantity,
            })
        } else {
            self.items.remove(index);
            Ok(RemoveOutcome::Removed)
        }
    }

    /// Sum of every line's `quantity × price_at_add`, computed exactly.
    pub fn total(&self) -> CoreResult<Money> {
        self.items.iter().try_fold(Money::zero(), |acc, item| {
            item.subtotal()
                .and_then(|subtotal| acc.checked_add(subtotal))
                .ok_or(CoreError::AmountOverflow { what: "total cost" })
        })
    }

    /// Totals the cart and empties it, returning an owned summary.
    ///
    /// Fails with [`CoreError::EmptyCart`] without touching anything when
    /// there is nothing to buy.
    pub fn checkout(&mut self) -> CoreResult<CheckoutSummary> {
        if self.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total_cost = self.total()?;
        let items_purchased = std::mem::take(&mut self.items);

        Ok(CheckoutSummary {
            order_id: Uuid::new_v4(),
            items_purchased,
            total_cost,
            confirmation_message: CHECKOUT_CONFIRMATION.to_string(),
            checked_out_at: Utc::now(),
        })
    }
}

fn ensure_subtotal_fits(price: Money, quantity: i64) -> CoreResult<()> {
    price
        .checked_multiply_quantity(quantity)
        .map(|_| ())
        .ok_or(CoreError::AmountOverflow {
            what: "line subtotal",
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ValidationError};

    fn laptop() -> Product {
        Product::new(1, "Laptop", Money::from_major_minor(1200, 0))
    }

    fn mouse() -> Product {
        Product::new(2, "Mouse", Money::from_major_minor(25, 50))
    }

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();

        assert_eq!(cart.item_count(), 1);
        let item = &cart.items()[0];
        assert_eq!(item.product_id, 1);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.product_name, "Laptop");
        assert_eq!(item.price_at_add, Money::from_cents(120_000));
    }

    #[test]
    fn test_add_existing_item_increments_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&mouse(), 1).unwrap();
        cart.add_item(&mouse(), 2).unwrap();

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.find(2).map(|i| i.quantity), Some(3));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_keeps_first_price_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(&mouse(), 1).unwrap();

        let repriced = Product::new(2, "Mouse (new)", Money::from_cents(9999));
        cart.add_item(&repriced, 1).unwrap();

        let item = cart.find(2).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price_at_add, Money::from_cents(2550));
        assert_eq!(item.product_name, "Mouse");
    }

    #[test]
    fn test_add_non_positive_quantity_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();
        let before = cart.clone();

        for qty in [0, -1] {
            let err = cart.add_item(&laptop(), qty).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert!(matches!(
                err,
                CoreError::InvalidArgument(ValidationError::MustBePositive { .. })
            ));
        }
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_overflowing_quantity_is_rejected() {
        let mut cart = Cart::new();
        cart.add_item(&mouse(), 1).unwrap();
        let before = cart.clone();

        let err = cart.add_item(&mouse(), i64::MAX).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_decrements_quantity() {
        let mut cart = Cart::new();
        cart.add_item(&mouse(), 3).unwrap();

        let outcome = cart.remove_item(2, 1).unwrap();

        assert_eq!(outcome, RemoveOutcome::Decremented { remaining: 2 });
        assert_eq!(cart.find(2).map(|i| i.quantity), Some(2));
    }

    #[test]
    fn test_remove_exact_and_over_quantity_drops_line() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 2).unwrap();
        assert_eq!(cart.remove_item(1, 2).unwrap(), RemoveOutcome::Removed);
        assert!(cart.is_empty());

        cart.add_item(&laptop(), 1).unwrap();
        assert_eq!(cart.remove_item(1, 5).unwrap(), RemoveOutcome::Removed);
        assert!(cart.find(1).is_none());
    }

    #[test]
    fn test_remove_absent_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();
        let before = cart.clone();

        assert_eq!(cart.remove_item(999, 1).unwrap(), RemoveOutcome::NotInCart);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_non_positive_quantity_fails() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();
        let before = cart.clone();

        let err = cart.remove_item(1, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_preserves_order_of_other_lines() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();
        cart.add_item(&mouse(), 1).unwrap();
        cart.add_item(&Product::new(3, "Keyboard", Money::from_cents(7500)), 1)
            .unwrap();

        cart.remove_item(2, 1).unwrap();

        let ids: Vec<_> = cart.items().iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_checkout_totals_and_empties() {
        let mut cart = Cart::new();
        cart.add_item(&laptop(), 1).unwrap();
        cart.add_item(&mouse(), 2).unwrap();

        let summary = cart.checkout().unwrap();

        assert_eq!(summary.total_cost, Money::from_cents(125_100));
        assert_eq!(summary.items_purchased.len(), 2);
        assert_eq!(summary.confirmation_message, CHECKOUT_CONFIRMATION);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_empty_cart_fails() {
        let mut cart = Cart::new();
        let err = cart.checkout().unwrap_err();

        assert_eq!(err, CoreError::EmptyCart);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_serializes_as_item_array() {
        let mut cart = Cart::new();
        cart.add_item(&mouse(), 2).unwrap();

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["quantity"], 2);
    }
}
