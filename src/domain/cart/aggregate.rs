//! Cart aggregate entity.
//!
//! One cart per user. The cart owns its line items; products are
//! referenced by ID only and are owned by the catalog module.
//!
//! # Invariants
//!
//! - At most one line per distinct product
//! - Every line has `quantity >= 1`; a mutation that would produce a
//!   zero-quantity line deletes the line instead
//! - `total_items` equals the number of lines (not the sum of quantities)
//! - `total_price` equals the sum of `quantity * unit price` over all
//!   lines, recomputed against live catalog prices by every write path

use std::collections::HashMap;

use crate::domain::foundation::{
    CartId, DomainError, ErrorCode, Price, ProductId, Timestamp, UserId,
};
use serde::{Deserialize, Serialize};

/// A single line in a cart: a product reference and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductId,
    quantity: u32,
}

impl CartLine {
    /// Creates a line, rejecting zero quantity.
    pub fn new(product_id: ProductId, quantity: u32) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "quantity",
                "Line quantity must be at least 1",
            ));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    /// Returns the referenced product ID.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the line quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Outcome of an absolute quantity update on a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    /// The line's quantity was set to the requested value.
    Updated,
    /// The requested quantity was zero and the line was deleted.
    Removed,
}

/// Cart aggregate - per-user list of lines plus derived totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Unique identifier for this cart.
    id: CartId,

    /// User who owns this cart (immutable after creation).
    user_id: UserId,

    /// Lines in insertion order. Order is not semantically significant
    /// but is preserved across saves.
    items: Vec<CartLine>,

    /// Derived: number of distinct lines.
    total_items: u32,

    /// Derived: sum of `quantity * unit price` over all lines.
    total_price: Price,

    /// Optimistic concurrency token, bumped by the store on save.
    version: i64,

    /// When the cart was created.
    created_at: Timestamp,

    /// When the cart was last updated.
    updated_at: Timestamp,
}

impl Cart {
    /// Opens an empty cart for a user.
    ///
    /// Carts are created lazily on the first add-to-cart; the caller
    /// usually adds a line and recomputes before persisting.
    pub fn open(id: CartId, user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            items: Vec::new(),
            total_items: 0,
            total_price: Price::ZERO,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitutes a cart from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: CartId,
        user_id: UserId,
        items: Vec<CartLine>,
        total_items: u32,
        total_price: Price,
        version: i64,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total_items,
            total_price,
            version,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the cart ID.
    pub fn id(&self) -> &CartId {
        &self.id
    }

    /// Returns the owner's user ID.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the lines in insertion order.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Returns the derived distinct-line count.
    pub fn total_items(&self) -> u32 {
        self.total_items
    }

    /// Returns the derived total price.
    pub fn total_price(&self) -> Price {
        self.total_price
    }

    /// Returns the optimistic concurrency version.
    pub fn version(&self) -> i64 {
        self.version
    }

    /// Returns when the cart was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the cart was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns the line for a product, if present.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.product_id == product_id)
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds quantity for a product: increments an existing line or
    /// appends a new one. Quantities accumulate, never overwrite.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if quantity is zero
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::validation(
                "quantity",
                "Quantity must be at least 1",
            ));
        }

        match self.items.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => {
                self.items.push(CartLine {
                    product_id,
                    quantity,
                });
            }
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Sets a line's quantity absolutely (contrast with [`Cart::add_item`],
    /// which accumulates). A quantity of zero deletes the line.
    ///
    /// # Errors
    ///
    /// - `ProductNotInCart` if the product has no line in this cart
    pub fn set_item_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<LineChange, DomainError> {
        let index = self
            .items
            .iter()
            .position(|l| &l.product_id == product_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProductNotInCart,
                    format!("Product not in cart: {}", product_id),
                )
            })?;

        let change = if quantity == 0 {
            self.items.remove(index);
            LineChange::Removed
        } else {
            self.items[index].quantity = quantity;
            LineChange::Updated
        };

        self.updated_at = Timestamp::now();
        Ok(change)
    }

    /// Deletes the line for a product.
    ///
    /// # Errors
    ///
    /// - `ProductNotInCart` if the product has no line; the cart is
    ///   left unchanged
    pub fn remove_item(&mut self, product_id: &ProductId) -> Result<(), DomainError> {
        let index = self
            .items
            .iter()
            .position(|l| &l.product_id == product_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ProductNotInCart,
                    format!("Product not in cart: {}", product_id),
                )
            })?;

        self.items.remove(index);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Empties the cart and zeroes both totals. The cart itself persists.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total_items = 0;
        self.total_price = Price::ZERO;
        self.updated_at = Timestamp::now();
    }

    /// Recomputes both derived totals from a freshly fetched price sheet.
    ///
    /// Lines whose product is absent from the sheet are orphans (the
    /// product was deleted from the catalog after being added); they are
    /// pruned before summation and returned so the caller can log them.
    ///
    /// This is the single recompute path shared by every mutation.
    pub fn recompute_totals(&mut self, prices: &HashMap<ProductId, Price>) -> Vec<ProductId> {
        let mut orphaned = Vec::new();
        self.items.retain(|line| {
            if prices.contains_key(&line.product_id) {
                true
            } else {
                orphaned.push(line.product_id);
                false
            }
        });

        self.total_items = self.items.len() as u32;
        self.total_price = self
            .items
            .iter()
            .map(|line| prices[&line.product_id].line_total(line.quantity))
            .fold(Price::ZERO, |acc, p| acc.plus(p));

        orphaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_user_id() -> UserId {
        UserId::new("user-123").unwrap()
    }

    fn test_cart() -> Cart {
        Cart::open(CartId::new(), test_user_id())
    }

    fn sheet(entries: &[(ProductId, i64)]) -> HashMap<ProductId, Price> {
        entries
            .iter()
            .map(|(id, cents)| (*id, Price::from_cents(*cents).unwrap()))
            .collect()
    }

    // Construction tests

    #[test]
    fn open_cart_is_empty_with_zero_totals() {
        let cart = test_cart();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
        assert_eq!(cart.version(), 0);
    }

    // add_item tests

    #[test]
    fn add_item_appends_new_line() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.line(&p1).unwrap().quantity(), 2);
    }

    #[test]
    fn add_item_accumulates_into_existing_line() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        cart.add_item(p1, 3).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.line(&p1).unwrap().quantity(), 5);
    }

    #[test]
    fn add_item_rejects_zero_quantity() {
        let mut cart = test_cart();
        let result = cart.add_item(ProductId::new(), 0);
        assert!(result.is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn add_item_preserves_insertion_order() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        let p3 = ProductId::new();
        cart.add_item(p1, 1).unwrap();
        cart.add_item(p2, 1).unwrap();
        cart.add_item(p3, 1).unwrap();
        cart.add_item(p1, 1).unwrap(); // accumulate must not reorder

        let order: Vec<ProductId> = cart.items().iter().map(|l| *l.product_id()).collect();
        assert_eq!(order, vec![p1, p2, p3]);
    }

    // set_item_quantity tests

    #[test]
    fn set_quantity_overwrites_not_adds() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 5).unwrap();
        let change = cart.set_item_quantity(&p1, 2).unwrap();
        assert_eq!(change, LineChange::Updated);
        assert_eq!(cart.line(&p1).unwrap().quantity(), 2);
    }

    #[test]
    fn set_quantity_zero_deletes_line() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 5).unwrap();
        let change = cart.set_item_quantity(&p1, 0).unwrap();
        assert_eq!(change, LineChange::Removed);
        assert!(cart.line(&p1).is_none());
    }

    #[test]
    fn set_quantity_fails_for_absent_product() {
        let mut cart = test_cart();
        let result = cart.set_item_quantity(&ProductId::new(), 3);
        assert!(matches!(
            result,
            Err(ref e) if e.code == ErrorCode::ProductNotInCart
        ));
    }

    // remove_item tests

    #[test]
    fn remove_item_deletes_line() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        cart.add_item(p1, 1).unwrap();
        cart.add_item(p2, 1).unwrap();
        cart.remove_item(&p1).unwrap();
        assert!(cart.line(&p1).is_none());
        assert!(cart.line(&p2).is_some());
    }

    #[test]
    fn remove_item_absent_fails_and_leaves_cart_unchanged() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        let before = cart.items().to_vec();

        let result = cart.remove_item(&ProductId::new());
        assert!(matches!(
            result,
            Err(ref e) if e.code == ErrorCode::ProductNotInCart
        ));
        assert_eq!(cart.items(), &before[..]);
    }

    // clear tests

    #[test]
    fn clear_empties_items_and_zeroes_totals() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        cart.recompute_totals(&sheet(&[(p1, 1000)]));

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Price::ZERO);
    }

    // recompute_totals tests

    #[test]
    fn recompute_sets_line_count_and_price_sum() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        cart.add_item(p2, 3).unwrap();

        let orphaned = cart.recompute_totals(&sheet(&[(p1, 1000), (p2, 500)]));
        assert!(orphaned.is_empty());
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().as_cents(), 2 * 1000 + 3 * 500);
    }

    #[test]
    fn recompute_uses_current_prices_not_stale_ones() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        cart.add_item(p1, 2).unwrap();
        cart.recompute_totals(&sheet(&[(p1, 1000)]));
        assert_eq!(cart.total_price().as_cents(), 2000);

        // Catalog price changed between mutations.
        cart.recompute_totals(&sheet(&[(p1, 1500)]));
        assert_eq!(cart.total_price().as_cents(), 3000);
    }

    #[test]
    fn recompute_prunes_orphaned_lines() {
        let mut cart = test_cart();
        let kept = ProductId::new();
        let deleted = ProductId::new();
        cart.add_item(kept, 1).unwrap();
        cart.add_item(deleted, 4).unwrap();

        let orphaned = cart.recompute_totals(&sheet(&[(kept, 700)]));
        assert_eq!(orphaned, vec![deleted]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().as_cents(), 700);
    }

    #[test]
    fn totals_invariant_holds_after_each_mutation() {
        let mut cart = test_cart();
        let p1 = ProductId::new();
        let p2 = ProductId::new();
        let prices = sheet(&[(p1, 1000), (p2, 500)]);

        cart.add_item(p1, 2).unwrap();
        cart.recompute_totals(&prices);
        assert_eq!(cart.total_items() as usize, cart.items().len());

        cart.add_item(p2, 1).unwrap();
        cart.recompute_totals(&prices);
        assert_eq!(cart.total_items() as usize, cart.items().len());
        assert_eq!(cart.total_price().as_cents(), 2500);

        cart.set_item_quantity(&p1, 0).unwrap();
        cart.recompute_totals(&prices);
        assert_eq!(cart.total_items() as usize, cart.items().len());
        assert_eq!(cart.total_price().as_cents(), 500);
    }

    // CartLine tests

    #[test]
    fn cart_line_rejects_zero_quantity() {
        assert!(CartLine::new(ProductId::new(), 0).is_err());
        assert!(CartLine::new(ProductId::new(), 1).is_ok());
    }

    proptest! {
        /// Any sequence of adds for one product accumulates into a single
        /// line whose quantity is the sum of the added quantities.
        #[test]
        fn repeated_adds_accumulate(quantities in prop::collection::vec(1u32..100, 1..20)) {
            let mut cart = Cart::open(CartId::new(), UserId::new("prop-user").unwrap());
            let p = ProductId::new();
            for q in &quantities {
                cart.add_item(p, *q).unwrap();
            }
            prop_assert_eq!(cart.items().len(), 1);
            let expected: u32 = quantities.iter().sum();
            prop_assert_eq!(cart.line(&p).unwrap().quantity(), expected);
        }
    }
}
