//! # Shopping cart — ordered line items keyed by book
//!
//! The cart is held by the client only. [`Cart`] is the pure value: an ordered list
//! of [`CartItem`]s in which each `book_id` appears at most once and every quantity
//! is at least one. [`CartManager`] pairs a cart with a [`KeyValueStore`] and writes
//! the whole list back under [`CART_KEY`] after every mutation.
//!
//! ## Mutations
//!
//! | Method | Effect | Notice |
//! |--------|--------|--------|
//! | [`add_item`](CartManager::add_item) | Increments the existing line or appends a new one | success, naming the book |
//! | [`remove_item`](CartManager::remove_item) | Drops the line if present | info (none when absent) |
//! | [`update_quantity`](CartManager::update_quantity) | Sets the quantity; `<= 0` removes the line | none, unless it removed |
//! | [`clear`](CartManager::clear) | Empties the cart and deletes the stored key | info |
//!
//! Derived values ([`Cart::item_count`], [`CartItem::subtotal`], [`Cart::total`]) are
//! computed on every call and never stored.
//!
//! ## Persisted format
//!
//! A JSON array of `{"bookId", "title", "price", "quantity"}` objects. A missing or
//! unreadable value loads as an empty cart.

use serde::{Deserialize, Serialize};

use crate::kv::{KeyValueStore, CART_KEY};
use crate::models::Notice;

/// One book in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "bookId")]
    pub book_id: u64,
    pub title: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Line sent to the order endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub book_id: u64,
    pub quantity: u32,
}

/// Result of [`Cart::set_quantity`].
#[derive(Clone, Debug, PartialEq)]
pub enum QuantityChange {
    Updated,
    Removed(CartItem),
    Missing,
}

/// Ordered cart contents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the persisted JSON array.
    ///
    /// Lines with a zero quantity are dropped and repeated book ids are merged, so a
    /// cart written by an older client still satisfies the uniqueness invariant.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let stored: Vec<CartItem> = serde_json::from_str(json)?;
        let mut cart = Cart::new();
        for item in stored.into_iter().filter(|item| item.quantity > 0) {
            cart.add(item.book_id, &item.title, item.price, item.quantity);
        }
        Ok(cart)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.items)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, book_id: u64) -> Option<&CartItem> {
        self.items.iter().find(|item| item.book_id == book_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add `quantity` copies of a book. A quantity of zero is treated as one.
    pub fn add(&mut self, book_id: u64, title: &str, price: f64, quantity: u32) -> &CartItem {
        let quantity = quantity.max(1);
        match self.items.iter().position(|item| item.book_id == book_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
                &self.items[index]
            }
            None => {
                self.items.push(CartItem {
                    book_id,
                    title: title.to_string(),
                    price,
                    quantity,
                });
                &self.items[self.items.len() - 1]
            }
        }
    }

    pub fn remove(&mut self, book_id: u64) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.book_id == book_id)?;
        Some(self.items.remove(index))
    }

    /// Set a line's quantity. Zero or below removes the line.
    pub fn set_quantity(&mut self, book_id: u64, quantity: i64) -> QuantityChange {
        if quantity <= 0 {
            return match self.remove(book_id) {
                Some(item) => QuantityChange::Removed(item),
                None => QuantityChange::Missing,
            };
        }
        match self.items.iter_mut().find(|item| item.book_id == book_id) {
            Some(item) => {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                QuantityChange::Updated
            }
            None => QuantityChange::Missing,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities, shown on the cart badge.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Sum of line subtotals.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.items
            .iter()
            .map(|item| OrderLine {
                book_id: item.book_id,
                quantity: item.quantity,
            })
            .collect()
    }
}

/// A cart mirrored to a key-value store.
#[derive(Clone, Debug)]
pub struct CartManager<S> {
    cart: Cart,
    store: S,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Load the persisted cart, starting empty when nothing usable is stored.
    pub fn load(store: S) -> Self {
        let cart = match store.get(CART_KEY) {
            Some(json) => Cart::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed stored cart: {}", e);
                Cart::new()
            }),
            None => Cart::new(),
        };
        Self { cart, store }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_item(&mut self, book_id: u64, title: &str, price: f64, quantity: u32) -> Notice {
        self.cart.add(book_id, title, price, quantity);
        self.persist();
        Notice::success("Added to cart", format!("{title} was added to your cart."))
    }

    pub fn remove_item(&mut self, book_id: u64) -> Option<Notice> {
        let removed = self.cart.remove(book_id)?;
        self.persist();
        Some(removed_notice(&removed))
    }

    /// Change a line's quantity without notifying, unless the change removed it.
    pub fn update_quantity(&mut self, book_id: u64, quantity: i64) -> Option<Notice> {
        match self.cart.set_quantity(book_id, quantity) {
            QuantityChange::Updated => {
                self.persist();
                None
            }
            QuantityChange::Removed(item) => {
                self.persist();
                Some(removed_notice(&item))
            }
            QuantityChange::Missing => None,
        }
    }

    /// Empty the cart and delete the stored entry.
    pub fn clear(&mut self) -> Notice {
        self.cart.clear();
        self.store.remove(CART_KEY);
        Notice::info("Cart cleared", "All items were removed from your cart.")
    }

    fn persist(&self) {
        match self.cart.to_json() {
            Ok(json) => self.store.set(CART_KEY, &json),
            Err(e) => tracing::error!("Failed to serialise cart: {}", e),
        }
    }
}

fn removed_notice(item: &CartItem) -> Notice {
    Notice::info(
        "Removed from cart",
        format!("{} was removed from your cart.", item.title),
    )
}
