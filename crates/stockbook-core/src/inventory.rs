//! # Inventory
//!
//! An ordered, name-unique collection of products.
//!
//! ## Storage Layout
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                        Inventory                              │
//! │                                                               │
//! │  products: Vec<Product>        by_name: HashMap<String, _>    │
//! │  ┌───────────────────┐         ┌─────────────────────────┐    │
//! │  │ 0: Pen            │◄────────│ "pen"    → ProductId(0) │    │
//! │  │ 1: Book           │◄────────│ "book"   → ProductId(1) │    │
//! │  │ 2: USB Cable      │◄────────│ "usb cable" → Id(2)     │    │
//! │  └───────────────────┘         └─────────────────────────┘    │
//! │   insertion order               lower-cased trimmed names     │
//! │                                                               │
//! │  Invariant: every arena slot has exactly one index entry,     │
//! │  so no two products share a name case-insensitively.          │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The inventory owns every product. Callers hold [`ProductId`] handles
//! and resolve them with [`Inventory::get`] / [`Inventory::get_mut`];
//! a mutation through a handle is immediately visible in listings and
//! totals, with no separate update call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, InventoryResult};
use crate::input;
use crate::product::Product;

// =============================================================================
// Product Handle
// =============================================================================

/// Opaque handle to a product slot in an [`Inventory`].
///
/// Handles are cheap to copy and stay valid for the life of the
/// inventory: products are never removed, so slots never move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(usize);

// =============================================================================
// Inventory
// =============================================================================

/// An insertion-ordered collection of [`Product`]s, unique by
/// case-insensitive name.
///
/// ## Example
/// ```rust
/// use stockbook_core::{Inventory, Product};
///
/// let mut inventory = Inventory::new();
/// let pen = inventory.add(Product::new("Pen", 1.50, 10).unwrap()).unwrap();
///
/// let found = inventory.find(" PEN ").unwrap();
/// assert_eq!(found, pen);
/// assert_eq!(inventory.total_value(), 15.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    /// Arena of products, in insertion order.
    products: Vec<Product>,

    /// Lower-cased trimmed name → arena slot.
    by_name: HashMap<String, ProductId>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Adds a product, preserving insertion order.
    ///
    /// ## Errors
    /// `DuplicateName` if a product with the same name (case-insensitive)
    /// is already present. The rejected product is dropped; the
    /// collection is unchanged.
    ///
    /// ## Returns
    /// The handle of the stored product.
    pub fn add(&mut self, product: Product) -> InventoryResult<ProductId> {
        let key = name_key(product.name());

        if self.by_name.contains_key(&key) {
            return Err(InventoryError::DuplicateName {
                name: product.name().to_string(),
            });
        }

        let id = ProductId(self.products.len());
        self.by_name.insert(key, id);
        self.products.push(product);
        Ok(id)
    }

    /// Looks up a product by name, trimming and ignoring case.
    ///
    /// ## Errors
    /// - `Validation(InvalidValue)` if the trimmed name is empty
    /// - `NotFound` if no product matches
    ///
    /// Uniqueness guarantees at most one match; the handle resolves to
    /// the first (and only) insertion under that name.
    pub fn find(&self, name: &str) -> InventoryResult<ProductId> {
        let name = input::parse_name(name)?;

        self.by_name
            .get(&name_key(&name))
            .copied()
            .ok_or(InventoryError::NotFound { name })
    }

    /// Looks up a product by name and resolves it in one step.
    ///
    /// Same errors as [`Inventory::find`]; use `find` + [`Inventory::get_mut`]
    /// when the product needs to be mutated.
    pub fn find_product(&self, name: &str) -> InventoryResult<&Product> {
        let id = self.find(name)?;
        // The index only ever holds ids of arena slots.
        Ok(&self.products[id.0])
    }

    /// Resolves a handle to a shared reference.
    #[inline]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    /// Resolves a handle to a mutable reference.
    ///
    /// Mutations made through the returned reference are visible to the
    /// inventory's listings and totals without any further call.
    #[inline]
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(id.0)
    }

    /// Sums `total_value()` over all products. `0.0` when empty.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::total_value).sum()
    }

    /// Returns a snapshot of all product handles in insertion order.
    ///
    /// The returned Vec is independent: pushing to or truncating it does
    /// not touch the inventory. The products themselves are not copied;
    /// resolving a handle and mutating the product does affect the
    /// inventory's view.
    pub fn list_all(&self) -> Vec<ProductId> {
        (0..self.products.len()).map(ProductId).collect()
    }

    /// Iterates products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Number of products held.
    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the inventory holds no products.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Normalized lookup key: trimmed, lower-cased name.
fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================
