//! # Product
//!
//! The validated product record: a name, a unit price, and a stock quantity.
//!
//! ## Validation Boundaries
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                 Where Product is validated                    │
//! │                                                               │
//! │  Raw text ──► input::parse_* ──► Product::new ──► Product     │
//! │               (shape checks)     (domain checks)              │
//! │                                                               │
//! │  set_price / set_quantity re-run the domain checks, so a      │
//! │  constructed Product can never hold an invalid field.         │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Field Rules
//! - `name`: non-empty after trimming; stored trimmed, case preserved.
//!   Immutable after construction.
//! - `price`: finite f64, `>= 0` at construction, `> 0` on update.
//! - `quantity`: integer `>= 0`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A named item with a unit price and a stock quantity.
///
/// Fields are private: every way to obtain or change a `Product` goes
/// through validation, so holding one is proof the invariants hold.
///
/// ## Example
/// ```rust
/// use stockbook_core::Product;
///
/// let mut pen = Product::new("Pen", 1.50, 10).unwrap();
/// assert_eq!(pen.total_value(), 15.0);
///
/// pen.set_price(2.00).unwrap();
/// assert_eq!(pen.total_value(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, trimmed. Compared case-insensitively by `Inventory`.
    name: String,

    /// Unit price. Finite and non-negative.
    price: f64,

    /// Units in stock. Non-negative.
    quantity: i64,
}

impl Product {
    /// Creates a product, validating every field.
    ///
    /// ## Errors
    /// `InvalidValue` if the trimmed name is empty, the price is negative
    /// or non-finite, or the quantity is negative.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::Product;
    ///
    /// assert!(Product::new("Pen", 1.50, 10).is_ok());
    /// assert!(Product::new("   ", 1.50, 10).is_err());
    /// assert!(Product::new("Pen", -1.0, 10).is_err());
    /// assert!(Product::new("Pen", 1.50, -1).is_err());
    /// ```
    pub fn new(name: &str, price: f64, quantity: i64) -> ValidationResult<Self> {
        let name = check_name(name)?;
        check_price(price)?;
        check_quantity(quantity)?;

        Ok(Product {
            name,
            price,
            quantity,
        })
    }

    /// The display name (trimmed, original casing).
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Units in stock.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the price.
    ///
    /// ## Rules
    /// Updates require a strictly positive price (`> 0`), stricter than
    /// construction, which accepts zero.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::Product;
    ///
    /// let mut pen = Product::new("Pen", 1.50, 10).unwrap();
    /// assert!(pen.set_price(9.99).is_ok());
    /// assert!(pen.set_price(0.0).is_err());
    /// assert!(pen.set_price(-5.0).is_err());
    /// ```
    pub fn set_price(&mut self, new_price: f64) -> ValidationResult<()> {
        check_new_price(new_price)?;
        self.price = new_price;
        Ok(())
    }

    /// Replaces the quantity. Zero is allowed (out of stock).
    pub fn set_quantity(&mut self, new_quantity: i64) -> ValidationResult<()> {
        check_quantity(new_quantity)?;
        self.quantity = new_quantity;
        Ok(())
    }

    /// The total value of this line: price × quantity.
    ///
    /// Computed on demand, never stored.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Renders the line the menu prints for a product:
/// name, price to 2 decimals, quantity, total value to 2 decimals.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (price: {:.2}, quantity: {}, total: {:.2})",
            self.name,
            self.price,
            self.quantity,
            self.total_value()
        )
    }
}

// =============================================================================
// Field Checks
// =============================================================================

/// Validates a product name and returns the trimmed form.
///
/// ## Rules
/// - Must not be empty or whitespace-only
fn check_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::invalid_value("name", "cannot be empty"));
    }

    Ok(name.to_string())
}

/// Validates a price at construction time.
///
/// ## Rules
/// - Must be finite (NaN and infinities are not prices)
/// - Must be non-negative (zero is allowed: free items)
fn check_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::invalid_value(
            "price",
            "must be a finite number",
        ));
    }

    if price < 0.0 {
        return Err(ValidationError::invalid_value("price", "cannot be negative"));
    }

    Ok(())
}

/// Validates a price update.
///
/// ## Rules
/// - Must be finite
/// - Must be strictly positive (`> 0`)
fn check_new_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::invalid_value(
            "price",
            "must be a finite number",
        ));
    }

    if price <= 0.0 {
        return Err(ValidationError::invalid_value(
            "price",
            "must be greater than zero",
        ));
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - Must be non-negative (zero is allowed: out of stock)
fn check_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::invalid_value(
            "quantity",
            "cannot be negative",
        ));
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_product() {
        let product = Product::new("Pen", 1.50, 10).unwrap();
        assert_eq!(product.name(), "Pen");
        assert_eq!(product.price(), 1.50);
        assert_eq!(product.quantity(), 10);
    }

    #[test]
    fn test_total_value_is_price_times_quantity() {
        let product = Product::new("Pen", 1.50, 10).unwrap();
        assert_eq!(product.total_value(), 1.50 * 10.0);

        let book = Product::new("Book", 20.0, 3).unwrap();
        assert_eq!(book.total_value(), 60.0);
    }

    #[test]
    fn test_new_trims_name_and_preserves_case() {
        let product = Product::new("  Blue Pen  ", 1.0, 1).unwrap();
        assert_eq!(product.name(), "Blue Pen");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        assert_eq!(
            Product::new("", 1.0, 1),
            Err(ValidationError::invalid_value("name", "cannot be empty"))
        );
        assert!(Product::new("   ", 1.0, 1).is_err());
    }

    #[test]
    fn test_new_rejects_negative_price() {
        assert_eq!(
            Product::new("Pen", -0.01, 1),
            Err(ValidationError::invalid_value("price", "cannot be negative"))
        );
    }

    #[test]
    fn test_new_rejects_non_finite_price() {
        assert!(Product::new("Pen", f64::NAN, 1).is_err());
        assert!(Product::new("Pen", f64::INFINITY, 1).is_err());
    }

    #[test]
    fn test_new_accepts_zero_price_and_quantity() {
        let product = Product::new("Flyer", 0.0, 0).unwrap();
        assert_eq!(product.total_value(), 0.0);
    }

    #[test]
    fn test_new_rejects_negative_quantity() {
        assert_eq!(
            Product::new("Pen", 1.0, -1),
            Err(ValidationError::invalid_value(
                "quantity",
                "cannot be negative"
            ))
        );
    }

    #[test]
    fn test_set_price_requires_strictly_positive() {
        let mut product = Product::new("Pen", 1.50, 10).unwrap();

        assert!(product.set_price(0.0).is_err());
        assert!(product.set_price(-5.0).is_err());
        // The failed updates must not have touched the stored price.
        assert_eq!(product.price(), 1.50);

        product.set_price(9.99).unwrap();
        assert_eq!(product.price(), 9.99);
    }

    #[test]
    fn test_set_quantity() {
        let mut product = Product::new("Pen", 1.50, 10).unwrap();

        assert!(product.set_quantity(-3).is_err());
        assert_eq!(product.quantity(), 10);

        product.set_quantity(0).unwrap();
        assert_eq!(product.quantity(), 0);
    }

    #[test]
    fn test_display_format() {
        let product = Product::new("Pen", 1.5, 10).unwrap();
        assert_eq!(
            product.to_string(),
            "Pen (price: 1.50, quantity: 10, total: 15.00)"
        );
    }
}
