//! # Raw-Input Parsing
//!
//! The boundary between raw user text and typed domain values.
//!
//! ## Parsing Strategy
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                  Raw text → typed value                       │
//! │                                                               │
//! │  "  1.50 "  ──► trim ──► boolean literal? ──► f64 parse       │
//! │                              │ yes                │ fail      │
//! │                              ▼                    ▼           │
//! │                         InvalidType          InvalidType      │
//! │                                                               │
//! │  Shape checks happen HERE; domain checks (negative, empty)    │
//! │  happen in Product::new. A caller therefore sees:             │
//! │    "abc"  → InvalidType      "-5"   → InvalidValue            │
//! │    "true" → InvalidType      "3.5"  → InvalidType (quantity)  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Boolean Rule
//! `true`/`false` (any casing) are rejected as `InvalidType` for both
//! price and quantity before numeric parsing runs. A boolean is never a
//! number here, and the rejection is explicit so it reads as a type
//! error rather than a generic parse failure.

use crate::error::{ValidationError, ValidationResult};
use crate::product::Product;

/// Validates a raw name and returns the trimmed form.
///
/// ## Errors
/// `InvalidValue` if the name is empty or whitespace-only.
pub fn parse_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::invalid_value("name", "cannot be empty"));
    }

    Ok(name.to_string())
}

/// Parses a raw price.
///
/// ## Errors
/// `InvalidType` if the trimmed text is a boolean literal or does not
/// parse as a number. Domain checks (negative, non-finite) are left to
/// [`Product::new`] / [`Product::set_price`].
///
/// ## Example
/// ```rust
/// use stockbook_core::input::parse_price;
///
/// assert_eq!(parse_price(" 199.99 ").unwrap(), 199.99);
/// assert!(parse_price("abc").is_err());
/// assert!(parse_price("true").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();

    if is_boolean_literal(raw) {
        return Err(ValidationError::invalid_type("price", "a number", raw));
    }

    raw.parse::<f64>()
        .map_err(|_| ValidationError::invalid_type("price", "a number", raw))
}

/// Parses a raw quantity.
///
/// ## Errors
/// `InvalidType` if the trimmed text is a boolean literal or does not
/// parse as an integer (`"3.5"` is not an integer). The non-negativity
/// check is left to [`Product::new`] / [`Product::set_quantity`].
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if is_boolean_literal(raw) {
        return Err(ValidationError::invalid_type("quantity", "an integer", raw));
    }

    raw.parse::<i64>()
        .map_err(|_| ValidationError::invalid_type("quantity", "an integer", raw))
}

/// `true` / `false` in any casing.
fn is_boolean_literal(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false")
}

impl Product {
    /// Constructs a product from three raw text inputs.
    ///
    /// This is the construction entry point the interactive shell uses:
    /// shape failures surface as `InvalidType`, domain failures as
    /// `InvalidValue`, and the caller only has to render the message.
    ///
    /// ## Example
    /// ```rust
    /// use stockbook_core::Product;
    ///
    /// let pen = Product::from_input("Pen", "1.50", "10").unwrap();
    /// assert_eq!(pen.total_value(), 15.0);
    ///
    /// assert!(Product::from_input("Pen", "cheap", "10").is_err());
    /// assert!(Product::from_input("Pen", "1.50", "-2").is_err());
    /// ```
    pub fn from_input(name: &str, price_raw: &str, quantity_raw: &str) -> ValidationResult<Self> {
        let name = parse_name(name)?;
        let price = parse_price(price_raw)?;
        let quantity = parse_quantity(quantity_raw)?;
        Product::new(&name, price, quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
