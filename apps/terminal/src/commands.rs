//! # Menu Commands
//!
//! One function per menu action. Each takes raw text input plus the
//! inventory, returns formatted output or an [`AppError`], and leaves
//! all reading and printing to the menu loop.
//!
//! ## Add Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  User enters: name "Pen", price "1.50", quantity "10"         │
//! │       │                                                       │
//! │       ▼                                                       │
//! │  add_product() ◄── THIS MODULE                                │
//! │       │                                                       │
//! │       ├── Product::from_input  ──► InvalidType/InvalidValue   │
//! │       ├── Inventory::add       ──► DuplicateName              │
//! │       │                                                       │
//! │       └── Ok("Added 'Pen'.")                                  │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write;

use tracing::{debug, info};

use stockbook_core::{Inventory, Product};

use crate::config::ShellConfig;
use crate::error::AppError;

/// Constructs a product from raw text and adds it to the inventory.
///
/// ## Arguments
/// * `name` - Product name (trimmed by the core)
/// * `price` - Numeric text, e.g. "199.99"
/// * `quantity` - Integer text, e.g. "10"
///
/// ## Returns
/// A confirmation line, or the validation/duplicate error to print.
pub fn add_product(
    inventory: &mut Inventory,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<String, AppError> {
    debug!(name = %name.trim(), "add_product command");

    let product = Product::from_input(name, price, quantity)?;
    let name = product.name().to_string();
    inventory.add(product)?;

    info!(name = %name, count = inventory.len(), "product added");
    Ok(format!("Added '{name}'."))
}

/// Looks up a product by name (case-insensitive, trimmed) and formats it.
pub fn find_product(inventory: &Inventory, name: &str) -> Result<String, AppError> {
    debug!(query = %name.trim(), "find_product command");

    let product = inventory.find_product(name)?;
    Ok(product.to_string())
}

/// Formats all products in insertion order, numbered from 1.
///
/// No failure mode: an empty inventory formats as a notice line.
pub fn list_products(inventory: &Inventory) -> String {
    debug!(count = inventory.len(), "list_products command");

    if inventory.is_empty() {
        return "No products in the inventory.".to_string();
    }

    let mut out = String::from("Products:");
    for (index, product) in inventory.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = write!(out, "\n{}. {}", index + 1, product);
    }
    out
}

/// Formats the total value of the inventory as one number.
pub fn inventory_total(inventory: &Inventory, config: &ShellConfig) -> String {
    let total = inventory.total_value();
    debug!(total, "inventory_total command");

    format!(
        "Total inventory value: {}{:.2}",
        config.currency_symbol, total
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn seeded() -> Inventory {
        let mut inventory = Inventory::new();
        add_product(&mut inventory, "Pen", "1.50", "10").unwrap();
        add_product(&mut inventory, "Book", "20.0", "3").unwrap();
        inventory
    }

    #[test]
    fn test_add_product_confirms() {
        let mut inventory = Inventory::new();
        let msg = add_product(&mut inventory, "  Pen  ", "1.50", "10").unwrap();
        assert_eq!(msg, "Added 'Pen'.");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn test_add_product_surfaces_type_errors() {
        let mut inventory = Inventory::new();

        let err = add_product(&mut inventory, "Pen", "true", "10").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidType);

        let err = add_product(&mut inventory, "Pen", "1.50", "3.5").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidType);

        assert!(inventory.is_empty());
    }

    #[test]
    fn test_add_product_surfaces_duplicates() {
        let mut inventory = seeded();
        let err = add_product(&mut inventory, "PEN", "2.0", "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::Duplicate);
        assert_eq!(err.message, "product 'PEN' already exists");
    }

    #[test]
    fn test_find_product_formats_match() {
        let inventory = seeded();
        let msg = find_product(&inventory, " book ").unwrap();
        assert_eq!(msg, "Book (price: 20.00, quantity: 3, total: 60.00)");
    }

    #[test]
    fn test_find_product_not_found() {
        let inventory = seeded();
        let err = find_product(&inventory, "Nonexistent").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_list_products_numbered_in_insertion_order() {
        let inventory = seeded();
        assert_eq!(
            list_products(&inventory),
            "Products:\n\
             1. Pen (price: 1.50, quantity: 10, total: 15.00)\n\
             2. Book (price: 20.00, quantity: 3, total: 60.00)"
        );
    }

    #[test]
    fn test_list_products_empty() {
        assert_eq!(
            list_products(&Inventory::new()),
            "No products in the inventory."
        );
    }

    #[test]
    fn test_inventory_total() {
        let config = ShellConfig::default();
        assert_eq!(
            inventory_total(&seeded(), &config),
            "Total inventory value: $75.00"
        );
        assert_eq!(
            inventory_total(&Inventory::new(), &config),
            "Total inventory value: $0.00"
        );
    }
}
