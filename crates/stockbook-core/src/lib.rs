//! # stockbook-core: Pure Business Logic for stockbook
//!
//! This crate is the heart of stockbook. It contains all business logic
//! as synchronous, deterministic code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    stockbook Architecture                     │
//! │                                                               │
//! │  ┌─────────────────────────────────────────────────────────┐ │
//! │  │                apps/terminal (menu shell)               │ │
//! │  │   reads input ──► calls commands ──► prints results     │ │
//! │  └───────────────────────────┬─────────────────────────────┘ │
//! │                              │                               │
//! │  ┌───────────────────────────▼─────────────────────────────┐ │
//! │  │            ★ stockbook-core (THIS CRATE) ★              │ │
//! │  │                                                         │ │
//! │  │  ┌─────────┐  ┌───────────┐  ┌─────────┐  ┌─────────┐   │ │
//! │  │  │ product │  │ inventory │  │  input  │  │  error  │   │ │
//! │  │  │ Product │  │ Inventory │  │ parse_* │  │  enums  │   │ │
//! │  │  └─────────┘  └───────────┘  └─────────┘  └─────────┘   │ │
//! │  │                                                         │ │
//! │  │   NO I/O • NO THREADS • NO PERSISTENCE • PURE LOGIC     │ │
//! │  └─────────────────────────────────────────────────────────┘ │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - The validated [`Product`] record and its operations
//! - [`inventory`] - The ordered, name-unique [`Inventory`] collection
//! - [`input`] - Raw-text entry points for the interactive shell
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Logic**: Every operation is deterministic and synchronous
//! 2. **No I/O**: File, network, and terminal access is FORBIDDEN here
//! 3. **Validated Construction**: A held `Product` always satisfies its
//!    invariants; there is no unvalidated path to one
//! 4. **Explicit Errors**: All errors are typed enums, never strings or
//!    panics
//!
//! ## Example Usage
//!
//! ```rust
//! use stockbook_core::{Inventory, Product};
//!
//! let mut inventory = Inventory::new();
//!
//! inventory.add(Product::new("Pen", 1.50, 10)?)?;
//! inventory.add(Product::new("Book", 20.0, 3)?)?;
//!
//! // Case-insensitive lookup returns a handle into the inventory.
//! let book = inventory.find("book")?;
//! assert_eq!(inventory.get(book).unwrap().total_value(), 60.0);
//!
//! assert_eq!(inventory.total_value(), 75.0);
//! # Ok::<(), stockbook_core::InventoryError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod input;
pub mod inventory;
pub mod product;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockbook_core::Product` instead of
// `use stockbook_core::product::Product`

pub use error::{InventoryError, InventoryResult, ValidationError, ValidationResult};
pub use inventory::{Inventory, ProductId};
pub use product::Product;
