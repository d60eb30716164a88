//! # Menu Loop
//!
//! Renders the interactive menu, reads selections, and dispatches to
//! the command layer. This module is the sole recovery point: every
//! command error is printed and the loop continues, so invalid user
//! input never terminates the process.
//!
//! ## Session Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │  ===== Inventory System =====                                 │
//! │  1. Add product                                               │
//! │  2. Search product                                            │
//! │  3. List products                                             │
//! │  4. Total inventory value                                     │
//! │  5. Quit                                                      │
//! │  Select an option: _                                          │
//! │       │                                                       │
//! │       ├── "1".."4" ──► command ──► print result or error ──┐  │
//! │       ├── "5" / EOF ──► goodbye, return                    │  │
//! │       └── other ─────► "Invalid option" ───────────────────┤  │
//! │                                                            │  │
//! │  ◄─────────────────────── loop ◄───────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop is generic over its reader and writer so tests can drive a
//! whole session from a string and assert on the transcript.

use std::io::{self, BufRead, Write};

use tracing::debug;

use stockbook_core::Inventory;

use crate::commands;
use crate::config::ShellConfig;

/// Menu options, in display order.
const OPTIONS: &[(&str, &str)] = &[
    ("1", "Add product"),
    ("2", "Search product"),
    ("3", "List products"),
    ("4", "Total inventory value"),
    ("5", "Quit"),
];

/// Runs the menu loop until the user quits or input ends.
///
/// Only I/O failures propagate; command errors are printed and the
/// loop continues. End of input (EOF) is treated as quitting.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    config: &ShellConfig,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    loop {
        render_menu(config, &mut out)?;

        let Some(selection) = prompt(&mut input, &mut out, "Select an option: ")? else {
            break;
        };
        debug!(selection = %selection, "menu selection");

        match selection.as_str() {
            "1" => {
                let Some(name) = prompt(&mut input, &mut out, "Product name: ")? else {
                    break;
                };
                let Some(price) = prompt(&mut input, &mut out, "Price (e.g. 199.99): ")? else {
                    break;
                };
                let Some(quantity) =
                    prompt(&mut input, &mut out, "Quantity (integer >= 0): ")?
                else {
                    break;
                };

                match commands::add_product(inventory, &name, &price, &quantity) {
                    Ok(msg) => writeln!(out, "{msg}")?,
                    Err(err) => writeln!(out, "Error adding product: {}", err.message)?,
                }
            }

            "2" => {
                let Some(name) = prompt(&mut input, &mut out, "Name to search: ")? else {
                    break;
                };

                match commands::find_product(inventory, &name) {
                    Ok(msg) => writeln!(out, "{msg}")?,
                    Err(err) => writeln!(out, "Search error: {}", err.message)?,
                }
            }

            "3" => writeln!(out, "{}", commands::list_products(inventory))?,

            "4" => writeln!(out, "{}", commands::inventory_total(inventory, config))?,

            "5" => {
                writeln!(out, "Goodbye.")?;
                break;
            }

            _ => writeln!(out, "Invalid option, try again.")?,
        }
    }

    Ok(())
}

/// Renders the banner and the numbered options.
fn render_menu<W: Write>(config: &ShellConfig, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== {} =====", config.title)?;
    for (key, label) in OPTIONS {
        writeln!(out, "{key}. {label}")?;
    }
    Ok(())
}

/// Prints a prompt and reads one trimmed line.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Drives a full session from scripted input and returns the transcript.
    fn session(lines: &str) -> String {
        let mut inventory = Inventory::new();
        let config = ShellConfig::default();
        let mut out = Vec::new();

        run(&mut inventory, &config, Cursor::new(lines), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_list_total_quit() {
        let transcript = session("1\nPen\n1.50\n10\n3\n4\n5\n");

        assert!(transcript.contains("===== Inventory System ====="));
        assert!(transcript.contains("Added 'Pen'."));
        assert!(transcript.contains("1. Pen (price: 1.50, quantity: 10, total: 15.00)"));
        assert!(transcript.contains("Total inventory value: $15.00"));
        assert!(transcript.contains("Goodbye."));
    }

    #[test]
    fn test_invalid_price_recovers_to_menu() {
        let transcript = session("1\nPen\nabc\n10\n5\n");

        assert!(transcript.contains("Error adding product: price must be a number, got 'abc'"));
        // The loop kept going: the quit option still ran.
        assert!(transcript.contains("Goodbye."));
    }

    #[test]
    fn test_boolean_quantity_is_a_type_error() {
        let transcript = session("1\nPen\n1.50\ntrue\n5\n");
        assert!(transcript.contains("Error adding product: quantity must be an integer, got 'true'"));
    }

    #[test]
    fn test_search_not_found_recovers() {
        let transcript = session("2\nGhost\n5\n");
        assert!(transcript.contains("Search error: product 'Ghost' not found"));
        assert!(transcript.contains("Goodbye."));
    }

    #[test]
    fn test_duplicate_add_reports_and_continues() {
        let transcript = session("1\nPen\n1.50\n10\n1\nPEN\n2\n1\n5\n");
        assert!(transcript.contains("Error adding product: product 'PEN' already exists"));
    }

    #[test]
    fn test_empty_inventory_listing_and_total() {
        let transcript = session("3\n4\n5\n");
        assert!(transcript.contains("No products in the inventory."));
        assert!(transcript.contains("Total inventory value: $0.00"));
    }

    #[test]
    fn test_invalid_option_hint() {
        let transcript = session("9\n5\n");
        assert!(transcript.contains("Invalid option, try again."));
    }

    #[test]
    fn test_eof_quits_cleanly() {
        let transcript = session("");
        assert!(transcript.contains("Select an option: "));
        assert!(!transcript.contains("Goodbye."));
    }

    #[test]
    fn test_eof_mid_add_quits_cleanly() {
        // Name given, then input ends before the price.
        let transcript = session("1\nPen\n");
        assert!(transcript.ends_with("Price (e.g. 199.99): "));
    }
}
