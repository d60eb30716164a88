//! # stockbook Terminal Entry Point
//!
//! Thin binary wrapper; the actual setup is in lib.rs for better
//! testability.

use std::process;

use tracing::error;

fn main() {
    if let Err(err) = stockbook_terminal::run() {
        // Only real I/O failures land here; user input errors are
        // handled inside the menu loop.
        error!(%err, "terminal session failed");
        process::exit(1);
    }
}
