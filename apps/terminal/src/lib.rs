//! # stockbook Terminal Library
//!
//! Library portion of the interactive shell. `main.rs` stays a thin
//! entry point so the whole menu can be exercised in tests.
//!
//! ## Module Organization
//! ```text
//! stockbook_terminal/
//! ├── lib.rs          ◄─── You are here (setup + tracing init)
//! ├── menu.rs         ◄─── Menu rendering and dispatch loop
//! ├── commands.rs     ◄─── One function per menu action
//! ├── config.rs       ◄─── Shell configuration (env overrides)
//! └── error.rs        ◄─── AppError: user-facing code + message
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ShellConfig;
use stockbook_core::Inventory;

/// Runs the interactive shell against real stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging to stderr, `RUST_LOG` filter)
/// 2. Load configuration (defaults + `STOCKBOOK_*` env overrides)
/// 3. Create the empty inventory
/// 4. Run the menu loop until quit or end of input
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ShellConfig::from_env();
    info!(title = %config.title, "starting stockbook terminal");

    let mut inventory = Inventory::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run(&mut inventory, &config, stdin.lock(), stdout.lock())
}

/// Initializes tracing to stderr, keeping stdout clean for the menu.
///
/// Default filter is `info`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
