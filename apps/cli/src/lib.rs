//! # Bookshop CLI Library
//!
//! Startup wiring for the `bookshop` binary.
//!
//! ## Module Organization
//! ```text
//! bookshop_cli/
//! ├── lib.rs       ◄─── You are here (startup sequence)
//! ├── config.rs    ◄─── ShopConfig: env + JSON file + defaults
//! ├── commands.rs  ◄─── Argument parsing and command handlers
//! └── error.rs     ◄─── CliError and exit codes
//! ```

pub mod commands;
pub mod config;
pub mod error;

use bookshop_core::seed::seed_books;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::{execute, Command};
use config::ShopConfig;
use error::CliResult;

/// Runs the CLI with the given arguments (program name excluded).
///
/// ## Startup Sequence
/// ```text
/// 1. Parse the command   (fails fast on usage errors)
/// 2. Load ShopConfig     (env ► file ► defaults)
/// 3. Build the seed book map
/// 4. Execute and return the output text
/// ```
pub fn run(args: &[String]) -> CliResult<String> {
    let command = Command::parse(args)?;
    let config = ShopConfig::from_env()?;
    let books = seed_books();

    debug!(?command, books = books.len(), "executing command");
    execute(&command, &config, &books)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bookshop_core=trace` - Trace the core crate only
/// - Default: INFO, DEBUG for the bookshop crates
///
/// Logs go to stderr so command output can be piped.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookshop_core=debug,bookshop_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
