//! # Shop Console Library
//!
//! Wires configuration, logging and the console prompt around a
//! [`shop_core::Shop`] and runs the walk-through.
//!
//! ## Module Organization
//! ```text
//! shop_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── shop.toml + SHOP_* environment
//! ├── console.rs      ◄─── Prompt over stdin/stdout
//! └── session.rs      ◄─── The scripted walk-through
//! ```
//!
//! ## Streams
//! Prompts and walk-through output go to stdout. Log events go to stderr so
//! they never interleave with answers piped through stdin.

pub mod config;
pub mod console;
pub mod session;

use tracing::info;
use tracing_subscriber::EnvFilter;

use shop_core::Shop;

use crate::config::AppConfig;
use crate::console::ConsolePrompt;

/// Runs the console application.
///
/// ## Startup Sequence
/// 1. Load configuration (`shop.toml`, then `SHOP_*` overrides)
/// 2. Initialize tracing
/// 3. Build the shop around a stdin/stdout prompt
/// 4. Run the walk-through
pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        unique_logins = config.unique_logins,
        output = ?config.output,
        "Configuration loaded"
    );

    let mut shop = Shop::new(config.shop_config(), ConsolePrompt::stdio());
    let mut stdout = std::io::stdout();
    let summary = session::run_walkthrough(&mut shop, &mut stdout, config.output)?;

    info!(login = %summary.login, total = %summary.total, "walk-through complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop_core=trace` - Show trace for the domain crate only
/// - Default: `log_filter` from configuration
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
