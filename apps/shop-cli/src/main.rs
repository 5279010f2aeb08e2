//! # Shop Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         shop (binary)                           │
//! │                                                                 │
//! │  main.rs ────► hands off to shop_cli::run                       │
//! │  lib.rs ─────► config, logging, ConsolePrompt                   │
//! │  session.rs ─► register, log in, catalog, cart, checkout        │
//! │                                │                                │
//! │                                ▼                                │
//! │                     shop-core (in memory)                       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> anyhow::Result<()> {
    // Setup lives in lib.rs so it can be tested
    shop_cli::run()
}
