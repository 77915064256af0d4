//! # Coinup Desktop Library
//!
//! Core library for the Coinup desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! coinup_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Fixed bundle catalog
//! │   ├── purchase.rs ◄─── Selection + editor state management
//! │   ├── account.rs  ◄─── Verified account state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Bundle listing
//! │   ├── purchase.rs ◄─── Selection commands
//! │   ├── custom.rs   ◄─── Custom-amount editor commands
//! │   ├── verify.rs   ◄─── Username verification
//! │   └── payment.rs  ◄─── Checkout + simulated payment
//! ├── view.rs         ◄─── Render sink + notification events
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod view;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{AccountState, CatalogState, ConfigState, PurchaseState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: built-in bundle grid (the static content source)    │
/// │     • PurchaseState: empty selection + closed editor, behind a Mutex    │
/// │     • AccountState: unverified                                          │
/// │     • ConfigState: defaults with COINUP_* env overrides                 │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Coinup Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            use tauri::Manager;

            // Initialize state objects
            let catalog_state = CatalogState::builtin();
            let purchase_state = PurchaseState::new();
            let account_state = AccountState::new();
            let config_state = ConfigState::from_env();

            // Register state with Tauri
            app.manage(catalog_state);
            app.manage(purchase_state);
            app.manage(account_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Catalog commands
            commands::catalog::get_catalog,
            // Purchase commands
            commands::purchase::get_order_summary,
            commands::purchase::select_bundle,
            commands::purchase::clear_selection,
            // Custom amount commands
            commands::custom::toggle_custom_amount,
            commands::custom::custom_amount_input,
            commands::custom::custom_amount_blur,
            commands::custom::custom_keypress_allowed,
            // Verification commands
            commands::verify::verify_username,
            // Payment commands
            commands::payment::open_checkout,
            commands::payment::process_payment,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=coinup=trace` - Show trace for coinup crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,coinup=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
