//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can mock/inject individual states
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they need
//! 4. **Reduced Contention**: Independent states don't block each other
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(catalog_state);                                     │   │
//! │  │  app.manage(purchase_state);                                    │   │
//! │  │  app.manage(account_state);                                     │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │      ┌──────────────┬────────┴───────┬──────────────────┐              │
//! │      ▼              ▼                ▼                  ▼              │
//! │  ┌──────────┐  ┌───────────┐  ┌─────────────┐  ┌──────────────┐       │
//! │  │ Catalog  │  │ Purchase  │  │  Account    │  │  Config      │       │
//! │  │ State    │  │ State     │  │  State      │  │  State       │       │
//! │  │          │  │           │  │             │  │              │       │
//! │  │ fixed    │  │ Arc<Mutex<│  │ Arc<Mutex<  │  │ store name,  │       │
//! │  │ bundles  │  │ Purchase>>│  │ Option<..>>>│  │ delays       │       │
//! │  └──────────┘  └───────────┘  └─────────────┘  └──────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: read-only after startup                               │
//! │  • PurchaseState / AccountState: Arc<Mutex<T>> for exclusive access    │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod account;
mod catalog;
mod config;
mod purchase;

pub use account::{AccountState, VerifiedAccount};
pub use catalog::CatalogState;
pub use config::ConfigState;
pub use purchase::{Purchase, PurchaseState};
