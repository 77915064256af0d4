//! # Tauri Commands Module
//!
//! All commands exposed to the WebView frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── catalog.rs  ◄─── Fixed bundle listing
//! ├── purchase.rs ◄─── Selection + order summary
//! ├── custom.rs   ◄─── Custom-amount editor surface
//! ├── verify.rs   ◄─── Simulated username verification
//! ├── payment.rs  ◄─── Checkout guards + simulated payment
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ─────────────────                                                      │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const update = await invoke('custom_amount_input', {                   │
//! │    text: '1000',                                                        │
//! │    caret: 4                                                             │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn custom_amount_input(                                                │
//! │      purchase: State<'_, PurchaseState>,  ◄── Injected by Tauri         │
//! │      text: String,                        ◄── From invoke params        │
//! │      caret: usize,                                                      │
//! │  ) -> EditorUpdate                                                      │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { open, text: "1,000", caret: 5, summary: {...} }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn get_catalog(catalog: State<'_, CatalogState>)
//!
//! // Only needs the purchase
//! fn get_order_summary(purchase: State<'_, PurchaseState>)
//!
//! // Needs both
//! fn select_bundle(catalog: State<'_, CatalogState>, purchase: State<'_, PurchaseState>, ...)
//! ```

pub mod catalog;
pub mod config;
pub mod custom;
pub mod payment;
pub mod purchase;
pub mod verify;
