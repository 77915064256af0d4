//! # Catalog Commands
//!
//! Tauri command for listing the fixed coin bundles.

use tauri::State;
use tracing::debug;

use crate::state::CatalogState;
use coinup_core::CoinBundle;

/// Lists the fixed bundles, in display order.
///
/// ## When Used
/// - Startup, to build the bundle grid
///
/// The catalog is read-only; there is no write-back.
#[tauri::command]
pub fn get_catalog(catalog: State<'_, CatalogState>) -> Vec<CoinBundle> {
    debug!("get_catalog command");
    catalog.bundles().to_vec()
}
