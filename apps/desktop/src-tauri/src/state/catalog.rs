//! # Catalog State
//!
//! The fixed coin bundles offered on the top-up screen.
//!
//! This is the app's "static content source": bundles are built once at
//! startup, handed to the frontend read-only, and never written back.
//! Prices are stored per bundle (not derived on the fly) so the catalog
//! could carry promotional prices, but the built-in set is priced exactly
//! at the standard rate.

use coinup_core::{CoinBundle, CoreError, CoreResult, COIN_RATE};
use tracing::info;

/// Read-only bundle catalog, managed by Tauri.
#[derive(Debug, Clone)]
pub struct CatalogState {
    bundles: Vec<CoinBundle>,
}

impl CatalogState {
    /// Builds the standard catalog.
    ///
    /// Quantities mirror the page's bundle grid; every price is the
    /// standard rate applied to the quantity.
    pub fn builtin() -> Self {
        let quantities: [u64; 7] = [70, 350, 700, 1_400, 3_500, 7_000, 17_500];
        let bundles = quantities
            .iter()
            .map(|&coins| {
                CoinBundle::new(format!("bundle-{coins}"), coins, COIN_RATE.price_for(coins))
            })
            .collect::<Vec<_>>();

        info!(count = bundles.len(), "Catalog built");
        CatalogState { bundles }
    }

    /// All bundles, in display order.
    pub fn bundles(&self) -> &[CoinBundle] {
        &self.bundles
    }

    /// Looks up a bundle by id.
    pub fn get(&self, id: &str) -> CoreResult<&CoinBundle> {
        self.bundles
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| CoreError::BundleNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinup_core::Money;

    #[test]
    fn test_builtin_catalog() {
        let catalog = CatalogState::builtin();
        assert_eq!(catalog.bundles().len(), 7);
        assert_eq!(catalog.bundles()[0].coins, 70);
    }

    #[test]
    fn test_prices_match_rate() {
        let catalog = CatalogState::builtin();
        for bundle in catalog.bundles() {
            assert_eq!(bundle.price(), COIN_RATE.price_for(bundle.coins), "{}", bundle.id);
        }
        // spot checks against the on-screen prices
        assert_eq!(catalog.get("bundle-70").unwrap().price(), Money::from_cents(83));
        assert_eq!(catalog.get("bundle-350").unwrap().price(), Money::from_cents(413));
        assert_eq!(catalog.get("bundle-17500").unwrap().price(), Money::from_euro_parts(206, 50));
    }

    #[test]
    fn test_unknown_id() {
        let catalog = CatalogState::builtin();
        assert!(matches!(
            catalog.get("bundle-9000"),
            Err(CoreError::BundleNotFound(_))
        ));
    }
}
