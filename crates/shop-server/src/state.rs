//! Application State

use std::sync::Arc;

use shop_catalog::CatalogProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog provider (Stripe, or the mock in demo mode)
    pub catalog: Arc<dyn CatalogProvider>,

    /// Public base URL for checkout success/cancel redirects
    pub public_url: String,

    /// Whether the real Stripe catalog is in use
    pub stripe_configured: bool,
}
