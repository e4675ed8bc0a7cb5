//! Catalog Provider
//!
//! Abstraction over the payments platform that backs the storefront.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{CheckoutRequest, CheckoutSession, Product};

/// Catalog provider trait (Strategy pattern)
///
/// The real implementation is [`crate::StripeCatalog`]; tests and demo mode
/// use [`crate::MockCatalog`].
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Resolve a product identifier into a display-ready view model
    async fn retrieve_product(&self, product_id: &str) -> Result<Product>;

    /// List the active catalog for the storefront home page
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Create a hosted checkout session for a single price, quantity 1
    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession>;

    /// Check if the backing platform is reachable
    async fn health_check(&self) -> bool;

    /// Provider name
    fn name(&self) -> &str;
}
