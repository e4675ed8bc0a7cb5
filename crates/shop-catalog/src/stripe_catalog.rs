//! Stripe Catalog Integration
//!
//! Resolves products from the Stripe API and creates sessions for the
//! "Stripe Checkout (Hosted)" payment flow.

use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems, Expandable, ListProducts,
    Product as StripeProduct, ProductId, StripeError,
};

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::model::{CheckoutRequest, CheckoutSession, Product};
use crate::money;
use crate::provider::CatalogProvider;

/// Stripe-backed catalog provider
pub struct StripeCatalog {
    client: Client,
}

impl StripeCatalog {
    /// Create a new Stripe catalog
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| CatalogError::Config("STRIPE_SECRET_KEY not set".into()))?;

        Ok(Self::new(&secret_key))
    }

    /// Shape a raw Stripe product into the view model
    ///
    /// The external response is validated here, at the boundary: a product
    /// without an expanded default price (with an amount) or without an
    /// image is rejected instead of being passed through half-formed.
    fn view_model(product: StripeProduct) -> Result<Product> {
        let price = match product.default_price {
            Some(Expandable::Object(price)) => *price,
            _ => return Err(CatalogError::MissingPrice(product.id.to_string())),
        };

        let unit_amount = price
            .unit_amount
            .ok_or_else(|| CatalogError::MissingPrice(product.id.to_string()))?;

        let image_url = product
            .images
            .as_ref()
            .and_then(|images| images.first().cloned())
            .ok_or_else(|| CatalogError::MissingImage(product.id.to_string()))?;

        Ok(Product {
            id: product.id.to_string(),
            name: product.name.unwrap_or_default(),
            image_url,
            price: money::format_brl(unit_amount),
            description: product.description.unwrap_or_default(),
            default_price_id: price.id.to_string(),
        })
    }
}

#[async_trait]
impl CatalogProvider for StripeCatalog {
    async fn retrieve_product(&self, product_id: &str) -> Result<Product> {
        let id: ProductId = product_id
            .parse()
            .map_err(|_| CatalogError::ProductNotFound(product_id.to_string()))?;

        let product = StripeProduct::retrieve(&self.client, &id, &["default_price"])
            .await
            .map_err(|e| match e {
                StripeError::Stripe(ref err) if err.http_status == 404 => {
                    CatalogError::ProductNotFound(product_id.to_string())
                }
                other => CatalogError::Stripe(other.to_string()),
            })?;

        Self::view_model(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let mut params = ListProducts::new();
        params.active = Some(true);
        params.expand = &["data.default_price"];

        let products = StripeProduct::list(&self.client, &params)
            .await
            .map_err(|e| CatalogError::Stripe(e.to_string()))?;

        // A catalog listing tolerates half-configured products; the detail
        // page does not.
        Ok(products
            .data
            .into_iter()
            .filter_map(|product| match Self::view_model(product) {
                Ok(vm) => Some(vm),
                Err(e) => {
                    tracing::warn!("Skipping product in listing: {}", e);
                    None
                }
            })
            .collect())
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Payment);
        params.success_url = Some(&request.success_url);
        params.cancel_url = Some(&request.cancel_url);
        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(1),
            price: Some(request.price_id.clone()),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| CatalogError::Stripe(e.to_string()))?;

        let checkout_url = session.url.ok_or(CatalogError::NoCheckoutUrl)?;

        Ok(CheckoutSession {
            id: session.id.to_string(),
            checkout_url,
        })
    }

    async fn health_check(&self) -> bool {
        let mut params = ListProducts::new();
        params.limit = Some(1);
        StripeProduct::list(&self.client, &params).await.is_ok()
    }

    fn name(&self) -> &str {
        "stripe"
    }
}
