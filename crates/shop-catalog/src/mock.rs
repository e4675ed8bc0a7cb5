//! Mock Catalog
//!
//! For testing and demo purposes. Serves the four seeded storefront
//! products without touching the Stripe API.

use async_trait::async_trait;

use crate::error::{CatalogError, Result};
use crate::model::{CheckoutRequest, CheckoutSession, Product};
use crate::money;
use crate::provider::CatalogProvider;

/// (product id, name, image, unit amount in centavos, description, price id)
type Seed = (
    &'static str,
    &'static str,
    &'static str,
    i64,
    &'static str,
    &'static str,
);

const SEED_PRODUCTS: [Seed; 4] = [
    (
        "prod_OKRohDco4apHAI",
        "Explorer Tee",
        "https://files.example.com/tees/explorer.png",
        7990,
        "Lightweight cotton tee with the Explorer print across the chest.",
        "price_1NXhPLExplorerTee00",
    ),
    (
        "prod_OKRn94RDIusXF6",
        "Beyond the Limits Tee",
        "https://files.example.com/tees/beyond-the-limits.png",
        8490,
        "Classic fit tee celebrating the ones who ship past their limits.",
        "price_1NXhOQBeyondTee0000",
    ),
    (
        "prod_OKRF6Irrbv3V1C",
        "Maratona Tee",
        "https://files.example.com/tees/maratona.png",
        7490,
        "Soft-touch tee from the Maratona drop, printed front and back.",
        "price_1NXgfMMaratonaTee00",
    ),
    (
        "prod_OKRDL9r9LeH0Lv",
        "Summit Tee",
        "https://files.example.com/tees/summit.png",
        9990,
        "Heavyweight tee with an embroidered Summit badge on the sleeve.",
        "price_1NXgdTSummitTee0000",
    ),
];

/// Mock catalog provider seeded with static products
#[derive(Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }

    fn seed(product_id: &str) -> Option<&'static Seed> {
        SEED_PRODUCTS.iter().find(|seed| seed.0 == product_id)
    }

    fn view_model(seed: &Seed) -> Product {
        let (id, name, image_url, unit_amount, description, price_id) = *seed;
        Product {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            price: money::format_brl(unit_amount),
            description: description.into(),
            default_price_id: price_id.into(),
        }
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn retrieve_product(&self, product_id: &str) -> Result<Product> {
        Self::seed(product_id)
            .map(Self::view_model)
            .ok_or_else(|| CatalogError::ProductNotFound(product_id.to_string()))
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(SEED_PRODUCTS.iter().map(Self::view_model).collect())
    }

    async fn create_checkout_session(&self, request: CheckoutRequest) -> Result<CheckoutSession> {
        let known = SEED_PRODUCTS
            .iter()
            .any(|seed| seed.5 == request.price_id);
        if !known {
            return Err(CatalogError::Stripe(format!(
                "No such price: {}",
                request.price_id
            )));
        }

        let id = format!("cs_test_{}", request.price_id);
        Ok(CheckoutSession {
            checkout_url: format!("https://checkout.stripe.com/c/pay/{id}"),
            id,
        })
    }

    async fn health_check(&self) -> bool {
        true // Mock always healthy
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_IDS: [&str; 4] = [
        "prod_OKRohDco4apHAI",
        "prod_OKRn94RDIusXF6",
        "prod_OKRF6Irrbv3V1C",
        "prod_OKRDL9r9LeH0Lv",
    ];

    #[tokio::test]
    async fn test_all_sample_products_resolve() {
        let catalog = MockCatalog::new();

        for id in SAMPLE_IDS {
            let product = catalog.retrieve_product(id).await.unwrap();
            assert_eq!(product.id, id);
            assert!(product.price.starts_with("R$ "));
            assert!(!product.default_price_id.is_empty());
        }
    }

    #[tokio::test]
    async fn test_formatted_price() {
        let catalog = MockCatalog::new();
        let product = catalog.retrieve_product("prod_OKRohDco4apHAI").await.unwrap();
        assert_eq!(product.price, "R$ 79,90");
    }

    #[tokio::test]
    async fn test_unknown_product() {
        let catalog = MockCatalog::new();
        let result = catalog.retrieve_product("prod_missing").await;
        assert!(matches!(result, Err(CatalogError::ProductNotFound(_))));
    }

    #[tokio::test]
    async fn test_checkout_session_for_known_price() {
        let catalog = MockCatalog::new();
        let product = catalog.retrieve_product("prod_OKRohDco4apHAI").await.unwrap();

        let session = catalog
            .create_checkout_session(CheckoutRequest {
                price_id: product.default_price_id,
                success_url: "http://localhost:3000/success".into(),
                cancel_url: "http://localhost:3000/".into(),
            })
            .await
            .unwrap();

        assert!(session.checkout_url.contains(&session.id));
    }

    #[tokio::test]
    async fn test_checkout_session_for_unknown_price() {
        let catalog = MockCatalog::new();
        let result = catalog
            .create_checkout_session(CheckoutRequest {
                price_id: "price_missing".into(),
                success_url: "http://localhost:3000/success".into(),
                cancel_url: "http://localhost:3000/".into(),
            })
            .await;

        assert!(result.is_err());
    }
}
