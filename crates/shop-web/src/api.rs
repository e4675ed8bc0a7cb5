//! API Client

use serde::{Deserialize, Serialize};

/// Product view model as served by the backend
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub price: String,
    pub description: String,
    pub default_price_id: String,
}

/// Fetch the catalog for the home page
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = reqwest::get(api_url("/api/products"))
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err("Failed to load catalog".into())
    }
}

/// Fetch a single product view model
pub async fn fetch_product(product_id: &str) -> Result<Product, String> {
    let response = reqwest::get(api_url(&format!("/api/products/{product_id}")))
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"].as_str().unwrap_or("Product not found").to_string())
    }
}

/// Create a checkout session; returns the hosted checkout URL
pub async fn create_checkout(price_id: &str) -> Result<String, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "price_id": price_id,
    });

    let response = client
        .post(api_url("/api/checkout"))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: serde_json::Value = response.json().await.map_err(|e| e.to_string())?;
        data["checkout_url"]
            .as_str()
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .ok_or_else(|| "No checkout URL returned".into())
    } else {
        Err("Failed to create checkout".into())
    }
}

/// Resolve an API path against the current origin
fn api_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into());

    format!("{origin}{path}")
}
