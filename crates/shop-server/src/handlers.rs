//! HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use shop_catalog::{CatalogError, CheckoutRequest, Product};

use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog_available: bool,
    pub stripe_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    pub price_id: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
    pub session_id: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn catalog_error(e: &CatalogError) -> ApiError {
    let (status, code) = match e {
        CatalogError::ProductNotFound(_) => (StatusCode::NOT_FOUND, "PRODUCT_NOT_FOUND"),
        CatalogError::Config(_) => (StatusCode::SERVICE_UNAVAILABLE, "PAYMENTS_DISABLED"),
        CatalogError::MissingPrice(_) | CatalogError::MissingImage(_) => {
            (StatusCode::BAD_GATEWAY, "PRODUCT_UNAVAILABLE")
        }
        CatalogError::Stripe(_) | CatalogError::NoCheckoutUrl => {
            (StatusCode::INTERNAL_SERVER_ERROR, "CHECKOUT_ERROR")
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: e.user_message().into(),
            code: code.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_available = state.catalog.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        catalog_available,
        stripe_configured: state.stripe_configured,
    })
}

/// List the active catalog
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.list_products().await.map_err(|e| {
        tracing::error!("Catalog listing error: {}", e);
        catalog_error(&e)
    })?;

    Ok(Json(products))
}

/// Resolve a single product into its view model
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .catalog
        .retrieve_product(&product_id)
        .await
        .map_err(|e| {
            tracing::warn!("Product resolution failed for {}: {}", product_id, e);
            catalog_error(&e)
        })?;

    Ok(Json(product))
}

/// Create a hosted checkout session and hand back its URL
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutPayload>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let base = state.public_url.trim_end_matches('/');

    let request = CheckoutRequest {
        price_id: payload.price_id,
        success_url: format!("{base}/success?session_id={{CHECKOUT_SESSION_ID}}"),
        cancel_url: format!("{base}/"),
    };

    let session = state
        .catalog
        .create_checkout_session(request)
        .await
        .map_err(|e| {
            tracing::error!("Checkout error: {}", e);
            catalog_error(&e)
        })?;

    Ok(Json(CheckoutResponse {
        checkout_url: session.checkout_url,
        session_id: session.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request},
        routing::{get, post},
        Router,
    };
    use shop_catalog::MockCatalog;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = AppState {
            catalog: Arc::new(MockCatalog::new()),
            public_url: "http://localhost:3000".into(),
            stripe_configured: false,
        };

        Router::new()
            .route("/health", get(health_check))
            .route("/api/products", get(list_products))
            .route("/api/products/{id}", get(get_product))
            .route("/api/checkout", post(create_checkout))
            .with_state(state)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["catalog_available"], true);
    }

    #[tokio::test]
    async fn test_list_products() {
        let response = test_app()
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_get_product() {
        let response = test_app()
            .oneshot(
                Request::get("/api/products/prod_OKRohDco4apHAI")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "prod_OKRohDco4apHAI");
        assert_eq!(json["price"], "R$ 79,90");
    }

    #[tokio::test]
    async fn test_get_unknown_product() {
        let response = test_app()
            .oneshot(
                Request::get("/api/products/prod_missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["code"], "PRODUCT_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_checkout_returns_session_url() {
        let body = serde_json::json!({ "price_id": "price_1NXhPLExplorerTee00" });
        let response = test_app()
            .oneshot(
                Request::post("/api/checkout")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let url = json["checkout_url"].as_str().unwrap();
        assert!(url.starts_with("https://checkout.stripe.com/"));
        assert!(!json["session_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_with_unknown_price_fails() {
        let body = serde_json::json!({ "price_id": "price_missing" });
        let response = test_app()
            .oneshot(
                Request::post("/api/checkout")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["code"], "CHECKOUT_ERROR");
    }
}
