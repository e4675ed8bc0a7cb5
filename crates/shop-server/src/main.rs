//! rust-shop HTTP Server
//!
//! Axum-based server for the storefront: JSON API for product data and
//! checkout session creation, plus static hosting of the WASM frontend.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shop_catalog::{CatalogProvider, MockCatalog, StripeCatalog};

use crate::handlers::{create_checkout, get_product, health_check, list_products};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize catalog provider
    let demo_mode = std::env::var("DEMO_MODE").is_ok_and(|v| v == "1" || v == "true");

    let catalog: Arc<dyn CatalogProvider> = if demo_mode {
        tracing::warn!("⚠ DEMO_MODE set - serving the seeded demo catalog");
        tracing::warn!("  Checkout URLs are fake; no payment will happen");
        Arc::new(MockCatalog::new())
    } else {
        let stripe = StripeCatalog::from_env()?;
        if stripe.health_check().await {
            tracing::info!("✓ Connected to Stripe");
        } else {
            tracing::warn!("⚠ Stripe unreachable - product pages will fail");
            tracing::warn!("  Check STRIPE_SECRET_KEY in .env");
        }
        Arc::new(stripe)
    };

    tracing::info!("Catalog provider: {}", catalog.name());

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let public_url =
        std::env::var("PUBLIC_URL").unwrap_or_else(|_| "http://localhost:3000".into());

    // Build application state
    let state = AppState {
        catalog,
        public_url,
        stripe_configured: !demo_mode,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Static files (WASM frontend); unknown paths fall back to index.html so
    // /product/{id} deep links resolve client-side
    let frontend = ServeDir::new("static").not_found_service(ServeFile::new("static/index.html"));

    // Build router
    let app = Router::new()
        // Health & catalog
        .route("/health", get(health_check))
        .route("/api/products", get(list_products))
        .route("/api/products/{id}", get(get_product))
        // Checkout
        .route("/api/checkout", post(create_checkout))
        // Frontend
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🛍  rust-shop server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  GET  /api/products        - List catalog");
    tracing::info!("  GET  /api/products/{{id}}   - Product view model");
    tracing::info!("  POST /api/checkout        - Create Stripe checkout");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
