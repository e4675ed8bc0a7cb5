//! # shop-catalog
//!
//! Product catalog and checkout integration for rust-shop.
//!
//! The storefront never talks to Stripe directly from a page: everything
//! goes through the [`CatalogProvider`] trait, which resolves products into
//! display-ready view models and creates hosted checkout sessions.
//!
//! ## Checkout flow (Stripe Hosted)
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Your Site  │────▶│  Stripe Hosted  │────▶│  Your Site  │
//! │  (product)  │     │  Checkout Page  │     │  (success)  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shop_catalog::{CatalogProvider, CheckoutRequest, StripeCatalog};
//!
//! let catalog = StripeCatalog::from_env()?;
//!
//! let product = catalog.retrieve_product("prod_OKRohDco4apHAI").await?;
//! println!("{} - {}", product.name, product.price);
//!
//! let session = catalog.create_checkout_session(CheckoutRequest {
//!     price_id: product.default_price_id,
//!     success_url: "https://yoursite.com/success".into(),
//!     cancel_url: "https://yoursite.com/".into(),
//! }).await?;
//!
//! // Redirect user to: session.checkout_url
//! ```

mod error;
mod mock;
mod model;
pub mod money;
mod provider;
mod stripe_catalog;

pub use error::{CatalogError, Result};
pub use mock::MockCatalog;
pub use model::{CheckoutRequest, CheckoutSession, Product};
pub use provider::CatalogProvider;
pub use stripe_catalog::StripeCatalog;
