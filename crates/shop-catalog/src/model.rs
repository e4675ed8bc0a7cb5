//! Domain Models
//!
//! The view models a page actually renders, shaped from raw Stripe data at
//! the boundary. Built fresh per resolution and never persisted.

use serde::{Deserialize, Serialize};

/// A display-ready product
///
/// `price` is already locale-formatted (see [`crate::money`]); the raw
/// minor-unit amount never leaves the resolver. `default_price_id` exists
/// only to initiate checkout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    /// Stripe product identifier (e.g. "prod_OKRohDco4apHAI")
    pub id: String,

    /// Display name
    pub name: String,

    /// First product image
    pub image_url: String,

    /// Formatted price (e.g. "R$ 79,90")
    pub price: String,

    /// Product description
    pub description: String,

    /// Price identifier used to create a checkout session
    pub default_price_id: String,
}

/// Request to create a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Price to sell (quantity is always 1)
    pub price_id: String,

    /// URL to redirect after successful payment
    pub success_url: String,

    /// URL to redirect if checkout is cancelled
    pub cancel_url: String,
}

/// Result of creating a checkout session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Stripe session ID
    pub id: String,

    /// Hosted checkout URL to redirect the user to
    pub checkout_url: String,
}
