//! Catalog Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog and checkout errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Stripe API error
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Product does not exist (or the identifier is malformed)
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product came back without an expanded default price
    #[error("Product {0} has no usable default price")]
    MissingPrice(String),

    /// Product came back without any image
    #[error("Product {0} has no image")]
    MissingImage(String),

    /// Checkout session was created but carries no redirect URL
    #[error("Checkout session has no URL")]
    NoCheckoutUrl,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            CatalogError::ProductNotFound(_) => "Product not found.",
            CatalogError::Stripe(_) | CatalogError::NoCheckoutUrl => {
                "Checkout could not be started. Please try again."
            }
            CatalogError::MissingPrice(_) | CatalogError::MissingImage(_) => {
                "This product is not available right now."
            }
            CatalogError::Config(_) => "Service configuration error.",
        }
    }
}
