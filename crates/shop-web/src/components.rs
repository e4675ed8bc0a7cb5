//! UI Components

use leptos::prelude::*;

use crate::api::Product;

/// Catalog card linking to the product detail page
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = format!("/product/{}", product.id);

    view! {
        <a class="product-card" href=href>
            <img src=product.image_url.clone() alt="" />
            <footer>
                <strong>{product.name.clone()}</strong>
                <span>{product.price.clone()}</span>
            </footer>
        </a>
    }
}
