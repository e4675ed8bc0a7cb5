//! Home Page

use leptos::prelude::*;

use crate::api;
use crate::components::ProductCard;

#[component]
pub fn HomePage() -> impl IntoView {
    let (products, set_products) = signal(Vec::<api::Product>::new());
    let (error, set_error) = signal(None::<String>);

    leptos::task::spawn_local(async move {
        match api::fetch_products().await {
            Ok(catalog) => set_products.set(catalog),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <div class="home">
            <header class="hero">
                <h1>"rust-shop"</h1>
            </header>

            <section class="catalog">
                <Show when=move || error.get().is_some()>
                    <p class="error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <For
                    each=move || products.get()
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product=product /> }
                />
            </section>
        </div>
    }
}
