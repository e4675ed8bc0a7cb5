//! Product Detail Page

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api;
use crate::checkout::{CheckoutOutcome, CheckoutState};

#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let (product, set_product) = signal(None::<api::Product>);
    let (error, set_error) = signal(None::<String>);
    let (state, set_state) = signal(CheckoutState::Idle);

    // Resolve the view model whenever the route's product id changes
    Effect::new(move |_| {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(vm) => set_product.set(Some(vm)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let buy = move |_| {
        let Some(vm) = product.get() else { return };
        // Guard against re-entry; the button is also disabled while busy
        let Some(requesting) = state.get().try_begin() else {
            return;
        };
        set_state.set(requesting);

        leptos::task::spawn_local(async move {
            let result = api::create_checkout(&vm.default_price_id).await;
            let (next, outcome) = requesting.settle(result);
            set_state.set(next);

            match outcome {
                CheckoutOutcome::Navigate(url) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&url);
                    }
                }
                CheckoutOutcome::Alert(notice) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(notice);
                    }
                }
            }
        });
    };

    view! {
        <div class="product">
            {move || match product.get() {
                Some(vm) => view! {
                    <section class="product-detail">
                        <div class="image">
                            <img src=vm.image_url.clone() alt="" />
                        </div>

                        <div class="details">
                            <h1>{vm.name.clone()}</h1>
                            <span class="price">{vm.price.clone()}</span>

                            <p>{vm.description.clone()}</p>

                            <button
                                class="btn btn-primary"
                                prop:disabled=move || state.get().is_busy()
                                on:click=buy
                            >
                                "Buy now"
                            </button>
                        </div>
                    </section>
                }
                .into_any(),
                None => view! {
                    <p class="loading">
                        {move || error.get().unwrap_or_else(|| "Loading...".into())}
                    </p>
                }
                .into_any(),
            }}
        </div>
    }
}
