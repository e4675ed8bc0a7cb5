//! Checkout Success Page
//!
//! Landing target of the checkout session's success URL.

use leptos::prelude::*;

#[component]
pub fn SuccessPage() -> impl IntoView {
    view! {
        <div class="success">
            <h1>"Purchase complete!"</h1>
            <p>"Your order is on its way. Thanks for shopping with us."</p>
            <a href="/" class="btn">"Back to catalog"</a>
        </div>
    }
}
