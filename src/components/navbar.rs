use leptos::prelude::*;

use crate::models::use_cart_state;

/// Top bar with the page title and the cart badge.
#[component]
pub fn Navbar() -> impl IntoView {
    let state = use_cart_state();

    view! {
        <nav>
            <div class="nav-center">
                <h3>"Cartwheel"</h3>
                <div class="nav-container">
                    <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20">
                        <path d="M16 6V4c0-2.2-1.8-4-4-4S8 1.8 8 4v2H2v12c0 1.1.9 2 2 2h12c1.1 0 2-.9 2-2V6h-2zm-6-2c0-1.1.9-2 2-2s2 .9 2 2v2h-4V4zm8 14H4V8h4v2h2V8h4v2h2V8h2v10z" />
                    </svg>
                    <div class="amount-container">
                        <p class="total-amount">{move || state.amount()}</p>
                    </div>
                </div>
            </div>
        </nav>
    }
}
