use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RootView;
use crate::ipc::fetch_cart;
use crate::models::{provide_cart_state, CartState};

/// Root application component that provides the cart state and mounts the page.
#[component]
pub fn App() -> impl IntoView {
    let state = provide_cart_state();

    // Load the cart once per component instance
    let load_started = std::cell::Cell::new(false);
    Effect::new(move |_| {
        if !load_started.get() {
            load_started.set(true);
            spawn_local(async move {
                load_cart(state).await;
            });
        }
    });

    view! { <RootView /> }
}

/// Fetch the cart from the host and settle the loading flag either way.
#[allow(clippy::future_not_send)]
async fn load_cart(state: CartState) {
    match fetch_cart().await {
        Ok(items) => state.finish_loading(items),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load cart: {e}").into());
            state.fail_loading(e);
        }
    }
}
