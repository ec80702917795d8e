use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::CartItemView;
use crate::ipc;
use crate::models::{format_cents, use_cart_state, CartState};

/// Cart listing with total and a clear button.
#[component]
pub fn CartContainer() -> impl IntoView {
    let state = use_cart_state();
    let is_empty = Memo::new(move |_| state.cart.with(|cart| cart.is_empty()));

    move || {
        if is_empty.get() {
            view! {
                <section class="cart">
                    <header>
                        <h2>"your bag"</h2>
                        <h4 class="empty-cart">"is currently empty"</h4>
                        {move || {
                            state
                                .error
                                .get()
                                .map(|error| view! { <p class="cart-error">{error}</p> })
                        }}
                        <button class="btn reload-btn" on:click=move |_| reload(state)>
                            "reload cart"
                        </button>
                    </header>
                </section>
            }
            .into_any()
        } else {
            view! {
                <section class="cart">
                    <header>
                        <h2>"your bag"</h2>
                    </header>
                    <div>
                        <For
                            each=move || state.cart.with(|cart| cart.items().to_vec())
                            key=|item| item.id.clone()
                            children=move |item| view! { <CartItemView item=item /> }
                        />
                    </div>
                    <footer>
                        <hr />
                        <div class="cart-total">
                            <h4>
                                "total " <span>{move || format_cents(state.total_cents())}</span>
                            </h4>
                        </div>
                        <button class="btn clear-btn" on:click=move |_| state.clear()>
                            "clear cart"
                        </button>
                    </footer>
                </section>
            }
            .into_any()
        }
    }
}

/// Ask the host to re-read its catalog and show the result.
fn reload(state: CartState) {
    state.start_loading();

    spawn_local(async move {
        match ipc::reload_cart().await {
            Ok(items) => state.finish_loading(items),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to reload cart: {e}").into());
                state.fail_loading(e);
            }
        }
    });
}
