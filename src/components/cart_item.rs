use leptos::prelude::*;

use crate::models::{format_cents, use_cart_state, CartItem};

/// One cart line with remove and amount controls.
#[component]
pub fn CartItemView(item: CartItem) -> impl IntoView {
    let state = use_cart_state();
    let id = StoredValue::new(item.id.clone());

    // Read the live amount so the line updates without being re-keyed
    let amount = move || {
        state.cart.with(|cart| {
            id.with_value(|id| {
                cart.items()
                    .iter()
                    .find(|i| &i.id == id)
                    .map_or(0, |i| i.amount)
            })
        })
    };

    let image = (!item.img.is_empty())
        .then(|| view! { <img src=item.img.clone() alt=item.title.clone() /> });

    view! {
        <article class="cart-item">
            {image}
            <div>
                <h4>{item.title.clone()}</h4>
                <h4 class="item-price">{format_cents(item.price_cents)}</h4>
                <button
                    class="remove-btn"
                    on:click=move |_| id.with_value(|id| state.remove(id))
                >
                    "remove"
                </button>
            </div>
            <div>
                <button
                    class="amount-btn"
                    on:click=move |_| id.with_value(|id| state.increase(id))
                >
                    "▲"
                </button>
                <p class="amount">{amount}</p>
                <button
                    class="amount-btn"
                    on:click=move |_| id.with_value(|id| state.decrease(id))
                >
                    "▼"
                </button>
            </div>
        </article>
    }
}
