use leptos::prelude::*;

use crate::models::phase::LOADING_MARGIN_TOP;

/// Placeholder shown while the cart loads.
#[component]
pub fn LoadingIndicator() -> impl IntoView {
    let style = LOADING_MARGIN_TOP.map(|margin| format!("margin-top: {margin}"));

    view! { <div class="loading" style=style></div> }
}
