use leptos::prelude::*;

use crate::components::{CartContainer, LoadingIndicator, Navbar};
use crate::models::{phase_memo, use_cart_state, Section};

/// Chooses between the loading placeholder and the cart page.
///
/// Output depends only on the `loading` flag of the shared state.
#[component]
pub fn RootView() -> impl IntoView {
    let state = use_cart_state();
    let phase = phase_memo(state);

    view! {
        <main>
            {move || {
                phase
                    .get()
                    .sections()
                    .iter()
                    .copied()
                    .map(render_section)
                    .collect_view()
            }}
        </main>
    }
}

fn render_section(section: Section) -> AnyView {
    match section {
        Section::LoadingIndicator => view! { <LoadingIndicator /> }.into_any(),
        Section::NavigationBar => view! { <Navbar /> }.into_any(),
        Section::CartContainer => view! { <CartContainer /> }.into_any(),
    }
}
