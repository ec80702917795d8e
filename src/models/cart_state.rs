use leptos::prelude::*;

use crate::models::{Cart, CartItem, Phase};

/// Frontend-only reactive state (Leptos signals).
/// Shared with every component through `use_cart_state()`.
#[derive(Clone, Copy)]
pub struct CartState {
    /// True until the first cart load settles
    pub loading: RwSignal<bool>,
    /// Current cart contents
    pub cart: RwSignal<Cart>,
    /// Load failure, if the host could not provide the cart
    pub error: RwSignal<Option<String>>,
}

impl CartState {
    /// Create a state that starts in the loading phase
    pub fn new() -> Self {
        Self {
            loading: RwSignal::new(true),
            cart: RwSignal::new(Cart::new()),
            error: RwSignal::new(None),
        }
    }

    /// Current root layout phase (tracked)
    pub fn phase(&self) -> Phase {
        Phase::from_loading(self.loading.get())
    }

    /// Re-enter the loading phase, keeping the current cart until new items arrive
    pub fn start_loading(&self) {
        self.loading.set(true);
    }

    /// Install loaded items and leave the loading phase
    pub fn finish_loading(&self, items: Vec<CartItem>) {
        self.cart.set(Cart::from_items(items));
        self.error.set(None);
        self.loading.set(false);
    }

    /// Record a load failure; the page still leaves the loading phase with an empty cart
    pub fn fail_loading(&self, message: impl Into<String>) {
        self.cart.set(Cart::new());
        self.error.set(Some(message.into()));
        self.loading.set(false);
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }

    pub fn remove(&self, id: &str) {
        self.cart.update(|cart| {
            cart.remove(id);
        });
    }

    pub fn increase(&self, id: &str) {
        self.cart.update(|cart| {
            cart.increase(id);
        });
    }

    pub fn decrease(&self, id: &str) {
        self.cart.update(|cart| {
            cart.decrease(id);
        });
    }

    /// Total units in the cart (tracked)
    pub fn amount(&self) -> u32 {
        self.cart.with(Cart::amount)
    }

    /// Cart total in cents (tracked)
    pub fn total_cents(&self) -> i64 {
        self.cart.with(Cart::total_cents)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}

/// Memoized phase so the root only re-renders when `loading` flips.
pub fn phase_memo(state: CartState) -> Memo<Phase> {
    Memo::new(move |_| state.phase())
}

/// Create the cart state and provide it to all descendants.
pub fn provide_cart_state() -> CartState {
    let state = CartState::new();
    provide_context(state);
    state
}

/// Read the cart state provided by an ancestor.
///
/// # Panics
/// Panics when called outside a component tree that ran `provide_cart_state()`.
pub fn use_cart_state() -> CartState {
    use_context::<CartState>().expect("CartState context missing")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    fn item(id: &str, amount: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: format!("Phone {id}"),
            price_cents: 1_000,
            img: String::new(),
            amount,
        }
    }

    #[test]
    fn test_starts_loading() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            assert!(state.loading.get_untracked());
            assert_eq!(Phase::from_loading(state.loading.get_untracked()), Phase::Loading);
        });
    }

    #[test]
    fn test_finish_loading_switches_to_ready() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            state.finish_loading(vec![item("a", 2), item("b", 1)]);

            assert!(!state.loading.get_untracked());
            assert_eq!(state.cart.with_untracked(Cart::amount), 3);
            assert_eq!(state.error.get_untracked(), None);
        });
    }

    #[test]
    fn test_fail_loading_leaves_empty_cart_and_error() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            state.fail_loading("host unavailable");

            assert!(!state.loading.get_untracked());
            assert!(state.cart.with_untracked(Cart::is_empty));
            assert_eq!(
                state.error.get_untracked().as_deref(),
                Some("host unavailable")
            );
        });
    }

    #[test]
    fn test_actions_update_cart() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            state.finish_loading(vec![item("a", 1), item("b", 1)]);

            state.increase("a");
            state.decrease("b");
            assert_eq!(state.cart.with_untracked(Cart::amount), 2);
            assert_eq!(state.cart.with_untracked(|c| c.items().len()), 1);

            state.remove("a");
            assert!(state.cart.with_untracked(Cart::is_empty));

            state.finish_loading(vec![item("c", 4)]);
            state.clear();
            assert!(state.cart.with_untracked(Cart::is_empty));
            assert!(!state.loading.get_untracked());
        });
    }

    #[test]
    fn test_phase_memo_switches_whole_branch() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            let phase = phase_memo(state);

            assert_eq!(phase.get_untracked(), Phase::Loading);
            assert_eq!(
                phase.get_untracked().sections(),
                &[Section::LoadingIndicator][..]
            );

            state.finish_loading(vec![item("a", 1)]);
            assert_eq!(phase.get_untracked(), Phase::Ready);
            assert_eq!(
                phase.get_untracked().sections(),
                &[Section::NavigationBar, Section::CartContainer][..]
            );

            // Cart-only changes leave the layout alone
            state.increase("a");
            state.clear();
            assert_eq!(phase.get_untracked(), Phase::Ready);

            state.start_loading();
            assert_eq!(phase.get_untracked(), Phase::Loading);
            assert_eq!(state.cart.with_untracked(Cart::amount), 0);
        });
    }

    #[test]
    fn test_phase_memo_after_failed_load_is_ready() {
        let owner = Owner::new();
        owner.with(|| {
            let state = CartState::new();
            let phase = phase_memo(state);

            state.fail_loading("host unavailable");
            assert_eq!(phase.get_untracked(), Phase::Ready);
        });
    }
}
