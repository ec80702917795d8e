pub mod cart;
pub mod cart_state;
pub mod length;
pub mod phase;

pub use cart::{format_cents, Cart, CartItem};
pub use cart_state::{phase_memo, provide_cart_state, use_cart_state, CartState};
pub use length::Length;
pub use phase::{Phase, Section};
