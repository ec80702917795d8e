pub mod cart_item;

pub use cart_item::{CartItem, MAX_ITEM_AMOUNT, MAX_PRICE_CENTS};
