pub mod cart_container;
pub mod cart_item;
pub mod loading_indicator;
pub mod navbar;
pub mod root_view;

pub use cart_container::CartContainer;
pub use cart_item::CartItemView;
pub use loading_indicator::LoadingIndicator;
pub use navbar::Navbar;
pub use root_view::RootView;
