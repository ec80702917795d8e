pub mod commands;
pub mod config;
pub mod logging;
pub mod models;
pub mod state;

use commands::cart::{get_cart, reload_cart};
use config::{load_or_default, CatalogSource};
use logging::setup_logging;
use state::CartStore;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging before starting Tauri
    if let Err(e) = setup_logging() {
        eprintln!("Warning: Failed to setup logging: {e}");
    }

    tracing::info!("Starting Cartwheel");

    let source = CatalogSource::resolve();
    tracing::info!("Cart catalog source: {}", source);

    let items = tauri::async_runtime::block_on(load_or_default(&source));
    let cart_store = CartStore::new(source, items);

    tauri::Builder::default()
        .manage(cart_store)
        .invoke_handler(tauri::generate_handler![get_cart, reload_cart])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
