use tauri::State;

use crate::models::CartItem;
use crate::state::CartStore;

/// Return the cart the frontend shows once loading finishes.
///
/// # Arguments
/// * `state` - Tauri managed `CartStore` state
///
/// # Returns
/// * `Ok(Vec<CartItem>)` - All items currently in the store
#[tauri::command]
pub async fn get_cart(state: State<'_, CartStore>) -> Result<Vec<CartItem>, String> {
    let items = state.snapshot().await;
    tracing::debug!("Serving cart with {} items", items.len());
    Ok(items)
}

/// Re-read the cart from its catalog source.
///
/// # Returns
/// * `Ok(usize)` - Number of items now in the store
/// * `Err(String)` - Why the catalog could not be read; the previous cart is kept
#[tauri::command]
pub async fn reload_cart(state: State<'_, CartStore>) -> Result<usize, String> {
    tracing::info!("Reloading cart from {}", state.source());

    state.reload().await.map_err(|e| {
        tracing::error!("Cart reload failed: {}", e);
        e.to_string()
    })
}
