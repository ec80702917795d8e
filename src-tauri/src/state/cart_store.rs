use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::{CatalogError, CatalogSource};
use crate::models::CartItem;

/// Holds the cart served to the frontend and the source it was read from.
#[derive(Debug, Clone)]
pub struct CartStore {
    items: Arc<RwLock<Vec<CartItem>>>,
    source: CatalogSource,
}

impl CartStore {
    /// Create a store with already-loaded items
    pub fn new(source: CatalogSource, items: Vec<CartItem>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            source,
        }
    }

    pub const fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Get all items (cloned)
    pub async fn snapshot(&self) -> Vec<CartItem> {
        self.items.read().await.clone()
    }

    /// Replace the stored items
    pub async fn replace(&self, items: Vec<CartItem>) {
        *self.items.write().await = items;
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Re-read the source. On error the current items are kept.
    pub async fn reload(&self) -> Result<usize, CatalogError> {
        let items = self.source.load().await?;
        let count = items.len();
        self.replace(items).await;
        Ok(count)
    }
}
