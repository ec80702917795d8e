use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{CartItem, MAX_ITEM_AMOUNT, MAX_PRICE_CENTS};

/// Environment variable naming a cart JSON file to load instead of the defaults.
pub const CART_FILE_ENV: &str = "CARTWHEEL_CART_FILE";

/// File name looked up inside the app directory.
const CART_FILE_NAME: &str = "cart.json";

/// Cart shipped inside the binary.
const BUNDLED_CART: &str = include_str!("../../resources/cart.json");

/// Errors raised while reading a cart catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid catalog {origin}: {reason}")]
    Invalid { origin: String, reason: String },
}

/// Where the initial cart comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A JSON file on disk
    File(PathBuf),
    /// The catalog compiled into the binary
    Bundled,
}

impl CatalogSource {
    /// Resolve the source from the environment and the user's home directory.
    pub fn resolve() -> Self {
        let env_path = std::env::var_os(CART_FILE_ENV).map(PathBuf::from);
        Self::resolve_from(env_path, super::app_dir())
    }

    /// Resolution order: explicit path, then `<app_dir>/cart.json` if it exists, then bundled.
    pub fn resolve_from(env_path: Option<PathBuf>, app_dir: Option<PathBuf>) -> Self {
        if let Some(path) = env_path.filter(|p| !p.as_os_str().is_empty()) {
            return Self::File(path);
        }

        app_dir
            .map(|dir| dir.join(CART_FILE_NAME))
            .filter(|path| path.is_file())
            .map_or(Self::Bundled, Self::File)
    }

    /// Read and validate the catalog.
    pub async fn load(&self) -> Result<Vec<CartItem>, CatalogError> {
        match self {
            Self::File(path) => {
                let raw = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogError::Io {
                        path: path.clone(),
                        source,
                    })?;
                parse_catalog(&raw, &path.display().to_string())
            }
            Self::Bundled => parse_catalog(BUNDLED_CART, "bundled catalog"),
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Bundled => f.write_str("bundled catalog"),
        }
    }
}

/// Parse a JSON array of cart items and check it is usable.
pub fn parse_catalog(raw: &str, origin: &str) -> Result<Vec<CartItem>, CatalogError> {
    let items: Vec<CartItem> = serde_json::from_str(raw).map_err(|source| CatalogError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    validate(&items).map_err(|reason| CatalogError::Invalid {
        origin: origin.to_string(),
        reason,
    })?;

    Ok(items)
}

fn validate(items: &[CartItem]) -> Result<(), String> {
    let mut seen = HashSet::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.id.trim().is_empty() {
            return Err(format!("item {index} has an empty id"));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(format!("duplicate id `{}`", item.id));
        }
        if item.price_cents < 0 {
            return Err(format!("item `{}` has a negative price", item.id));
        }
        if item.price_cents > MAX_PRICE_CENTS {
            return Err(format!(
                "item `{}` price exceeds {MAX_PRICE_CENTS} cents",
                item.id
            ));
        }
        if item.amount == 0 {
            return Err(format!("item `{}` has a zero amount", item.id));
        }
        if item.amount > MAX_ITEM_AMOUNT {
            return Err(format!(
                "item `{}` amount exceeds {MAX_ITEM_AMOUNT}",
                item.id
            ));
        }
    }
    Ok(())
}

/// Load the catalog, falling back to the bundled one on any error.
pub async fn load_or_default(source: &CatalogSource) -> Vec<CartItem> {
    let loaded = match source.load().await {
        Ok(items) => Ok(items),
        Err(e) if *source != CatalogSource::Bundled => {
            tracing::error!("Failed to load cart catalog: {}", e);
            tracing::warn!("Falling back to bundled catalog");
            CatalogSource::Bundled.load().await
        }
        Err(e) => Err(e),
    };

    match loaded {
        Ok(items) => {
            let total_cents = items
                .iter()
                .fold(0i64, |acc, item| acc.saturating_add(item.line_total_cents()));
            tracing::info!(
                "Loaded {} cart items (total {} cents)",
                items.len(),
                total_cents
            );
            items
        }
        Err(e) => {
            tracing::error!("Bundled catalog is unusable: {}", e);
            Vec::new()
        }
    }
}
