pub mod catalog;

use std::path::PathBuf;

pub use catalog::{load_or_default, parse_catalog, CatalogError, CatalogSource, CART_FILE_ENV};

/// Per-user directory holding logs and the optional cart file (`~/.cartwheel`).
pub fn app_dir() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join(".cartwheel"))
}
