use serde::{Deserialize, Serialize};

/// Highest unit price a catalog may list ($1,000,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000_000;

/// Highest amount a single catalog line may carry.
pub const MAX_ITEM_AMOUNT: u32 = 999;

/// One line of the cart as sent to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Stable identifier, unique within a catalog
    pub id: String,
    pub title: String,
    /// Unit price in cents
    pub price_cents: i64,
    /// Image URL (may be empty)
    #[serde(default)]
    pub img: String,
    /// Units of this item in the cart
    pub amount: u32,
}

impl CartItem {
    /// Price of the whole line (unit price × amount)
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents.saturating_mul(i64::from(self.amount))
    }
}
