use serde::{Deserialize, Serialize};

/// Upper bound for a single line's amount.
pub const MAX_ITEM_AMOUNT: u32 = 999;

/// One line of the cart.
/// Mirrors the host `CartItem` type for IPC serialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub title: String,
    /// Unit price in cents
    pub price_cents: i64,
    /// Image URL, may be empty
    #[serde(default)]
    pub img: String,
    pub amount: u32,
}

impl CartItem {
    /// Price of the whole line (unit price × amount)
    pub fn line_total_cents(&self) -> i64 {
        self.price_cents.saturating_mul(i64::from(self.amount))
    }
}

/// Cart contents held by the page.
///
/// Items are unique by `id`. An item whose amount drops to zero is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from loaded items, merging duplicate ids and dropping empty lines.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
        for item in items {
            if item.amount == 0 {
                continue;
            }
            if let Some(existing) = merged.iter_mut().find(|i| i.id == item.id) {
                existing.amount = existing
                    .amount
                    .saturating_add(item.amount)
                    .min(MAX_ITEM_AMOUNT);
            } else {
                let amount = item.amount.min(MAX_ITEM_AMOUNT);
                merged.push(CartItem { amount, ..item });
            }
        }
        Self { items: merged }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove an item. Returns false if the id is not in the cart.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Add one to an item's amount, capped at [`MAX_ITEM_AMOUNT`].
    pub fn increase(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.amount = (item.amount + 1).min(MAX_ITEM_AMOUNT);
                true
            }
            None => false,
        }
    }

    /// Take one from an item's amount, removing the item at zero.
    pub fn decrease(&mut self, id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        let item = &mut self.items[pos];
        item.amount = item.amount.saturating_sub(1);
        if item.amount == 0 {
            self.items.remove(pos);
        }
        true
    }

    /// Total number of units in the cart
    pub fn amount(&self) -> u32 {
        self.items.iter().map(|i| i.amount).sum()
    }

    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .fold(0, |acc: i64, item| acc.saturating_add(item.line_total_cents()))
    }
}

/// Format cents as dollars, e.g. `1099` -> `$10.99`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price_cents: i64, amount: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            title: format!("Phone {id}"),
            price_cents,
            img: String::new(),
            amount,
        }
    }

    fn sample_cart() -> Cart {
        Cart::from_items(vec![item("a", 59_999, 1), item("b", 49_999, 2)])
    }

    #[test]
    fn test_totals() {
        let cart = sample_cart();
        assert_eq!(cart.amount(), 3);
        assert_eq!(cart.total_cents(), 59_999 + 2 * 49_999);
    }

    #[test]
    fn test_increase_and_decrease() {
        let mut cart = sample_cart();
        assert!(cart.increase("a"));
        assert_eq!(cart.items()[0].amount, 2);

        assert!(cart.decrease("b"));
        assert_eq!(cart.items()[1].amount, 1);
        assert_eq!(cart.amount(), 3);
    }

    #[test]
    fn test_decrease_to_zero_removes_item() {
        let mut cart = sample_cart();
        assert!(cart.decrease("a"));
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "b");
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut cart = sample_cart();
        let before = cart.clone();
        assert!(!cart.increase("zzz"));
        assert!(!cart.decrease("zzz"));
        assert!(!cart.remove("zzz"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = sample_cart();
        assert!(cart.remove("b"));
        assert_eq!(cart.amount(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_increase_is_capped() {
        let mut cart = Cart::from_items(vec![item("a", 100, MAX_ITEM_AMOUNT)]);
        assert!(cart.increase("a"));
        assert_eq!(cart.items()[0].amount, MAX_ITEM_AMOUNT);
    }

    #[test]
    fn test_from_items_merges_duplicates_and_drops_empty() {
        let cart = Cart::from_items(vec![item("a", 100, 1), item("z", 5, 0), item("a", 100, 2)]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].amount, 3);
    }

    #[test]
    fn test_total_saturates_instead_of_overflowing() {
        let cart = Cart::from_items(vec![item("a", 5_000_000_000_000_000_000, 2), item("b", 100, 1)]);
        assert_eq!(cart.items()[0].line_total_cents(), i64::MAX);
        assert_eq!(cart.total_cents(), i64::MAX);
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(1099), "$10.99");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(-250), "-$2.50");
    }

    #[test]
    fn test_item_deserializes_from_camel_case() {
        let json = r#"{"id":"1","title":"Pixel","priceCents":49999,"amount":1}"#;
        let parsed: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.price_cents, 49_999);
        assert!(parsed.img.is_empty());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Increase(usize),
        Decrease(usize),
        Remove(usize),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..6).prop_map(Action::Increase),
            (0usize..6).prop_map(Action::Decrease),
            (0usize..6).prop_map(Action::Remove),
        ]
    }

    proptest! {
        #[test]
        fn test_amount_and_total_match_items(
            amounts in proptest::collection::vec(0u32..20, 0..6),
            actions in proptest::collection::vec(action(), 0..40)
        ) {
            let items = amounts
                .iter()
                .enumerate()
                .map(|(i, amount)| CartItem {
                    id: i.to_string(),
                    title: format!("item {i}"),
                    price_cents: (i as i64 + 1) * 100,
                    img: String::new(),
                    amount: *amount,
                })
                .collect();
            let mut cart = Cart::from_items(items);

            for action in actions {
                match action {
                    Action::Increase(i) => { cart.increase(&i.to_string()); }
                    Action::Decrease(i) => { cart.decrease(&i.to_string()); }
                    Action::Remove(i) => { cart.remove(&i.to_string()); }
                }
            }

            // No line is ever kept at zero or over the cap
            for item in cart.items() {
                prop_assert!(item.amount > 0 && item.amount <= MAX_ITEM_AMOUNT);
            }

            let amount: u32 = cart.items().iter().map(|i| i.amount).sum();
            prop_assert_eq!(cart.amount(), amount);
            prop_assert!(cart.total_cents() >= 0);
        }
    }
}
