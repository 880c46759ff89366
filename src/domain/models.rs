/// One of the four purchasable egg units.
///
/// The declaration order is the order in which SKUs appear in order summaries
/// and on the shop screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sku {
    Single,
    Pair,
    Carton10,
    Carton30,
}

impl Sku {
    pub const ALL: [Sku; 4] = [Sku::Single, Sku::Pair, Sku::Carton10, Sku::Carton30];

    /// Label used inside an order summary fragment.
    pub fn summary_label(self) -> &'static str {
        match self {
            Sku::Single => "1 ou",
            Sku::Pair => "2 ouă",
            Sku::Carton10 => "carton 10",
            Sku::Carton30 => "carton 30",
        }
    }

    /// Label shown next to the quantity picker.
    pub fn shop_label(self) -> &'static str {
        match self {
            Sku::Single => "1 ou",
            Sku::Pair => "2 ouă",
            Sku::Carton10 => "Carton 10 ouă",
            Sku::Carton30 => "Carton 30 ouă",
        }
    }

    fn index(self) -> usize {
        match self {
            Sku::Single => 0,
            Sku::Pair => 1,
            Sku::Carton10 => 2,
            Sku::Carton30 => 3,
        }
    }
}

/// Quantities currently picked for each SKU.
///
/// # Examples
///
/// ```
/// use bobita::domain::{QuantitySet, Sku};
///
/// let mut cart = QuantitySet::default();
/// cart.increment(Sku::Single);
/// cart.increment(Sku::Single);
/// cart.increment(Sku::Carton10);
/// assert_eq!(cart.summary(), "2 x 1 ou, 1 x carton 10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuantitySet {
    counts: [u32; 4],
}

impl QuantitySet {
    /// Quantity picked for `sku`.
    ///
    /// # Arguments
    ///
    /// * `sku` - Product to look up
    pub fn get(&self, sku: Sku) -> u32 {
        self.counts[sku.index()]
    }

    /// Adds one unit, saturating at `u32::MAX`.
    pub fn increment(&mut self, sku: Sku) {
        let count = &mut self.counts[sku.index()];
        *count = count.saturating_add(1);
    }

    /// Decrements the quantity, stopping at zero.
    pub fn decrement(&mut self, sku: Sku) {
        let count = &mut self.counts[sku.index()];
        *count = count.saturating_sub(1);
    }

    /// Sets every quantity back to zero.
    pub fn clear(&mut self) {
        self.counts = [0; 4];
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Builds the human-readable order summary.
    ///
    /// One `"<count> x <label>"` fragment per non-zero SKU, in SKU order,
    /// joined by `", "`. Returns an empty string for an empty cart.
    pub fn summary(&self) -> String {
        Sku::ALL
            .iter()
            .filter(|&&sku| self.get(sku) > 0)
            .map(|&sku| format!("{} x {}", self.get(sku), sku.summary_label()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Append-only history of completed orders for the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLog {
    entries: Vec<String>,
}

impl OrderLog {
    pub(crate) fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    /// All logged entries, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_never_negative() {
        let mut cart = QuantitySet::default();
        cart.decrement(Sku::Pair);
        assert_eq!(cart.get(Sku::Pair), 0);

        cart.increment(Sku::Pair);
        cart.increment(Sku::Pair);
        cart.decrement(Sku::Pair);
        cart.decrement(Sku::Pair);
        cart.decrement(Sku::Pair);
        assert_eq!(cart.get(Sku::Pair), 0);

        cart.increment(Sku::Pair);
        assert_eq!(cart.get(Sku::Pair), 1);
    }

    #[test]
    fn test_increment_has_no_upper_bound() {
        let mut cart = QuantitySet::default();
        for _ in 0..500 {
            cart.increment(Sku::Carton30);
        }
        assert_eq!(cart.get(Sku::Carton30), 500);
        assert_eq!(cart.summary(), "500 x carton 30");
    }

    #[test]
    fn test_empty_summary_is_blank() {
        let cart = QuantitySet::default();
        assert!(cart.is_empty());
        assert_eq!(cart.summary(), "");
    }

    #[test]
    fn test_summary_fixed_order_skips_zero() {
        let mut cart = QuantitySet::default();
        // Insert in reverse order; output order must not depend on it
        cart.increment(Sku::Carton30);
        cart.increment(Sku::Carton10);
        cart.increment(Sku::Single);
        cart.increment(Sku::Single);
        assert_eq!(cart.summary(), "2 x 1 ou, 1 x carton 10, 1 x carton 30");

        cart.increment(Sku::Pair);
        assert_eq!(
            cart.summary(),
            "2 x 1 ou, 1 x 2 ouă, 1 x carton 10, 1 x carton 30"
        );
    }

    #[test]
    fn test_clear_resets_all() {
        let mut cart = QuantitySet::default();
        for sku in Sku::ALL {
            cart.increment(sku);
            cart.increment(sku);
        }
        cart.clear();
        assert!(cart.is_empty());
        for sku in Sku::ALL {
            assert_eq!(cart.get(sku), 0);
        }
    }

    #[test]
    fn test_order_log_appends_in_order() {
        let mut log = OrderLog::default();
        assert!(log.is_empty());
        log.push("first".to_string());
        log.push("second".to_string());
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["first", "second"]);
    }
}
