use std::collections::HashMap;

/// Per-blood-type stock counter.
///
/// The ledger is keyed by plain strings rather than [`super::BloodType`]:
/// validation is the responsibility of the calling layer, and this type
/// deliberately accepts any key. Quantities never go below zero; removal is
/// clamped. State is in-memory only and resets on restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryLedger {
    stock: HashMap<String, u32>,
}

impl InventoryLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increase the stock for `blood_type` by `quantity`.
    pub fn add(&mut self, blood_type: &str, quantity: u32) {
        let entry = self.stock.entry(blood_type.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
    }

    /// Decrease the stock for `blood_type` by `quantity`, clamped at zero.
    ///
    /// Removing from an unknown type is a no-op (treated as zero stock).
    pub fn remove(&mut self, blood_type: &str, quantity: u32) {
        if let Some(entry) = self.stock.get_mut(blood_type) {
            *entry = entry.saturating_sub(quantity);
        }
    }

    /// Current stock for `blood_type`, zero for unknown types.
    #[must_use]
    pub fn quantity_of(&self, blood_type: &str) -> u32 {
        self.stock.get(blood_type).copied().unwrap_or(0)
    }

    /// Iterate over all known entries, including those clamped to zero.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.stock.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_has_zero_stock() {
        let ledger = InventoryLedger::new();
        assert_eq!(ledger.quantity_of("O+"), 0);
    }

    #[test]
    fn add_then_remove_leaves_remainder() {
        let mut ledger = InventoryLedger::new();
        ledger.add("O+", 5);
        ledger.remove("O+", 3);
        assert_eq!(ledger.quantity_of("O+"), 2);
    }

    #[test]
    fn removal_is_clamped_at_zero() {
        let mut ledger = InventoryLedger::new();
        ledger.add("O+", 5);
        ledger.remove("O+", 100);
        assert_eq!(ledger.quantity_of("O+"), 0);
    }

    #[test]
    fn removing_unknown_type_is_a_noop() {
        let mut ledger = InventoryLedger::new();
        ledger.remove("AB-", 10);
        assert_eq!(ledger.quantity_of("AB-"), 0);
        assert_eq!(ledger.entries().count(), 0);
    }

    #[test]
    fn keys_are_not_validated() {
        // Validation belongs to the service layer; the ledger accepts any key.
        let mut ledger = InventoryLedger::new();
        ledger.add("not-a-blood-type", 1);
        assert_eq!(ledger.quantity_of("not-a-blood-type"), 1);
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        let mut ledger = InventoryLedger::new();
        ledger.add("B-", u32::MAX);
        ledger.add("B-", 1);
        assert_eq!(ledger.quantity_of("B-"), u32::MAX);
    }
}
