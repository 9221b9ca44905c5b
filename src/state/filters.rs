/// Filter configuration for the phone list
///
/// This struct stores every constraint the user has applied in the
/// filter sidebar. Each edit produces a new configuration that replaces
/// the previous one wholesale, so a value can be kept as a snapshot.

use std::collections::BTreeSet;

/// Default upper bound of the price range
pub const DEFAULT_PRICE_CEILING: u32 = 200_000;

/// RAM labels offered in the filter sidebar
pub const RAM_OPTIONS: [&str; 5] = ["4GB", "6GB", "8GB", "12GB", "16GB"];

/// Storage labels offered in the filter sidebar
pub const STORAGE_OPTIONS: [&str; 5] = ["64GB", "128GB", "256GB", "512GB", "1TB"];

/// Minimum rating thresholds offered in the filter sidebar
pub const RATING_OPTIONS: [u8; 4] = [4, 3, 2, 1];

/// All filter constraints for the phone list
///
/// Empty sets and a zero rating mean "no constraint".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    /// Accepted brand names (exact match)
    pub brand: BTreeSet<String>,

    /// Inclusive price bounds `(min, max)`
    pub price_range: (u32, u32),

    /// Accepted RAM labels, matched as substrings of the phone's RAM
    pub ram: BTreeSet<String>,

    /// Accepted storage labels, matched as substrings of the phone's storage
    pub storage: BTreeSet<String>,

    /// Minimum rating, 0 disables the constraint
    pub rating: u8,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::with_ceiling(DEFAULT_PRICE_CEILING)
    }
}

impl FilterConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unconstrained configuration whose price range tops out at `ceiling`
    pub fn with_ceiling(ceiling: u32) -> Self {
        Self {
            brand: BTreeSet::new(),
            price_range: (0, ceiling),
            ram: BTreeSet::new(),
            storage: BTreeSet::new(),
            rating: 0,
        }
    }

    /// Check if any set-like or rating constraint is active.
    ///
    /// The price range is not considered, matching the chips shown above
    /// the phone list.
    pub fn has_active_chips(&self) -> bool {
        !self.brand.is_empty() || !self.ram.is_empty() || !self.storage.is_empty() || self.rating > 0
    }

    /// Return a copy with `brand` added, or removed if already present
    pub fn toggle_brand(&self, brand: &str) -> Self {
        let mut next = self.clone();
        toggle(&mut next.brand, brand);
        next
    }

    /// Return a copy with `ram` added, or removed if already present
    pub fn toggle_ram(&self, ram: &str) -> Self {
        let mut next = self.clone();
        toggle(&mut next.ram, ram);
        next
    }

    /// Return a copy with `storage` added, or removed if already present
    pub fn toggle_storage(&self, storage: &str) -> Self {
        let mut next = self.clone();
        toggle(&mut next.storage, storage);
        next
    }

    /// Return a copy with a new upper price bound
    pub fn with_max_price(&self, max: u32) -> Self {
        Self {
            price_range: (self.price_range.0.min(max), max),
            ..self.clone()
        }
    }

    /// Return a copy with new inclusive price bounds
    pub fn with_price_range(&self, min: u32, max: u32) -> Self {
        Self {
            price_range: (min.min(max), max.max(min)),
            ..self.clone()
        }
    }

    /// Return a copy with a new minimum rating
    pub fn with_rating(&self, rating: u8) -> Self {
        Self {
            rating: rating.min(5),
            ..self.clone()
        }
    }

    /// Check if this configuration is the unconstrained one for `ceiling`
    pub fn is_unconstrained(&self, ceiling: u32) -> bool {
        *self == Self::with_ceiling(ceiling)
    }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
    if !set.remove(value) {
        set.insert(value.to_string());
    }
}
