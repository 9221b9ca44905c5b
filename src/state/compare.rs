use std::sync::Arc;

use super::data::Phone;

/// Maximum number of phones compared side by side
pub const COMPARE_CAPACITY: usize = 4;

/// Ordered set of phones picked for comparison.
///
/// Entries are unique by id and kept in insertion order. When the set is
/// full, adding another phone evicts the oldest entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSet {
    phones: Vec<Arc<Phone>>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `phone` if present, otherwise append it (evicting the oldest when full)
    pub fn toggled(&self, phone: &Arc<Phone>) -> Self {
        if self.contains(&phone.id) {
            return self.without(&phone.id);
        }

        let skip = (self.phones.len() + 1).saturating_sub(COMPARE_CAPACITY);
        let phones = self
            .phones
            .iter()
            .skip(skip)
            .cloned()
            .chain(std::iter::once(Arc::clone(phone)))
            .collect();

        Self { phones }
    }

    /// Remove the entry with `id`, no-op if absent
    pub fn without(&self, id: &str) -> Self {
        Self {
            phones: self.phones.iter().filter(|p| p.id != id).cloned().collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.phones.iter().any(|p| p.id == id)
    }

    pub fn phones(&self) -> &[Arc<Phone>] {
        &self.phones
    }

    pub fn ids(&self) -> Vec<&str> {
        self.phones.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.phones.len() >= COMPARE_CAPACITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn phone(catalog: &Catalog, id: &str) -> Arc<Phone> {
        catalog.get(id).cloned().unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = Catalog::builtin().unwrap();
        let pixel = phone(&catalog, "3");

        let set = CompareSet::new().toggled(&pixel);
        assert!(set.contains("3"));

        let set = set.toggled(&pixel);
        assert!(set.is_empty());
    }

    #[test]
    fn test_full_set_evicts_oldest() {
        let catalog = Catalog::builtin().unwrap();
        let set = ["1", "2", "3", "4"]
            .iter()
            .fold(CompareSet::new(), |set, id| set.toggled(&phone(&catalog, id)));
        assert!(set.is_full());

        let set = set.toggled(&phone(&catalog, "5"));
        assert_eq!(set.ids(), vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_remove_preserves_order() {
        let catalog = Catalog::builtin().unwrap();
        let set = ["1", "2", "3"]
            .iter()
            .fold(CompareSet::new(), |set, id| set.toggled(&phone(&catalog, id)));

        assert_eq!(set.without("2").ids(), vec!["1", "3"]);
        assert_eq!(set.without("missing"), set);
    }
}
