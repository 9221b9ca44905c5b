/// Catalog query engine
///
/// Derives the visible, ordered subset of the catalog from the search
/// text, the filter configuration and the sort key.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::state::data::Phone;
use crate::state::filters::FilterConfig;

/// Ordering applied to the filtered phones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most reviewed first
    #[default]
    Popularity,
    PriceLowHigh,
    PriceHighLow,
    /// Highest rated first
    Rating,
    /// Most recently launched first
    Newest,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Popularity,
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::Rating,
        SortKey::Newest,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceLowHigh => "price-low-high",
            SortKey::PriceHighLow => "price-high-low",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Popularity => "Most Popular",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest First",
        }
    }

    fn compare(self, a: &Phone, b: &Phone) -> Ordering {
        match self {
            SortKey::Popularity => b.review_count.cmp(&a.review_count),
            SortKey::PriceLowHigh => a.price.current.cmp(&b.price.current),
            SortKey::PriceHighLow => b.price.current.cmp(&a.price.current),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Newest => b.launch_date.cmp(&a.launch_date),
        }
    }
}

// The pick list renders sort keys through Display
impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.id() == s)
            .ok_or_else(|| format!("unknown sort key: {}", s))
    }
}

/// Filter and sort `phones`.
///
/// Returns a new sequence; ties keep their catalog order.
pub fn query(
    phones: &[Arc<Phone>],
    search_text: &str,
    filters: &FilterConfig,
    sort_key: SortKey,
) -> Vec<Arc<Phone>> {
    let needle = search_text.to_lowercase();

    let mut visible: Vec<Arc<Phone>> = phones
        .iter()
        .filter(|phone| matches_search(phone, &needle) && matches_filters(phone, filters))
        .cloned()
        .collect();

    visible.sort_by(|a, b| sort_key.compare(a, b));
    visible
}

/// Case-insensitive match on name, brand, processor or any feature.
/// `needle` must already be lowercase; an empty needle matches everything.
pub fn matches_search(phone: &Phone, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&phone.name)
        || contains(&phone.brand)
        || contains(&phone.specifications.processor)
        || phone.features.iter().any(|feature| contains(feature))
}

/// Check every sidebar constraint
pub fn matches_filters(phone: &Phone, filters: &FilterConfig) -> bool {
    let (min_price, max_price) = filters.price_range;

    (filters.brand.is_empty() || filters.brand.contains(&phone.brand))
        && (min_price..=max_price).contains(&phone.price.current)
        && (filters.ram.is_empty()
            || filters.ram.iter().any(|ram| phone.specifications.ram.contains(ram.as_str())))
        && (filters.storage.is_empty()
            || filters
                .storage
                .iter()
                .any(|storage| phone.specifications.storage.contains(storage.as_str())))
        && (filters.rating == 0 || phone.rating >= f32::from(filters.rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn names(phones: &[Arc<Phone>]) -> Vec<&str> {
        phones.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_keeps_everything() {
        let catalog = Catalog::builtin().unwrap();
        let result = query(catalog.phones(), "", &FilterConfig::default(), SortKey::Popularity);

        assert_eq!(result.len(), catalog.len());
        assert_eq!(result[0].name, "iPhone 15 Pro Max");
        assert_eq!(result[5].name, "Vivo X100 Pro");
    }

    #[test]
    fn test_price_sorting() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default();

        let ascending = query(catalog.phones(), "", &filters, SortKey::PriceLowHigh);
        assert_eq!(ascending.first().unwrap().name, "OnePlus 12");
        assert_eq!(ascending.last().unwrap().name, "iPhone 15 Pro Max");

        let descending = query(catalog.phones(), "", &filters, SortKey::PriceHighLow);
        assert_eq!(descending.first().unwrap().price.current, 159_900);
        assert_eq!(descending.last().unwrap().price.current, 64_999);
    }

    #[test]
    fn test_rating_and_newest_sorting() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default();

        let by_rating = query(catalog.phones(), "", &filters, SortKey::Rating);
        assert_eq!(by_rating[0].rating, 4.8);
        assert_eq!(by_rating[5].rating, 4.3);

        let newest = query(catalog.phones(), "", &filters, SortKey::Newest);
        assert_eq!(
            names(&newest),
            vec![
                "Xiaomi 14 Ultra",
                "Samsung Galaxy S24 Ultra",
                "OnePlus 12",
                "Vivo X100 Pro",
                "Google Pixel 8 Pro",
                "iPhone 15 Pro Max",
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = Catalog::builtin().unwrap();
        let result = query(catalog.phones(), "PIXEL", &FilterConfig::default(), SortKey::Popularity);

        assert_eq!(names(&result), vec!["Google Pixel 8 Pro"]);
    }

    #[test]
    fn test_search_matches_processor_and_features() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default();

        let snapdragon = query(catalog.phones(), "snapdragon", &filters, SortKey::Popularity);
        assert_eq!(snapdragon.len(), 3);

        let s_pen = query(catalog.phones(), "s pen", &filters, SortKey::Popularity);
        assert_eq!(names(&s_pen), vec!["Samsung Galaxy S24 Ultra"]);

        let nothing = query(catalog.phones(), "flip phone", &filters, SortKey::Popularity);
        assert!(nothing.is_empty());
    }

    #[test]
    fn test_brand_filter() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default().toggle_brand("Apple").toggle_brand("Vivo");

        let result = query(catalog.phones(), "", &filters, SortKey::PriceLowHigh);
        assert_eq!(names(&result), vec!["Vivo X100 Pro", "iPhone 15 Pro Max"]);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default().with_price_range(64_999, 99_999);

        let result = query(catalog.phones(), "", &filters, SortKey::PriceLowHigh);
        assert_eq!(
            names(&result),
            vec!["OnePlus 12", "Vivo X100 Pro", "Xiaomi 14 Ultra"]
        );
    }

    #[test]
    fn test_ram_and_storage_filters() {
        let catalog = Catalog::builtin().unwrap();

        let ram = FilterConfig::default().toggle_ram("16GB");
        let result = query(catalog.phones(), "", &ram, SortKey::Popularity);
        assert_eq!(names(&result), vec!["Xiaomi 14 Ultra", "Vivo X100 Pro"]);

        let storage = FilterConfig::default().toggle_storage("128GB");
        let result = query(catalog.phones(), "", &storage, SortKey::Popularity);
        assert_eq!(names(&result), vec!["Google Pixel 8 Pro"]);
    }

    #[test]
    fn test_rating_threshold() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default().with_rating(4);

        let result = query(catalog.phones(), "", &filters, SortKey::Popularity);
        assert_eq!(result.len(), 6);

        let filters = FilterConfig::default().with_rating(5);
        assert!(query(catalog.phones(), "", &filters, SortKey::Popularity).is_empty());
    }

    #[test]
    fn test_predicates_combine() {
        let catalog = Catalog::builtin().unwrap();
        let filters = FilterConfig::default()
            .toggle_ram("12GB")
            .with_max_price(110_000);

        let result = query(catalog.phones(), "wireless", &filters, SortKey::PriceHighLow);
        assert_eq!(names(&result), vec!["Google Pixel 8 Pro", "OnePlus 12"]);
    }

    #[test]
    fn test_query_leaves_catalog_untouched() {
        let catalog = Catalog::builtin().unwrap();
        let before: Vec<String> = catalog.phones().iter().map(|p| p.id.clone()).collect();

        let _ = query(catalog.phones(), "", &FilterConfig::default(), SortKey::PriceLowHigh);

        let after: Vec<String> = catalog.phones().iter().map(|p| p.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_key_ids() {
        for key in SortKey::ALL {
            assert_eq!(key.id().parse::<SortKey>().unwrap(), key);
        }
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(
            serde_json::to_string(&SortKey::PriceLowHigh).unwrap(),
            "\"price-low-high\""
        );
    }
}
