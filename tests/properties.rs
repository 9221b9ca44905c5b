//! Property-based tests for the query engine and the compare set.
//!
//! Phones are generated by varying the filterable fields of the
//! built-in records, so every generated catalog stays valid.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use proptest::prelude::*;

use phone_catalog::catalog::query::{matches_filters, matches_search};
use phone_catalog::state::filters::{RAM_OPTIONS, STORAGE_OPTIONS};
use phone_catalog::{query, Catalog, CatalogSource, CompareSet, FilterConfig, Phone, SortKey, COMPARE_CAPACITY};

// Includes brands the built-in catalog does not carry
const BRAND_OPTIONS: [&str; 8] = [
    "Apple", "Samsung", "Google", "OnePlus", "Xiaomi", "Vivo", "Nothing", "Motorola",
];

// =============================================================================
// Proptest strategies
// =============================================================================

/// Vary the fields the sidebar and the sort keys look at.
fn arb_phone() -> impl Strategy<Value = Phone> {
    (
        0usize..6,
        prop::sample::select(BRAND_OPTIONS.to_vec()),
        prop::sample::select(RAM_OPTIONS.to_vec()),
        prop::sample::select(STORAGE_OPTIONS.to_vec()),
        1_000u32..=250_000,
        0u32..=50,
        0u32..=2_000,
        0u32..=10_000,
    )
        .prop_map(|(template, brand, ram, storage, current, rating, days, reviews)| {
            let catalog = Catalog::builtin().unwrap();
            let mut phone = Phone::clone(&catalog.phones()[template]);
            phone.brand = brand.to_string();
            phone.specifications.ram = ram.to_string();
            phone.specifications.storage = storage.to_string();
            phone.price.current = current;
            phone.price.original = None;
            phone.rating = rating as f32 / 10.0;
            phone.review_count = reviews;
            phone.launch_date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(days.into());
            phone
        })
}

/// Generate a catalog with unique ids.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(arb_phone(), 0..24).prop_map(|phones| {
        let phones = phones
            .into_iter()
            .enumerate()
            .map(|(index, mut phone)| {
                phone.id = format!("p{}", index);
                phone
            })
            .collect();
        Catalog::from_phones(phones, CatalogSource::Builtin).unwrap()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterConfig> {
    (
        prop::sample::subsequence(BRAND_OPTIONS.to_vec(), 0..=3),
        prop::sample::subsequence(RAM_OPTIONS.to_vec(), 0..=2),
        prop::sample::subsequence(STORAGE_OPTIONS.to_vec(), 0..=2),
        0u32..=250_000,
        0u32..=250_000,
        0u8..=5,
    )
        .prop_map(|(brands, rams, storages, low, high, rating)| {
            let filters = brands
                .into_iter()
                .fold(FilterConfig::default(), |f, brand| f.toggle_brand(brand));
            let filters = rams.into_iter().fold(filters, |f, ram| f.toggle_ram(ram));
            let filters = storages
                .into_iter()
                .fold(filters, |f, storage| f.toggle_storage(storage));
            filters.with_price_range(low, high).with_rating(rating)
        })
}

fn arb_sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_search() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("pro".to_string()),
        Just("SNAPDRAGON".to_string()),
        Just("5g".to_string()),
        "[a-z]{1,3}",
    ]
}

// =============================================================================
// Query properties
// =============================================================================

proptest! {
    #[test]
    fn result_is_exactly_the_matching_phones(
        catalog in arb_catalog(),
        search in arb_search(),
        filters in arb_filters(),
        sort in arb_sort_key(),
    ) {
        let result = query(catalog.phones(), &search, &filters, sort);
        let needle = search.to_lowercase();

        let expected: HashSet<&str> = catalog
            .phones()
            .iter()
            .filter(|p| matches_search(p, &needle) && matches_filters(p, &filters))
            .map(|p| p.id.as_str())
            .collect();
        let actual: HashSet<&str> = result.iter().map(|p| p.id.as_str()).collect();

        prop_assert_eq!(result.len(), actual.len());
        prop_assert_eq!(actual, expected);

        for phone in &result {
            prop_assert!(phone.price.current >= filters.price_range.0);
            prop_assert!(phone.price.current <= filters.price_range.1);
            prop_assert!(filters.brand.is_empty() || filters.brand.contains(&phone.brand));
            prop_assert!(filters.rating == 0 || phone.rating >= f32::from(filters.rating));
            prop_assert!(
                filters.ram.is_empty()
                    || filters.ram.iter().any(|ram| phone.specifications.ram.contains(ram.as_str()))
            );
            prop_assert!(
                filters.storage.is_empty()
                    || filters
                        .storage
                        .iter()
                        .any(|storage| phone.specifications.storage.contains(storage.as_str()))
            );
            if !needle.is_empty() {
                let haystacks = [&phone.name, &phone.brand, &phone.specifications.processor]
                    .into_iter()
                    .chain(phone.features.iter());
                let mut fields = haystacks.map(|field| field.to_lowercase());
                prop_assert!(fields.any(|field| field.contains(&needle)));
            }
        }
    }

    #[test]
    fn unconstrained_query_returns_everything(catalog in arb_catalog(), sort in arb_sort_key()) {
        let result = query(catalog.phones(), "", &FilterConfig::with_ceiling(250_000), sort);
        prop_assert_eq!(result.len(), catalog.len());
    }

    #[test]
    fn price_sorts_are_monotonic(catalog in arb_catalog(), filters in arb_filters()) {
        let ascending = query(catalog.phones(), "", &filters, SortKey::PriceLowHigh);
        for pair in ascending.windows(2) {
            prop_assert!(pair[0].price.current <= pair[1].price.current);
        }

        let descending = query(catalog.phones(), "", &filters, SortKey::PriceHighLow);
        for pair in descending.windows(2) {
            prop_assert!(pair[0].price.current >= pair[1].price.current);
        }
    }

    #[test]
    fn ties_keep_catalog_order(catalog in arb_catalog(), sort in arb_sort_key()) {
        let position = |phone: &Arc<Phone>| {
            catalog.phones().iter().position(|p| p.id == phone.id).unwrap()
        };

        let result = query(catalog.phones(), "", &FilterConfig::with_ceiling(250_000), sort);
        for pair in result.windows(2) {
            let tied = match sort {
                SortKey::Popularity => pair[0].review_count == pair[1].review_count,
                SortKey::PriceLowHigh | SortKey::PriceHighLow => {
                    pair[0].price.current == pair[1].price.current
                }
                SortKey::Rating => pair[0].rating == pair[1].rating,
                SortKey::Newest => pair[0].launch_date == pair[1].launch_date,
            };
            if tied {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }
}

// =============================================================================
// Compare set properties
// =============================================================================

proptest! {
    #[test]
    fn compare_set_stays_bounded_and_unique(
        catalog in arb_catalog(),
        picks in prop::collection::vec(0usize..24, 0..40),
    ) {
        prop_assume!(!catalog.is_empty());

        let compare = picks.iter().fold(CompareSet::new(), |set, &pick| {
            set.toggled(&catalog.phones()[pick % catalog.len()])
        });

        let ids: HashSet<&str> = compare.ids().into_iter().collect();
        prop_assert!(compare.len() <= COMPARE_CAPACITY);
        prop_assert_eq!(ids.len(), compare.len());
    }

    #[test]
    fn toggling_twice_restores_membership(
        catalog in arb_catalog(),
        seed in prop::collection::vec(0usize..24, 0..3),
        pick in 0usize..24,
    ) {
        prop_assume!(!catalog.is_empty());
        let phones = catalog.phones();

        // Fewer than the capacity, so neither toggle evicts anything.
        let compare = seed.iter().fold(CompareSet::new(), |set, &i| {
            let phone = &phones[i % phones.len()];
            if set.contains(&phone.id) { set } else { set.toggled(phone) }
        });

        let phone = &phones[pick % phones.len()];
        let twice = compare.toggled(phone).toggled(phone);

        prop_assert_eq!(twice.contains(&phone.id), compare.contains(&phone.id));
        prop_assert_eq!(twice.len(), compare.len());
    }
}
