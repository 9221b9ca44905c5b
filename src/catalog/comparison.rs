/// Side-by-side comparison table
///
/// The table is driven by a fixed list of categories, each holding typed
/// field extractors over `Phone`. A "Key Features" section lists the union
/// of every compared phone's features and marks which phone has each one.

use std::collections::HashSet;
use std::sync::Arc;

use crate::format;
use crate::state::compare::CompareSet;
use crate::state::data::Phone;

/// Number of candidate phones previewed in the "add another phone" card
pub const ADDITION_PREVIEW: usize = 3;

/// A single row of the comparison table
pub struct Field {
    pub label: &'static str,
    pub extract: fn(&Phone) -> String,
}

/// A titled group of rows
pub struct Category {
    pub title: &'static str,
    pub fields: &'static [Field],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        title: "Basic Info",
        fields: &[
            Field { label: "Model", extract: |p| p.name.clone() },
            Field { label: "Brand", extract: |p| p.brand.clone() },
            Field { label: "Price", extract: |p| format::price(&p.price.currency, p.price.current) },
            Field { label: "Rating", extract: |p| format::rating(p.rating) },
            Field { label: "Availability", extract: |p| p.availability.label().to_string() },
        ],
    },
    Category {
        title: "Display",
        fields: &[
            Field { label: "Size", extract: |p| p.specifications.display.size.clone() },
            Field { label: "Resolution", extract: |p| p.specifications.display.resolution.clone() },
            Field { label: "Type", extract: |p| p.specifications.display.kind.clone() },
        ],
    },
    Category {
        title: "Performance",
        fields: &[
            Field { label: "Processor", extract: |p| p.specifications.processor.clone() },
            Field { label: "RAM", extract: |p| p.specifications.ram.clone() },
            Field { label: "Storage", extract: |p| p.specifications.storage.clone() },
            Field { label: "Operating System", extract: |p| p.specifications.os.clone() },
        ],
    },
    Category {
        title: "Camera",
        fields: &[
            Field { label: "Rear Camera", extract: |p| p.specifications.camera.rear.clone() },
            Field { label: "Front Camera", extract: |p| p.specifications.camera.front.clone() },
        ],
    },
    Category {
        title: "Battery & Connectivity",
        fields: &[
            Field { label: "Battery", extract: |p| p.specifications.battery.clone() },
            Field { label: "Network", extract: |p| p.specifications.network.join(", ") },
        ],
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: &'static str,
    /// One cell per compared phone, in compare order
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub feature: String,
    /// Whether each compared phone has the feature, in compare order
    pub present: Vec<bool>,
}

/// Rendered comparison of the phones in a compare set
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    pub columns: Vec<Arc<Phone>>,
    pub sections: Vec<Section>,
    pub features: Vec<FeatureRow>,
}

impl ComparisonTable {
    pub fn build(compare: &CompareSet) -> Self {
        let columns = compare.phones().to_vec();

        let sections = CATEGORIES
            .iter()
            .map(|category| Section {
                title: category.title,
                rows: category
                    .fields
                    .iter()
                    .map(|field| Row {
                        label: field.label,
                        cells: columns.iter().map(|phone| (field.extract)(phone)).collect(),
                    })
                    .collect(),
            })
            .collect();

        let mut seen = HashSet::new();
        let features = columns
            .iter()
            .flat_map(|phone| phone.features.iter())
            .filter(|feature| seen.insert(feature.as_str()))
            .map(|feature| FeatureRow {
                feature: feature.clone(),
                present: columns
                    .iter()
                    .map(|phone| phone.features.contains(feature))
                    .collect(),
            })
            .collect();

        ComparisonTable {
            columns,
            sections,
            features,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Phones that can still be added to the compare set
#[derive(Debug, Clone, PartialEq)]
pub struct Additions {
    /// First few candidates, in catalog order
    pub preview: Vec<Arc<Phone>>,
    /// Total number of candidates
    pub remaining: usize,
}

impl Additions {
    pub fn compute(catalog: &[Arc<Phone>], compare: &CompareSet) -> Self {
        let candidates: Vec<&Arc<Phone>> = catalog
            .iter()
            .filter(|phone| !compare.contains(&phone.id))
            .collect();

        Additions {
            preview: candidates.iter().take(ADDITION_PREVIEW).map(|p| Arc::clone(p)).collect(),
            remaining: candidates.len(),
        }
    }

    /// More candidates exist than the preview shows
    pub fn has_more(&self) -> bool {
        self.remaining > self.preview.len()
    }
}
