/// Shared data structures for the catalog
///
/// These structs represent the phone records that flow from the
/// catalog source into the query engine and the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a single phone in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    /// Unique catalog ID
    pub id: String,
    /// Model name (e.g., "Google Pixel 8 Pro")
    pub name: String,
    pub brand: String,
    /// Image reference (never fetched, shown as a placeholder)
    pub image: String,
    pub price: Price,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    pub review_count: u32,
    pub specifications: Specifications,
    /// Capability labels (e.g., "Wireless Charging")
    pub features: Vec<String>,
    /// Available colors, the first one is selected by default
    pub colors: Vec<String>,
    pub availability: Availability,
    pub launch_date: NaiveDate,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl Phone {
    /// Default color shown on the detail page
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }
}

/// Price of a phone in whole currency units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub current: u32,
    /// Price before discount, always >= current when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<u32>,
    /// Currency symbol (e.g., "₹")
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    pub display: Display,
    pub processor: String,
    /// RAM label (e.g., "12GB")
    pub ram: String,
    /// Storage label (e.g., "256GB")
    pub storage: String,
    pub camera: Camera,
    pub battery: String,
    pub os: String,
    pub network: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    pub size: String,
    pub resolution: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub rear: String,
    pub front: String,
}

/// Sales status of a phone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Availability {
    Available,
    ComingSoon,
    Discontinued,
}

impl Availability {
    /// Short display label
    pub fn label(self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::ComingSoon => "Coming Soon",
            Availability::Discontinued => "Discontinued",
        }
    }

    /// Label shown next to the price on the detail page
    pub fn stock_label(self) -> &'static str {
        match self {
            Availability::Available => "In Stock",
            other => other.label(),
        }
    }
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
