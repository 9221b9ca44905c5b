/// Catalog source and query engine
///
/// This module owns the read-only phone collection and everything derived
/// from it:
/// - Loading and validating catalogs (this file)
/// - Search, filters and sorting (query.rs)
/// - The side-by-side comparison table (comparison.rs)

pub mod comparison;
pub mod query;

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::error::CatalogError;
use crate::state::data::Phone;

/// Catalog shipped with the application
const BUILTIN_CATALOG: &str = include_str!("fixture.json");

/// Number of phones in the home page hero section
const FEATURED_COUNT: usize = 3;
/// Number of phones in the home page trending grid
const TRENDING_COUNT: usize = 6;

/// Where a catalog was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Builtin => f.write_str("built-in catalog"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The Catalog holds every phone available to browse.
/// Phones are shared by reference with the session and query results,
/// and the collection is never modified after loading.
#[derive(Debug, Clone)]
pub struct Catalog {
    phones: Vec<Arc<Phone>>,
    source: CatalogSource,
}

impl Catalog {
    /// Load the catalog embedded in the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG, CatalogSource::Builtin)
    }

    /// A catalog with no phones
    pub fn empty() -> Self {
        Catalog {
            phones: Vec::new(),
            source: CatalogSource::Builtin,
        }
    }

    /// Parse and validate a catalog from its JSON representation
    pub fn from_json(json: &str, source: CatalogSource) -> Result<Self, CatalogError> {
        let phones: Vec<Phone> = serde_json::from_str(json)?;
        Self::from_phones(phones, source)
    }

    /// Build a catalog from phone records, enforcing catalog invariants
    pub fn from_phones(phones: Vec<Phone>, source: CatalogSource) -> Result<Self, CatalogError> {
        validate(&phones)?;

        Ok(Catalog {
            phones: phones.into_iter().map(Arc::new).collect(),
            source,
        })
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json(&json, CatalogSource::File(path.to_path_buf()))?;
        info!(path = %path.display(), phones = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog file without blocking the UI thread
    pub async fn load_async(path: PathBuf) -> Result<Self, CatalogError> {
        let json = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;

        let catalog = Self::from_json(&json, CatalogSource::File(path.clone()))?;
        info!(path = %path.display(), phones = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// All phones in catalog order
    pub fn phones(&self) -> &[Arc<Phone>] {
        &self.phones
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Look up a phone by id
    pub fn get(&self, id: &str) -> Option<&Arc<Phone>> {
        self.phones.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Distinct brands, in order of first appearance
    pub fn brands(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.phones
            .iter()
            .map(|p| p.brand.as_str())
            .filter(|brand| seen.insert(*brand))
            .collect()
    }

    /// Phones highlighted in the home page hero
    pub fn featured(&self) -> &[Arc<Phone>] {
        &self.phones[..self.phones.len().min(FEATURED_COUNT)]
    }

    /// Phones listed in the home page trending grid
    pub fn trending(&self) -> &[Arc<Phone>] {
        &self.phones[..self.phones.len().min(TRENDING_COUNT)]
    }
}

/// Check the invariants every catalog must hold
fn validate(phones: &[Phone]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for phone in phones {
        if !ids.insert(phone.id.as_str()) {
            return Err(CatalogError::DuplicateId(phone.id.clone()));
        }

        if let Some(original) = phone.price.original {
            if original == 0 {
                return Err(CatalogError::ZeroOriginalPrice { id: phone.id.clone() });
            }
            if original < phone.price.current {
                return Err(CatalogError::OriginalBelowCurrent {
                    id: phone.id.clone(),
                    original,
                    current: phone.price.current,
                });
            }
        }

        if phone.colors.is_empty() {
            return Err(CatalogError::NoColors { id: phone.id.clone() });
        }

        if !(0.0..=5.0).contains(&phone.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: phone.id.clone(),
                rating: phone.rating,
            });
        }
    }

    Ok(())
}
