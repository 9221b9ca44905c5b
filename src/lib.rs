//! Phone catalog core: catalog loading, search/filter/sort queries, and the
//! navigation + compare-set state machine driving the desktop UI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod state;

pub use catalog::comparison::{Additions, ComparisonTable};
pub use catalog::query::{query, SortKey};
pub use catalog::{Catalog, CatalogSource};
pub use error::{AppError, CatalogError, SettingsError};
pub use state::compare::{CompareSet, COMPARE_CAPACITY};
pub use state::data::{Availability, Phone};
pub use state::filters::FilterConfig;
pub use state::session::{Page, Session};
