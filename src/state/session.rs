/// Navigation and selection state
///
/// `Session` is the snapshot the application controller threads through
/// every user action: the current page, the phone shown on the detail
/// page, and the compare set. Operations never mutate a snapshot, they
/// return the next one.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use super::compare::CompareSet;
use super::data::Phone;
use crate::error::AppError;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Phones,
    Compare,
    Reviews,
    News,
    PhoneDetail,
}

impl Page {
    /// Pages reachable from the header navigation, with their labels
    pub const NAVIGATION: [(Page, &'static str); 5] = [
        (Page::Home, "Home"),
        (Page::Phones, "Mobiles"),
        (Page::Compare, "Compare"),
        (Page::Reviews, "Reviews"),
        (Page::News, "Latest"),
    ];

    /// Stable identifier of the page
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Phones => "phones",
            Page::Compare => "compare",
            Page::Reviews => "reviews",
            Page::News => "news",
            Page::PhoneDetail => "phone-detail",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Page {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Page::Home),
            "phones" => Ok(Page::Phones),
            "compare" => Ok(Page::Compare),
            "reviews" => Ok(Page::Reviews),
            "news" => Ok(Page::News),
            "phone-detail" => Ok(Page::PhoneDetail),
            other => Err(AppError::InvalidPage(other.to_string())),
        }
    }
}

/// Snapshot of the selection controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    page: Page,
    selected: Option<Arc<Phone>>,
    compare: CompareSet,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn selected(&self) -> Option<&Arc<Phone>> {
        self.selected.as_ref()
    }

    pub fn compare(&self) -> &CompareSet {
        &self.compare
    }

    pub fn is_in_compare(&self, id: &str) -> bool {
        self.compare.contains(id)
    }

    /// Phone to render on the detail page.
    ///
    /// `None` when the detail page is not showing or nothing is selected.
    pub fn detail_phone(&self) -> Option<&Arc<Phone>> {
        match self.page {
            Page::PhoneDetail => self.selected.as_ref(),
            _ => None,
        }
    }

    /// Move to `page`, dropping the selection unless it is the detail page
    pub fn navigate(&self, page: Page) -> Self {
        debug!(from = %self.page, to = %page, "navigate");

        let selected = match page {
            Page::PhoneDetail => self.selected.clone(),
            _ => None,
        };

        Self {
            page,
            selected,
            compare: self.compare.clone(),
        }
    }

    /// Move to the page named by `id`.
    ///
    /// Unknown identifiers are rejected and the current snapshot stays valid.
    pub fn navigate_to(&self, id: &str) -> Result<Self, AppError> {
        let page = id.parse::<Page>()?;
        Ok(self.navigate(page))
    }

    /// Show `phone` on the detail page
    pub fn select_phone(&self, phone: &Arc<Phone>) -> Self {
        debug!(id = %phone.id, "select phone");

        Self {
            page: Page::PhoneDetail,
            selected: Some(Arc::clone(phone)),
            compare: self.compare.clone(),
        }
    }

    /// Add `phone` to the compare set, or remove it if already there
    pub fn toggle_compare(&self, phone: &Arc<Phone>) -> Self {
        let compare = self.compare.toggled(phone);
        debug!(id = %phone.id, compared = compare.len(), "toggle compare");

        Self {
            compare,
            ..self.clone()
        }
    }

    pub fn remove_from_compare(&self, id: &str) -> Self {
        Self {
            compare: self.compare.without(id),
            ..self.clone()
        }
    }

    pub fn clear_compare(&self) -> Self {
        Self {
            compare: CompareSet::new(),
            ..self.clone()
        }
    }
}
