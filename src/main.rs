use iced::widget::{column, container, stack};
use iced::{alignment, Element, Length, Task, Theme};
use rfd::FileDialog;
use std::sync::Arc;
use tracing::{error, info, warn};

use phone_catalog::config::Settings;
use phone_catalog::{logging, query, Catalog, FilterConfig, Page, Phone, Session, SortKey};

mod ui;

use ui::{DetailTab, ViewMode};

/// Main application state
struct PhoneCatalog {
    /// The read-only phone collection
    catalog: Catalog,
    /// Page, selected phone and compare set
    session: Session,
    settings: Settings,
    /// Text currently typed in the header search box
    search_input: String,
    /// Last submitted search, applied to the phone list
    search_query: String,
    filters: FilterConfig,
    sort: SortKey,
    view_mode: ViewMode,
    show_filters: bool,
    detail_tab: DetailTab,
    /// Color chip picked on the detail page
    selected_color: Option<String>,
    /// Status message to display to the user
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Navigate(Page),
    SearchInput(String),
    SearchSubmitted,
    SelectPhone(String),
    ToggleCompare(String),
    RemoveFromCompare(String),
    ClearCompare,
    ToggleBrand(String),
    ToggleRam(String),
    ToggleStorage(String),
    MaxPriceChanged(u32),
    RatingSelected(u8),
    ClearFilters,
    SortChanged(SortKey),
    ViewModeChanged(ViewMode),
    ToggleFilterPanel,
    DetailTabSelected(DetailTab),
    ColorSelected(String),
    /// User clicked the "Open Catalog" button
    OpenCatalog,
    /// Background catalog load completed
    CatalogLoaded(Result<Catalog, String>),
    DismissStatus,
}

impl PhoneCatalog {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut status = None;

        let catalog = match settings.catalog_path.as_deref().map(Catalog::load) {
            Some(Ok(catalog)) => catalog,
            Some(Err(e)) => {
                warn!(error = %e, "falling back to the built-in catalog");
                status = Some(format!("Could not load catalog: {}", e));
                builtin_catalog()
            }
            None => builtin_catalog(),
        };

        info!(phones = catalog.len(), source = %catalog.source(), "phone catalog initialized");

        let app = PhoneCatalog {
            catalog,
            session: Session::new(),
            search_input: String::new(),
            search_query: String::new(),
            filters: FilterConfig::with_ceiling(settings.price_ceiling),
            sort: settings.default_sort,
            view_mode: ViewMode::Grid,
            show_filters: true,
            detail_tab: DetailTab::Specifications,
            selected_color: None,
            status,
            settings,
        };

        (app, Task::none())
    }

    /// Look up a phone referenced by a message
    fn phone(&self, id: &str) -> Option<Arc<Phone>> {
        let phone = self.catalog.get(id).cloned();
        if phone.is_none() {
            warn!(id, "message references a phone missing from the catalog");
        }
        phone
    }

    /// Swap in a freshly loaded catalog.
    ///
    /// Selection, compare set, search and filters all refer to the old
    /// phones, so they start over.
    fn replace_catalog(&mut self, catalog: Catalog) {
        info!(phones = catalog.len(), source = %catalog.source(), "catalog replaced");
        self.catalog = catalog;
        self.session = Session::new().navigate(Page::Phones);
        self.filters = FilterConfig::with_ceiling(self.settings.price_ceiling);
        self.search_input.clear();
        self.search_query.clear();
        self.selected_color = None;
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => {
                self.session = self.session.navigate(page);
            }
            Message::SearchInput(input) => {
                self.search_input = input;
            }
            Message::SearchSubmitted => {
                self.search_query = self.search_input.clone();
                info!(query = %self.search_query, "search");
                self.session = self.session.navigate(Page::Phones);
            }
            Message::SelectPhone(id) => {
                if let Some(phone) = self.phone(&id) {
                    self.selected_color = phone.default_color().map(str::to_string);
                    self.detail_tab = DetailTab::Specifications;
                    self.session = self.session.select_phone(&phone);
                }
            }
            Message::ToggleCompare(id) => {
                if let Some(phone) = self.phone(&id) {
                    self.session = self.session.toggle_compare(&phone);
                }
            }
            Message::RemoveFromCompare(id) => {
                self.session = self.session.remove_from_compare(&id);
            }
            Message::ClearCompare => {
                self.session = self.session.clear_compare();
            }
            Message::ToggleBrand(brand) => {
                self.filters = self.filters.toggle_brand(&brand);
            }
            Message::ToggleRam(ram) => {
                self.filters = self.filters.toggle_ram(&ram);
            }
            Message::ToggleStorage(storage) => {
                self.filters = self.filters.toggle_storage(&storage);
            }
            Message::MaxPriceChanged(max) => {
                self.filters = self.filters.with_max_price(max);
            }
            Message::RatingSelected(rating) => {
                self.filters = self.filters.with_rating(rating);
            }
            Message::ClearFilters => {
                self.filters = FilterConfig::with_ceiling(self.settings.price_ceiling);
            }
            Message::SortChanged(sort) => {
                self.sort = sort;
            }
            Message::ViewModeChanged(mode) => {
                self.view_mode = mode;
            }
            Message::ToggleFilterPanel => {
                self.show_filters = !self.show_filters;
            }
            Message::DetailTabSelected(tab) => {
                self.detail_tab = tab;
            }
            Message::ColorSelected(color) => {
                self.selected_color = Some(color);
            }
            Message::OpenCatalog => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Open Phone Catalog")
                    .add_filter("JSON catalog", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = Some(format!("Loading {}...", path.display()));

                    return Task::perform(
                        async move { Catalog::load_async(path).await.map_err(|e| e.to_string()) },
                        Message::CatalogLoaded,
                    );
                }
            }
            Message::CatalogLoaded(Ok(catalog)) => {
                self.status = Some(format!(
                    "Loaded {} phones from {}.",
                    catalog.len(),
                    catalog.source()
                ));
                self.replace_catalog(catalog);
            }
            Message::CatalogLoaded(Err(e)) => {
                error!(error = %e, "catalog import failed");
                self.status = Some(format!("Could not load catalog: {}", e));
            }
            Message::DismissStatus => {
                self.status = None;
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match self.session.page() {
            Page::Home => ui::home::view(&self.catalog, self.session.compare()),
            Page::Phones => {
                let phones = query(
                    self.catalog.phones(),
                    &self.search_query,
                    &self.filters,
                    self.sort,
                );

                ui::phone_list::view(ui::phone_list::ListView {
                    phones,
                    search_query: &self.search_query,
                    filters: &self.filters,
                    brands: self.catalog.brands(),
                    price_ceiling: self.settings.price_ceiling,
                    sort: self.sort,
                    view_mode: self.view_mode,
                    show_filters: self.show_filters,
                    compare: self.session.compare(),
                })
            }
            Page::PhoneDetail => match self.session.detail_phone() {
                Some(phone) => ui::detail::view(
                    phone,
                    self.session.is_in_compare(&phone.id),
                    self.detail_tab,
                    self.selected_color.as_deref(),
                ),
                None => ui::detail::nothing_selected(),
            },
            Page::Compare => ui::compare::view(self.catalog.phones(), self.session.compare()),
            Page::Reviews => ui::placeholder::view(
                "Reviews Coming Soon",
                "We're working on bringing you detailed reviews.",
            ),
            Page::News => ui::placeholder::view(
                "Latest News Coming Soon",
                "Stay tuned for the latest mobile technology news.",
            ),
        };

        let content = column![
            ui::header::view(self.session.page(), &self.search_input, self.status.as_deref()),
            container(page).width(Length::Fill).height(Length::Fill),
        ];

        let compared = self.session.compare().len();
        if compared > 0 && self.session.page() != Page::Compare {
            let badge = container(ui::compare::badge(compared))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(24);

            stack![content, badge].into()
        } else {
            content.into()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Catalog shipped with the binary, or an empty one if it fails validation
fn builtin_catalog() -> Catalog {
    Catalog::builtin().unwrap_or_else(|e| {
        error!(error = %e, "built-in catalog is invalid");
        Catalog::empty()
    })
}

fn main() -> iced::Result {
    let loaded = Settings::load_default_location();
    let settings = loaded.as_ref().map(Clone::clone).unwrap_or_default();

    logging::init(&settings.log_filter);
    if let Err(e) = &loaded {
        warn!(error = %e, "ignoring settings file");
    }

    iced::application("Phone Catalog", PhoneCatalog::update, PhoneCatalog::view)
        .theme(PhoneCatalog::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || PhoneCatalog::new(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phone_catalog::CatalogSource;

    fn app() -> PhoneCatalog {
        PhoneCatalog::new(Settings::default()).0
    }

    /// Built-in phones with the first one rebranded
    fn imported_catalog() -> Catalog {
        let mut phones: Vec<Phone> = Catalog::builtin()
            .unwrap()
            .phones()
            .iter()
            .map(|phone| Phone::clone(phone))
            .collect();
        phones[0].brand = "Nothing".to_string();
        phones[0].name = "Nothing Phone (2)".to_string();

        Catalog::from_phones(phones, CatalogSource::File("phones.json".into())).unwrap()
    }

    #[test]
    fn test_loading_catalog_resets_browsing_state() {
        let mut app = app();
        let _ = app.update(Message::ToggleBrand("Apple".to_string()));
        let _ = app.update(Message::ToggleRam("8GB".to_string()));
        let _ = app.update(Message::SearchInput("iphone".to_string()));
        let _ = app.update(Message::SearchSubmitted);
        let _ = app.update(Message::ToggleCompare("2".to_string()));
        let _ = app.update(Message::SelectPhone("1".to_string()));

        let _ = app.update(Message::CatalogLoaded(Ok(imported_catalog())));

        assert_eq!(app.filters, FilterConfig::with_ceiling(app.settings.price_ceiling));
        assert!(app.search_input.is_empty());
        assert!(app.search_query.is_empty());
        assert_eq!(app.session.page(), Page::Phones);
        assert!(app.session.selected().is_none());
        assert!(app.session.compare().is_empty());
        assert_eq!(app.status.as_deref(), Some("Loaded 6 phones from phones.json."));

        let visible = query(app.catalog.phones(), &app.search_query, &app.filters, app.sort);
        assert_eq!(visible.len(), 6);
    }

    #[test]
    fn test_imported_brands_are_filterable() {
        let mut app = app();
        let _ = app.update(Message::CatalogLoaded(Ok(imported_catalog())));

        assert!(app.catalog.brands().contains(&"Nothing"));

        let _ = app.update(Message::ToggleBrand("Nothing".to_string()));
        let visible = query(app.catalog.phones(), "", &app.filters, app.sort);
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Nothing Phone (2)"]);
    }

    #[test]
    fn test_failed_load_keeps_catalog() {
        let mut app = app();
        let _ = app.update(Message::ToggleBrand("Google".to_string()));
        let _ = app.update(Message::CatalogLoaded(Err("malformed catalog".to_string())));

        assert_eq!(app.catalog.len(), 6);
        assert!(app.filters.brand.contains("Google"));
        assert_eq!(app.status.as_deref(), Some("Could not load catalog: malformed catalog"));
    }
}
