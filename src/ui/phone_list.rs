use std::sync::Arc;

use iced::widget::{button, column, container, horizontal_space, pick_list, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use phone_catalog::{format, CompareSet, FilterConfig, Phone, SortKey};

use super::{filters, heading, muted, phone_card, ViewMode};
use crate::Message;

/// Everything the phone list page renders from
pub struct ListView<'a> {
    /// Query result, already filtered and sorted
    pub phones: Vec<Arc<Phone>>,
    pub search_query: &'a str,
    pub filters: &'a FilterConfig,
    /// Brands offered in the sidebar, in catalog order
    pub brands: Vec<&'a str>,
    pub price_ceiling: u32,
    pub sort: SortKey,
    pub view_mode: ViewMode,
    pub show_filters: bool,
    pub compare: &'a CompareSet,
}

pub fn view<'a>(list: ListView<'a>) -> Element<'a, Message> {
    let title = if list.search_query.is_empty() {
        "All Mobile Phones".to_string()
    } else {
        format!("Search Results for \"{}\"", list.search_query)
    };

    let mode_button = |label: &'static str, mode: ViewMode| {
        let style = if list.view_mode == mode { button::primary } else { button::secondary };
        button(text(label).size(14))
            .on_press(Message::ViewModeChanged(mode))
            .style(style)
    };

    let controls = row![
        column![heading(title), muted(format::result_count(list.phones.len()))].spacing(4),
        horizontal_space(),
        button(text(if list.show_filters { "Hide Filters" } else { "Filters" }).size(14))
            .on_press(Message::ToggleFilterPanel)
            .style(button::secondary),
        pick_list(SortKey::ALL, Some(list.sort), Message::SortChanged),
        mode_button("Grid", ViewMode::Grid),
        mode_button("List", ViewMode::List),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let results: Element<'a, Message> = if list.phones.is_empty() {
        empty_state()
    } else {
        match list.view_mode {
            ViewMode::Grid => Wrap::with_elements(
                list.phones
                    .iter()
                    .map(|phone| phone_card::view(phone, list.compare.contains(&phone.id)))
                    .collect(),
            )
            .spacing(16.0)
            .line_spacing(16.0)
            .into(),
            ViewMode::List => list
                .phones
                .iter()
                .fold(Column::new().spacing(12), |col, phone| {
                    col.push(phone_card::list_row(phone, list.compare.contains(&phone.id)))
                })
                .into(),
        }
    };

    let main = scrollable(
        column![controls]
            .push_maybe(filters::active_chips(list.filters))
            .push(results)
            .spacing(20)
            .padding(24),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let currency = list
        .phones
        .first()
        .map(|phone| phone.price.currency.clone())
        .unwrap_or_else(|| "₹".to_string());

    let sidebar = list
        .show_filters
        .then(|| filters::sidebar(list.filters, &list.brands, list.price_ceiling, &currency));

    row![].push_maybe(sidebar).push(main).into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        text("No phones found").size(22),
        muted("Try adjusting your filters or search query to find more phones."),
        button(text("Clear All Filters"))
            .on_press(Message::ClearFilters)
            .style(button::primary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(64)
        .center_x(Length::Fill)
        .into()
}
