use iced::widget::{button, checkbox, column, horizontal_space, radio, row, scrollable, slider, text, Column};
use iced::{Alignment, Element, Length};

use phone_catalog::format;
use phone_catalog::state::filters::{RAM_OPTIONS, RATING_OPTIONS, STORAGE_OPTIONS};
use phone_catalog::FilterConfig;

use super::{muted, ACCENT};
use crate::Message;

const PRICE_STEP: u32 = 1000;

/// Filter sidebar of the phone list.
///
/// `brands` comes from the loaded catalog, so imported catalogs get
/// their own brand checkboxes.
pub fn sidebar<'a>(
    filters: &FilterConfig,
    brands: &[&str],
    price_ceiling: u32,
    currency: &str,
) -> Element<'a, Message> {
    let title = row![
        text("Filters").size(20).color(ACCENT),
        horizontal_space(),
        button(text("Clear All").size(13))
            .on_press_maybe((!filters.is_unconstrained(price_ceiling)).then_some(Message::ClearFilters))
            .style(button::text),
    ]
    .align_y(Alignment::Center);

    let price = column![
        section("Price Range"),
        slider(
            0..=price_ceiling,
            filters.price_range.1.min(price_ceiling),
            Message::MaxPriceChanged
        )
        .step(PRICE_STEP),
        row![
            muted(format::price(currency, filters.price_range.0)),
            horizontal_space(),
            muted(format::price(currency, filters.price_range.1)),
        ],
    ]
    .spacing(8);

    let brands = brands.iter().fold(
        Column::new().spacing(6).push(section("Brand")),
        |col, &brand| {
            let name = brand.to_string();
            col.push(
                checkbox(brand, filters.brand.contains(brand))
                    .on_toggle(move |_| Message::ToggleBrand(name.clone())),
            )
        },
    );

    let ram = RAM_OPTIONS.iter().fold(
        Column::new().spacing(6).push(section("RAM")),
        |col, &ram| {
            col.push(
                checkbox(ram, filters.ram.contains(ram))
                    .on_toggle(move |_| Message::ToggleRam(ram.to_string())),
            )
        },
    );

    let storage = STORAGE_OPTIONS.iter().fold(
        Column::new().spacing(6).push(section("Storage")),
        |col, &storage| {
            col.push(
                checkbox(storage, filters.storage.contains(storage))
                    .on_toggle(move |_| Message::ToggleStorage(storage.to_string())),
            )
        },
    );

    let selected_rating = (filters.rating > 0).then_some(filters.rating);
    let rating = RATING_OPTIONS.iter().fold(
        Column::new().spacing(6).push(section("Minimum Rating")),
        |col, &threshold| {
            col.push(radio(
                format!("{} & above", super::stars(f32::from(threshold))),
                threshold,
                selected_rating,
                Message::RatingSelected,
            ))
        },
    );

    scrollable(
        column![title, price, brands, ram, storage, rating]
            .spacing(24)
            .padding(20)
            .width(Length::Fixed(260.0)),
    )
    .height(Length::Fill)
    .into()
}

/// Chips summarizing the active constraints, `None` when nothing is active
pub fn active_chips<'a>(filters: &FilterConfig) -> Option<Element<'a, Message>> {
    if !filters.has_active_chips() {
        return None;
    }

    let chips = filters
        .brand
        .iter()
        .cloned()
        .chain(filters.ram.iter().map(|ram| format!("{} RAM", ram)))
        .chain(filters.storage.iter().map(|storage| format!("{} Storage", storage)))
        .chain((filters.rating > 0).then(|| format!("{}+ Rating", filters.rating)))
        .fold(row![muted("Active filters:")].spacing(8), |chips, label| {
            chips.push(text(label).size(13).color(ACCENT))
        });

    Some(chips.align_y(Alignment::Center).into())
}

fn section<'a>(title: &'a str) -> Element<'a, Message> {
    text(title).size(15).into()
}
