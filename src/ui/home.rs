use std::sync::Arc;

use iced::widget::{button, column, container, row, scrollable, text, Row};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use phone_catalog::{Catalog, CompareSet, Page, Phone};

use super::{muted, phone_card, ACCENT};
use crate::Message;

const STATS: [(&str, &str); 4] = [
    ("500+", "Mobile Phones"),
    ("50K+", "Happy Users"),
    ("25+", "Top Brands"),
    ("99.9%", "Uptime"),
];

const CATEGORIES: [(&str, &str); 4] = [
    ("Flagship", "50+"),
    ("Gaming", "30+"),
    ("Budget", "100+"),
    ("Camera", "40+"),
];

/// Landing page: hero, featured phones, categories, trending grid and stats
pub fn view<'a>(catalog: &Catalog, compare: &CompareSet) -> Element<'a, Message> {
    let hero = column![
        text("Discover Your Next Phone").size(44).color(ACCENT),
        muted("Compare specs, prices and features of the latest smartphones in one place."),
        row![
            button(text("Explore Phones"))
                .on_press(Message::Navigate(Page::Phones))
                .style(button::primary)
                .padding([10, 20]),
            button(text("Compare Now"))
                .on_press(Message::Navigate(Page::Compare))
                .style(button::secondary)
                .padding([10, 20]),
        ]
        .spacing(12),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    let featured = cards(catalog.featured(), compare);

    let categories = CATEGORIES
        .iter()
        .fold(Row::new().spacing(16), |row, &(name, count)| {
            row.push(
                button(column![text(name).size(18), muted(format!("{} phones", count))].spacing(4))
                    .on_press(Message::Navigate(Page::Phones))
                    .style(button::secondary)
                    .padding(20)
                    .width(Length::Fill),
            )
        });

    let trending = cards(catalog.trending(), compare);

    let stats = STATS.iter().fold(Row::new().spacing(16), |row, &(number, label)| {
        row.push(
            column![text(number).size(32).color(ACCENT), muted(label)]
                .align_x(Alignment::Center)
                .width(Length::Fill),
        )
    });

    let news = column![
        section("Latest Tech News", "Stay updated with the mobile industry."),
        button(text("Read the latest"))
            .on_press(Message::Navigate(Page::News))
            .style(button::text),
    ]
    .spacing(8);

    let content = column![
        container(hero).width(Length::Fill).padding(48).center_x(Length::Fill),
        section("Featured Phones", "Handpicked flagship devices"),
        featured,
        section("Shop by Category", "Find the right phone for the way you use it"),
        categories,
        section("Trending Now", "Most popular phones this week"),
        trending,
        button(text("View All Phones"))
            .on_press(Message::Navigate(Page::Phones))
            .style(button::primary),
        stats,
        news,
    ]
    .spacing(24)
    .padding(24);

    scrollable(content).height(Length::Fill).into()
}

fn cards<'a>(phones: &[Arc<Phone>], compare: &CompareSet) -> Element<'a, Message> {
    Wrap::with_elements(
        phones
            .iter()
            .map(|phone| phone_card::view(phone, compare.contains(&phone.id)))
            .collect(),
    )
    .spacing(16.0)
    .line_spacing(16.0)
    .into()
}

fn section<'a>(title: &'a str, subtitle: &'a str) -> Element<'a, Message> {
    column![text(title).size(26), muted(subtitle)].spacing(4).into()
}
