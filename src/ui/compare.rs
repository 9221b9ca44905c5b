use std::sync::Arc;

use iced::widget::{button, column, container, horizontal_rule, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use phone_catalog::{format, Additions, CompareSet, ComparisonTable, Page, Phone};

use super::{heading, muted, stars, ACCENT, BAD, GOOD, STAR};
use crate::Message;

const LABEL_WIDTH: f32 = 180.0;
const COLUMN_WIDTH: f32 = 220.0;

/// Compare page
pub fn view<'a>(catalog: &[Arc<Phone>], compare: &CompareSet) -> Element<'a, Message> {
    let intro = column![
        heading("Compare Phones"),
        muted("Compare specifications, features, and prices side by side"),
    ]
    .spacing(8);

    let body: Element<'a, Message> = if compare.is_empty() {
        empty_state()
    } else {
        let table = ComparisonTable::build(compare);

        let mut selection = table
            .columns
            .iter()
            .fold(Row::new().spacing(16), |row, phone| row.push(selected_card(phone)));
        if !compare.is_full() {
            selection = selection.push(add_more(&Additions::compute(catalog, compare)));
        }

        let actions = row![
            button(text("Add More Phones"))
                .on_press(Message::Navigate(Page::Phones))
                .style(button::secondary),
            button(text("Clear All"))
                .on_press(Message::ClearCompare)
                .style(button::danger),
        ]
        .spacing(16);

        column![selection, table_view(&table), actions]
            .spacing(32)
            .align_x(Alignment::Center)
            .into()
    };

    scrollable(column![intro, body].spacing(24).padding(24))
        .height(Length::Fill)
        .into()
}

/// Floating shortcut shown while phones are queued for comparison
pub fn badge<'a>(count: usize) -> Element<'a, Message> {
    button(text(format!("Compare ({})", count)).size(16))
        .on_press(Message::Navigate(Page::Compare))
        .style(button::primary)
        .padding([12, 24])
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    column![
        text("No phones to compare").size(22),
        muted("Add phones to compare their specifications, features, and prices side by side."),
        button(text("Browse Phones"))
            .on_press(Message::Navigate(Page::Phones))
            .style(button::primary),
    ]
    .spacing(12)
    .padding(48)
    .align_x(Alignment::Center)
    .width(Length::Fill)
    .into()
}

fn selected_card<'a>(phone: &Phone) -> Element<'a, Message> {
    let content = column![
        row![
            text(phone.name.clone()).size(15),
            button(text("x").size(12))
                .on_press(Message::RemoveFromCompare(phone.id.clone()))
                .style(button::danger),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        muted(phone.brand.clone()),
        row![
            text(stars(phone.rating)).size(12).color(STAR),
            text(phone.rating.to_string()).size(12),
        ]
        .spacing(4),
        text(format::price(&phone.price.currency, phone.price.current)).color(ACCENT),
    ]
    .spacing(6);

    container(content)
        .width(Length::Fixed(COLUMN_WIDTH))
        .padding(16)
        .style(container::rounded_box)
        .into()
}

fn add_more<'a>(additions: &Additions) -> Element<'a, Message> {
    let candidates = additions.preview.iter().fold(
        Column::new()
            .spacing(6)
            .push(muted("Add another phone to compare")),
        |col, phone| {
            col.push(
                button(column![text(phone.name.clone()).size(13), muted(phone.brand.clone())])
                    .on_press(Message::ToggleCompare(phone.id.clone()))
                    .style(button::secondary)
                    .width(Length::Fill),
            )
        },
    );

    let view_all = additions.has_more().then(|| {
        button(text("View all phones").size(13))
            .on_press(Message::Navigate(Page::Phones))
            .style(button::text)
    });

    container(candidates.push_maybe(view_all))
        .width(Length::Fixed(COLUMN_WIDTH))
        .padding(16)
        .style(container::bordered_box)
        .into()
}

fn table_view<'a>(table: &ComparisonTable) -> Element<'a, Message> {
    let header = table.columns.iter().fold(
        Row::new().push(label_cell("Specification")),
        |row, phone| {
            row.push(
                column![text(phone.name.clone()).size(15), muted(phone.brand.clone())]
                    .width(Length::Fixed(COLUMN_WIDTH))
                    .align_x(Alignment::Center),
            )
        },
    );

    let mut rows = Column::new().spacing(10).push(header).push(horizontal_rule(1));

    for section in &table.sections {
        rows = rows.push(text(section.title).size(17).color(ACCENT));
        for spec in &section.rows {
            rows = rows.push(spec.cells.iter().fold(
                Row::new().push(label_cell(spec.label)),
                |row, cell| row.push(value_cell(text(cell.clone()).size(14))),
            ));
        }
    }

    rows = rows.push(text("Key Features").size(17).color(ACCENT));
    for feature in &table.features {
        rows = rows.push(feature.present.iter().fold(
            Row::new().push(label_cell(feature.feature.clone())),
            |row, &present| {
                let mark = if present {
                    text("✓").color(GOOD)
                } else {
                    text("✗").color(BAD)
                };
                row.push(value_cell(mark))
            },
        ));
    }

    container(scrollable(rows).direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::default(),
    )))
    .padding(16)
    .style(container::rounded_box)
    .into()
}

fn label_cell<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(14))
        .width(Length::Fixed(LABEL_WIDTH))
        .into()
}

fn value_cell<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fixed(COLUMN_WIDTH))
        .center_x(Length::Fixed(COLUMN_WIDTH))
        .into()
}
