use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use phone_catalog::format;
use phone_catalog::Phone;

use super::{image_placeholder, muted, stars, ACCENT, BAD, STAR};
use crate::Message;

const CARD_WIDTH: f32 = 300.0;

/// Grid tile for a phone
pub fn view<'a>(phone: &Phone, in_compare: bool) -> Element<'a, Message> {
    let discount = format::discount_percent(&phone.price)
        .map(|percent| text(format!("{}% OFF", percent)).size(12).color(BAD));

    let body = column![
        row![].push_maybe(discount),
        image_placeholder(phone, 140.0),
        text(phone.name.clone()).size(18),
        muted(phone.brand.clone()),
        rating_line(phone),
        price_line(phone),
        muted(format!(
            "{} | {} | {}",
            phone.specifications.ram, phone.specifications.storage, phone.specifications.battery
        )),
        actions(phone, in_compare),
    ]
    .spacing(8);

    container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .padding(16)
        .style(container::rounded_box)
        .into()
}

/// Single-row entry for the list layout
pub fn list_row<'a>(phone: &Phone, in_compare: bool) -> Element<'a, Message> {
    let summary = column![
        text(phone.name.clone()).size(18),
        muted(format!(
            "{} | {} | {} | {}",
            phone.brand,
            phone.specifications.processor,
            phone.specifications.ram,
            phone.specifications.storage
        )),
        rating_line(phone),
    ]
    .spacing(4);

    let content = row![
        summary,
        horizontal_space(),
        price_line(phone),
        actions(phone, in_compare),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .padding(12)
        .style(container::rounded_box)
        .into()
}

fn rating_line<'a>(phone: &Phone) -> Element<'a, Message> {
    row![
        text(stars(phone.rating)).size(14).color(STAR),
        text(phone.rating.to_string()).size(14),
        muted(format!("({})", format::thousands(phone.review_count))),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

fn price_line<'a>(phone: &Phone) -> Element<'a, Message> {
    let original = format::original_price(&phone.price).map(|label| muted(label));

    row![text(format::price(&phone.price.currency, phone.price.current))
        .size(20)
        .color(ACCENT)]
    .push_maybe(original)
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn actions<'a>(phone: &Phone, in_compare: bool) -> Element<'a, Message> {
    let (compare_label, compare_style): (&str, fn(&iced::Theme, button::Status) -> button::Style) =
        if in_compare {
            ("In Compare", button::primary)
        } else {
            ("Compare", button::secondary)
        };

    row![
        button(text("View Details").size(14))
            .on_press(Message::SelectPhone(phone.id.clone()))
            .style(button::primary),
        button(text(compare_label).size(14))
            .on_press(Message::ToggleCompare(phone.id.clone()))
            .style(compare_style),
    ]
    .spacing(8)
    .into()
}
