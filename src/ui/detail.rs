use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use phone_catalog::{format, Availability, Page, Phone};

use super::{heading, image_placeholder, muted, stars, DetailTab, ACCENT, BAD, GOOD, STAR};
use crate::Message;

/// Detail page for the selected phone
pub fn view<'a>(
    phone: &'a Phone,
    in_compare: bool,
    tab: DetailTab,
    selected_color: Option<&'a str>,
) -> Element<'a, Message> {
    let top_bar = row![
        button(text("< Back to Phones"))
            .on_press(Message::Navigate(Page::Phones))
            .style(button::text),
        horizontal_space(),
        button(text(if in_compare { "Remove from Compare" } else { "Add to Compare" }))
            .on_press(Message::ToggleCompare(phone.id.clone()))
            .style(if in_compare { button::primary } else { button::secondary }),
    ]
    .align_y(Alignment::Center);

    let gallery = column![
        image_placeholder(phone, 320.0),
        text("Available Colors").size(16),
        colors(phone, selected_color.or(phone.default_color())),
    ]
    .spacing(12)
    .width(Length::FillPortion(2));

    let summary = column![
        muted(phone.brand.as_str()),
        heading(phone.name.as_str()),
        row![
            text(stars(phone.rating)).color(STAR),
            text(format!("{} ({})", phone.rating, format::review_count(phone.review_count))),
        ]
        .spacing(8),
        price(phone),
        row![
            button(text("Buy Now")).style(button::primary),
            button(text("Add to Cart")).style(button::secondary),
        ]
        .spacing(8),
        highlights(phone),
        pros_and_cons(phone),
    ]
    .spacing(16)
    .width(Length::FillPortion(3));

    let tabs = DetailTab::ALL.iter().fold(Row::new().spacing(8), |tabs, &each| {
        tabs.push(
            button(text(each.label()))
                .on_press(Message::DetailTabSelected(each))
                .style(if each == tab { button::primary } else { button::secondary }),
        )
    });

    let content = column![
        top_bar,
        row![gallery, summary].spacing(32),
        tabs,
        tab_content(phone, tab),
    ]
    .spacing(24)
    .padding(24);

    scrollable(content).height(Length::Fill).into()
}

/// Shown when the detail page is reached without a selection
pub fn nothing_selected<'a>() -> Element<'a, Message> {
    let content = column![
        text("No phone selected").size(22),
        muted("Pick a phone from the list to see its details."),
        button(text("Browse Phones"))
            .on_press(Message::Navigate(Page::Phones))
            .style(button::primary),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn colors<'a>(phone: &'a Phone, selected: Option<&'a str>) -> Element<'a, Message> {
    Wrap::with_elements(
        phone
            .colors
            .iter()
            .map(|color| {
                let style = if Some(color.as_str()) == selected {
                    button::primary
                } else {
                    button::secondary
                };
                button(text(color.as_str()).size(13))
                    .on_press(Message::ColorSelected(color.clone()))
                    .style(style)
                    .into()
            })
            .collect(),
    )
    .spacing(8.0)
    .line_spacing(8.0)
    .into()
}

fn price<'a>(phone: &'a Phone) -> Element<'a, Message> {
    let current = text(format::price(&phone.price.currency, phone.price.current))
        .size(32)
        .color(ACCENT);

    let original = format::original_price(&phone.price).map(|label| muted(label));

    let discount = format::discount_percent(&phone.price)
        .map(|percent| text(format!("{}% OFF", percent)).size(14).color(BAD));

    let stock_color = match phone.availability {
        Availability::Available => GOOD,
        Availability::ComingSoon => STAR,
        Availability::Discontinued => BAD,
    };

    row![current]
        .push_maybe(original)
        .push_maybe(discount)
        .push(horizontal_space())
        .push(text(phone.availability.stock_label()).color(stock_color))
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}

fn highlights<'a>(phone: &'a Phone) -> Element<'a, Message> {
    let specs = &phone.specifications;
    let tiles = [
        ("Display", specs.display.size.as_str()),
        ("Processor", format::headline(&specs.processor)),
        ("Camera", format::headline(&specs.camera.rear)),
        ("Battery", specs.battery.as_str()),
    ];

    tiles
        .into_iter()
        .fold(Row::new().spacing(12), |row, (label, value)| {
            row.push(
                container(column![muted(label), text(value).size(16)].spacing(4))
                    .padding(12)
                    .width(Length::Fill)
                    .style(container::bordered_box),
            )
        })
        .into()
}

fn pros_and_cons<'a>(phone: &'a Phone) -> Element<'a, Message> {
    let list = |title: &'a str, items: &'a [String], color: iced::Color| {
        items.iter().fold(
            Column::new().spacing(6).push(text(title).size(16).color(color)),
            |col, item| col.push(text(format!("• {}", item)).size(14)),
        )
    };

    row![
        list("Pros", phone.pros.as_slice(), GOOD).width(Length::Fill),
        list("Cons", phone.cons.as_slice(), BAD).width(Length::Fill),
    ]
    .spacing(24)
    .into()
}

fn tab_content<'a>(phone: &'a Phone, tab: DetailTab) -> Element<'a, Message> {
    let specs = &phone.specifications;

    match tab {
        DetailTab::Specifications => {
            let network = specs.network.join(", ");
            let groups = [
                (
                    "Display",
                    vec![
                        ("Size", specs.display.size.clone()),
                        ("Resolution", specs.display.resolution.clone()),
                        ("Type", specs.display.kind.clone()),
                    ],
                ),
                (
                    "Performance",
                    vec![
                        ("Processor", specs.processor.clone()),
                        ("RAM", specs.ram.clone()),
                        ("Storage", specs.storage.clone()),
                        ("OS", specs.os.clone()),
                    ],
                ),
                (
                    "Camera",
                    vec![
                        ("Rear Camera", specs.camera.rear.clone()),
                        ("Front Camera", specs.camera.front.clone()),
                    ],
                ),
                (
                    "Battery & Connectivity",
                    vec![("Battery", specs.battery.clone()), ("Network", network)],
                ),
            ];

            Wrap::with_elements(
                groups
                    .into_iter()
                    .map(|(title, rows)| spec_group(title, rows))
                    .collect(),
            )
            .spacing(16.0)
            .line_spacing(16.0)
            .into()
        }
        DetailTab::Features => Wrap::with_elements(
            phone
                .features
                .iter()
                .map(|feature| {
                    container(text(feature.as_str()))
                        .padding(12)
                        .style(container::bordered_box)
                        .into()
                })
                .collect(),
        )
        .spacing(12.0)
        .line_spacing(12.0)
        .into(),
        DetailTab::Reviews => column![
            row![
                text(phone.rating.to_string()).size(40),
                column![
                    text(stars(phone.rating)).color(STAR),
                    muted(format!("Based on {}", format::review_count(phone.review_count))),
                ]
                .spacing(4),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
            muted("Detailed user reviews are not available yet."),
        ]
        .spacing(16)
        .into(),
        DetailTab::Gallery => Wrap::with_elements(
            (0..4)
                .map(|_| {
                    container(image_placeholder(phone, 160.0))
                        .width(Length::Fixed(200.0))
                        .into()
                })
                .collect(),
        )
        .spacing(12.0)
        .line_spacing(12.0)
        .into(),
    }
}

fn spec_group<'a>(title: &'a str, rows: Vec<(&'a str, String)>) -> Element<'a, Message> {
    let table = rows.into_iter().fold(
        Column::new().spacing(8).push(text(title).size(18).color(ACCENT)),
        |col, (label, value)| col.push(row![muted(label), horizontal_space(), text(value)]),
    );

    container(table)
        .width(Length::Fixed(340.0))
        .padding(16)
        .style(container::rounded_box)
        .into()
}
