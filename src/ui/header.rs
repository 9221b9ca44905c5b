use iced::widget::{button, column, container, horizontal_space, row, text, text_input, Row};
use iced::{Alignment, Element, Length};

use phone_catalog::Page;

use super::{ACCENT, MUTED};
use crate::Message;

/// Top bar: logo, page navigation, search box and catalog import
pub fn view<'a>(current: Page, search_input: &str, status: Option<&'a str>) -> Element<'a, Message> {
    let logo = button(text("PhoneHub").size(22).color(ACCENT))
        .on_press(Message::Navigate(Page::Home))
        .style(button::text);

    let nav = Page::NAVIGATION
        .iter()
        .fold(Row::new().spacing(4), |nav, &(page, label)| {
            let style = if page == current { button::primary } else { button::text };
            nav.push(
                button(text(label).size(15))
                    .on_press(Message::Navigate(page))
                    .style(style)
                    .padding([6, 12]),
            )
        });

    let search = text_input("Search phones, brands, features...", search_input)
        .on_input(Message::SearchInput)
        .on_submit(Message::SearchSubmitted)
        .padding(8)
        .width(Length::Fixed(300.0));

    let open = button(text("Open Catalog").size(14))
        .on_press(Message::OpenCatalog)
        .style(button::secondary)
        .padding([6, 12]);

    let bar = row![logo, nav, horizontal_space(), search, open]
        .spacing(16)
        .padding([10, 20])
        .align_y(Alignment::Center);

    let status_line = status.map(|status| {
        row![
            text(status).size(13).color(MUTED),
            horizontal_space(),
            button(text("Dismiss").size(12))
                .on_press(Message::DismissStatus)
                .style(button::text),
        ]
        .padding([0, 20])
        .align_y(Alignment::Center)
    });

    container(column![bar].push_maybe(status_line))
        .width(Length::Fill)
        .style(container::dark)
        .into()
}
