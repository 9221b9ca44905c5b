use iced::widget::{button, column, container, text};
use iced::{Alignment, Element, Length};

use phone_catalog::Page;

use super::muted;
use crate::Message;

/// Static page for sections that are not built yet
pub fn view<'a>(title: &'a str, message: &'a str) -> Element<'a, Message> {
    let content = column![
        text(title).size(30),
        muted(message),
        button(text("Back to Home"))
            .on_press(Message::Navigate(Page::Home))
            .style(button::primary)
            .padding([10, 20]),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
