/// Views of the desktop application
///
/// Each page is a free function that renders from borrowed state and
/// emits `Message`s; no view holds state of its own.

pub mod compare;
pub mod detail;
pub mod filters;
pub mod header;
pub mod home;
pub mod phone_card;
pub mod phone_list;
pub mod placeholder;

use iced::widget::{container, text, Text};
use iced::{Color, Element, Length};

use phone_catalog::format;
use phone_catalog::Phone;

use crate::Message;

pub const ACCENT: Color = Color::from_rgb(0.13, 0.83, 0.93);
pub const MUTED: Color = Color::from_rgb(0.61, 0.64, 0.69);
pub const STAR: Color = Color::from_rgb(0.98, 0.80, 0.08);
pub const GOOD: Color = Color::from_rgb(0.29, 0.87, 0.50);
pub const BAD: Color = Color::from_rgb(0.97, 0.44, 0.44);

/// Layout of the phone list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

/// Tabs at the bottom of the detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Specifications,
    Features,
    Reviews,
    Gallery,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Specifications,
        DetailTab::Features,
        DetailTab::Reviews,
        DetailTab::Gallery,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Specifications => "Specifications",
            DetailTab::Features => "Features",
            DetailTab::Reviews => "Reviews",
            DetailTab::Gallery => "Gallery",
        }
    }
}

/// Five-star strip for a rating: "★★★★☆"
pub fn stars(rating: f32) -> String {
    let filled = format::filled_stars(rating);
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

pub fn muted<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).size(14).color(MUTED)
}

pub fn heading<'a>(content: impl text::IntoFragment<'a>) -> Text<'a> {
    text(content).size(28)
}

/// Stand-in for the product photo, images are never fetched
pub fn image_placeholder<'a>(phone: &Phone, height: f32) -> Element<'a, Message> {
    container(text(phone.brand.clone()).size(16).color(MUTED))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(height))
        .style(container::bordered_box)
        .into()
}
