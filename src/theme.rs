use iced::{widget::button, Background, Color, Theme};

use crate::charts::ColorToken;

pub const ACCENT: Color = Color::from_rgb8(0x25, 0x63, 0xeb);
pub const DRAWER_BG: Color = Color::from_rgb8(0x11, 0x18, 0x27);
pub const DRAWER_ITEM_BG: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
pub const DRAWER_TEXT_ACTIVE: Color = Color::from_rgb8(0xf9, 0xfa, 0xfb);
pub const DRAWER_TEXT_INACTIVE: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub const MUTED_TEXT: Color = Color::from_rgb8(0x9c, 0xa3, 0xaf);
pub const METRIC_TEXT: Color = Color::from_rgb8(0x4a, 0xde, 0x80);
pub const ERROR_TEXT: Color = Color::from_rgb8(0xf8, 0x71, 0x71);

pub const CHART_PRIMARY: Color = Color::from_rgb8(0x00, 0x88, 0xfe);
pub const CHART_HIGHLIGHT: Color = Color::from_rgb8(0xff, 0x80, 0x42);

pub const CARD_BLUE: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
pub const CARD_GREEN: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
pub const CARD_YELLOW: Color = Color::from_rgb8(0xea, 0xb3, 0x08);

pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Primary => CHART_PRIMARY,
        ColorToken::Highlight => CHART_HIGHLIGHT,
    }
}

/// Hover and press feedback shared by every button.
fn dim_for_status(mut color: Color, status: button::Status) -> Color {
    if matches!(status, button::Status::Hovered) {
        color.a = 0.85;
    }

    if matches!(status, button::Status::Pressed) {
        color.a = 0.7;
    }

    color
}

pub fn accent_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(dim_for_status(ACCENT, status))),
        text_color: DRAWER_TEXT_ACTIVE,
        ..Default::default()
    }
}

pub fn nav_button_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if selected { ACCENT } else { DRAWER_ITEM_BG };
        button::Style {
            background: Some(Background::Color(dim_for_status(background, status))),
            text_color: if selected {
                DRAWER_TEXT_ACTIVE
            } else {
                DRAWER_TEXT_INACTIVE
            },
            ..Default::default()
        }
    }
}
