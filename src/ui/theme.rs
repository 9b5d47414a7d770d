// SPDX-License-Identifier: MPL-2.0
//! One Dark theme and the widget styles built on it.

use crate::ui::design_tokens::{palette, radius};
use iced::theme::Palette;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Name under which the custom theme is registered.
pub const THEME_NAME: &str = "One Dark";

/// Builds the application theme from the One Dark palette.
pub fn one_dark() -> Theme {
    Theme::custom(
        THEME_NAME.to_string(),
        Palette {
            background: palette::BACKGROUND,
            text: palette::FOREGROUND,
            primary: palette::BLUE,
            success: palette::GREEN,
            warning: palette::YELLOW,
            danger: palette::RED,
            ..Palette::DARK
        },
    )
}

fn flat(background: Color, text: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Main window surface behind the image.
pub fn window(_theme: &Theme) -> container::Style {
    flat(palette::BACKGROUND, palette::FOREGROUND)
}

/// Menu bar strip along the top of the window.
pub fn menu_bar(_theme: &Theme) -> container::Style {
    flat(palette::BACKGROUND, palette::FOREGROUND)
}

/// Popup holding the File menu entries.
pub fn menu_popup(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::SELECTION,
        },
        ..flat(palette::BACKGROUND, palette::FOREGROUND)
    }
}

/// Status bar along the bottom of the window.
pub fn status_bar(_theme: &Theme) -> container::Style {
    flat(palette::GUTTER, palette::FOREGROUND)
}

/// Tooltip bubble for status tips.
pub fn tooltip(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette::COMMENT,
        },
        ..flat(palette::SELECTION, palette::FOREGROUND)
    }
}

/// Menu title and menu entries: transparent until hovered, pressed or open.
pub fn menu_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let highlighted = selected
            || matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: highlighted.then_some(Background::Color(palette::SELECTION)),
            text_color: palette::FOREGROUND,
            border: Border {
                radius: radius::NONE.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}
