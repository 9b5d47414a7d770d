// SPDX-License-Identifier: MPL-2.0
//! Menu bar with the `File` menu.
//!
//! The menu holds a single entry, `Open Image`, also reachable with the
//! `Ctrl+O` shortcut (handled by the application's event subscription).

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, text, tooltip, Column, Container, Row, Text},
    Element, Length,
};

pub const FILE_MENU_LABEL: &str = "File";
pub const OPEN_IMAGE_LABEL: &str = "Open Image";
pub const OPEN_IMAGE_SHORTCUT: &str = "Ctrl+O";
pub const OPEN_IMAGE_STATUS_TIP: &str = "Open image";

/// Contextual data needed to render the menu bar.
pub struct ViewContext {
    pub menu_open: bool,
}

/// Messages emitted by the menu bar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    OpenImage,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenImage,
}

/// Process a menu bar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::OpenImage => {
            *menu_open = false;
            Event::OpenImage
        }
    }
}

/// Render the menu bar, and the File menu below it when open.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_dropdown());
    }

    content.into()
}

fn build_bar<'a>(ctx: &ViewContext) -> Element<'a, Message> {
    let file_button = button(Text::new(FILE_MENU_LABEL).size(typography::BODY))
        .on_press(Message::ToggleMenu)
        .padding([spacing::XXS, spacing::SM])
        .style(theme::menu_item(ctx.menu_open));

    let row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(file_button);

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .style(theme::menu_bar)
        .into()
}

fn build_dropdown<'a>() -> Element<'a, Message> {
    let label = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(OPEN_IMAGE_LABEL)
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            text(OPEN_IMAGE_SHORTCUT)
                .size(typography::CAPTION)
                .color(palette::COMMENT),
        );

    let open_item = button(label)
        .on_press(Message::OpenImage)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(theme::menu_item(false));

    let open_item = tooltip(
        open_item,
        Container::new(Text::new(OPEN_IMAGE_STATUS_TIP).size(typography::BODY_SM))
            .padding(spacing::XXS)
            .style(theme::tooltip),
        tooltip::Position::Right,
    )
    .gap(spacing::XXS);

    Container::new(Column::new().push(open_item))
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(theme::menu_popup)
        .into()
}
