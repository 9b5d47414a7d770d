// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application: menu bar, image area and status bar.

use super::Message;
use crate::ui::menu_bar::{self, ViewContext as MenuBarViewContext};
use crate::ui::status_bar;
use crate::ui::theme;
use crate::ui::viewer;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub viewer: &'a viewer::State,
    pub status: Option<&'a str>,
    pub menu_open: bool,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let menu = menu_bar::view(MenuBarViewContext {
        menu_open: ctx.menu_open,
    })
    .map(Message::MenuBar);

    let column = Column::new()
        .push(menu)
        .push(ctx.viewer.view())
        .push(status_bar::view(ctx.status))
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::window)
        .into()
}
