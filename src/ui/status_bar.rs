// SPDX-License-Identifier: MPL-2.0
//! Status bar along the bottom of the window.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theme;
use iced::{
    widget::{Container, Text},
    Element, Length,
};

pub fn view<'a, Message: 'a>(status: Option<&str>) -> Element<'a, Message> {
    Container::new(Text::new(status.unwrap_or_default().to_string()).size(typography::BODY_SM))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(theme::status_bar)
        .into()
}
