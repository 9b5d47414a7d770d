// SPDX-License-Identifier: MPL-2.0
//! Central display area: paints the current image scaled to fit.
//!
//! The image keeps its aspect ratio and is resampled with linear filtering.
//! Only the image being shown is held in memory.

use crate::media::{self, ImageData};
use crate::ui::design_tokens::{palette, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{image, Container, Text},
    ContentFit, Element, Length,
};
use std::path::Path;
use tracing::warn;

/// Placeholder shown when the current file cannot be decoded.
pub const DECODE_FAILED_MESSAGE: &str = "Unable to display image";

/// What the display area currently shows.
#[derive(Debug, Clone, Default)]
pub enum Display {
    /// Nothing opened yet.
    #[default]
    Blank,
    Image(ImageData),
    /// The current file is in the list but could not be decoded.
    DecodeFailed,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    display: Display,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes `path` and replaces whatever was displayed.
    pub fn show(&mut self, path: &Path) {
        self.display = match media::load_image(path) {
            Ok(data) => Display::Image(data),
            Err(err) => {
                warn!(event = "viewer.decode_failed", path = ?path, error = %err);
                Display::DecodeFailed
            }
        };
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn has_image(&self) -> bool {
        matches!(self.display, Display::Image(_))
    }

    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.display {
            Display::Blank => Text::new("").into(),
            Display::Image(data) => image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .filter_method(image::FilterMethod::Linear)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Display::DecodeFailed => Text::new(DECODE_FAILED_MESSAGE)
                .size(typography::BODY)
                .color(palette::COMMENT)
                .into(),
        };

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}
