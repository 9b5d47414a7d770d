// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::ui::menu_bar;
use iced::mouse::ScrollDelta;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    MenuBar(menu_bar::Message),
    /// `Ctrl+O` / `Cmd+O` was pressed.
    OpenShortcut,
    /// Result from the open file dialog; `None` when the user cancelled.
    OpenFileDialogResult(Option<PathBuf>),
    WheelScrolled(ScrollDelta),
}
