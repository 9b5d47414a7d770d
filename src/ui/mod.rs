// SPDX-License-Identifier: MPL-2.0
//! User interface: menu bar, image display, status bar and the One Dark theme.

pub mod design_tokens;
pub mod menu_bar;
pub mod status_bar;
pub mod theme;
pub mod viewer;
