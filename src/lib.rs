// SPDX-License-Identifier: MPL-2.0
//! `onedark_viewer` is a minimal image viewer built with the Iced GUI framework.
//!
//! It opens one image at a time, shows it scaled to fit the window, and steps
//! backwards through the other images of the same directory (in natural sort
//! order) when the mouse wheel is scrolled up.

#![doc(html_root_url = "https://docs.rs/onedark_viewer/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod image_navigation;
pub mod media;
pub mod natural_sort;
pub mod paths;
pub mod ui;
