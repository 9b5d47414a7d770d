// SPDX-License-Identifier: MPL-2.0
//! Decoding of image files for display.

pub mod image;

pub use image::{load_image, ImageData};
