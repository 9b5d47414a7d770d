// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG, GIF, BMP).
//!
//! Decoding is synchronous: the viewer calls [`load_image`] on the event-loop
//! thread right after the navigator accepts a file, and keeps only the one
//! decoded image it is showing.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// The format is guessed from the file contents, not the name, so a PNG saved
/// as `photo.jpg` still decodes.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The bytes are not a decodable image ([`Error::Decode`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;

    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}
