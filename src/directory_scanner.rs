// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module lists a directory through a [`DirectoryLister`], keeps the
//! entries whose names end with one of the recognized image suffixes, and sorts
//! the resulting absolute paths in natural, case-insensitive order.
//!
//! The filter is a plain suffix test on the file name: `photo.png` and
//! `xyzpng` both match, while `photo.PNG` does not.

use crate::error::{Error, Result};
use crate::natural_sort;
use crate::paths;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// File name suffixes recognized as images (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Enumerates the file names contained in a directory.
pub trait DirectoryLister {
    /// Returns the names of the directory's entries, in no particular order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read.
    fn list_file_names(&self, directory: &Path) -> Result<Vec<OsString>>;
}

/// [`DirectoryLister`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_file_names(&self, directory: &Path) -> Result<Vec<OsString>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            names.push(entry?.file_name());
        }
        Ok(names)
    }
}

/// Returns `true` if the file name ends with a recognized image suffix.
pub fn has_image_suffix(file_name: &OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| bytes.ends_with(ext.as_bytes()))
}

/// Naturally sorted list of the images in one directory, with the position of
/// the file the scan started from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans the directory containing `current_file` for images and sorts them.
    ///
    /// `current_file` is expected to be absolute and normalized (see
    /// [`paths::absolutize`]). If it is not among the recognized images the
    /// scan still succeeds but `current_index` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if `current_file` has no parent directory or the
    /// directory cannot be listed.
    pub fn scan_directory(current_file: &Path, lister: &dyn DirectoryLister) -> Result<Self> {
        let parent = current_file
            .parent()
            .ok_or_else(|| Error::Io("No parent directory".into()))?;

        let mut image_files: Vec<PathBuf> = lister
            .list_file_names(parent)?
            .into_iter()
            .filter(|name| has_image_suffix(name))
            .map(|name| paths::normalize_lexically(&parent.join(name)))
            .collect();

        natural_sort::sort_paths(&mut image_files);

        let current_index = image_files.iter().position(|p| p == current_file);

        Ok(Self {
            image_files,
            current_index,
        })
    }

    /// Returns the current image path.
    pub fn current(&self) -> Option<&Path> {
        self.current_index
            .and_then(|idx| self.image_files.get(idx))
            .map(|p| p.as_path())
    }

    /// Returns the index before the current one, wrapping from the first image
    /// to the last.
    pub fn previous_index(&self) -> Option<usize> {
        let idx = self.current_index?;
        if idx > 0 {
            Some(idx - 1)
        } else {
            self.image_files.len().checked_sub(1)
        }
    }

    /// Returns the previous image path, wrapping around to the end.
    pub fn previous(&self) -> Option<&Path> {
        self.previous_index().and_then(|idx| self.get(idx))
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.image_files.get(index).map(|p| p.as_path())
    }

    /// Updates the current index to the given path if it exists in the list.
    pub fn set_current(&mut self, path: &Path) {
        self.current_index = self.position(path);
    }

    /// Returns the position of `path` in the list.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.image_files.iter().position(|p| p == path)
    }

    /// Returns the current index if set.
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns all image paths in sorted order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}
