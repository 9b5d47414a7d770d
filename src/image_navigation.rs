// SPDX-License-Identifier: MPL-2.0
//! Image navigation module: the viewing session and its two operations.
//!
//! [`ImageNavigator`] owns the session state (current image path, the sorted
//! sibling list and the current index). [`ImageNavigator::open`] rescans the
//! image's directory on every call, so stepping backwards with
//! [`ImageNavigator::navigate_previous`] always reflects what is on disk at
//! that moment rather than a cached list.

use crate::directory_scanner::{DirectoryLister, ImageList};
use crate::paths;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Status text shown when the opened file is not among the directory's images.
pub const NOT_IN_LIST_MESSAGE: &str = "Selected file is not in the current directory's list.";

/// Formats the status text for a zero-based `index` in a list of `count` images.
pub fn position_status(index: usize, count: usize) -> String {
    format!(
        "Image {} of {} in directory (Sorted naturally)",
        index + 1,
        count
    )
}

/// Coarse view of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorState {
    NoImageOpen,
    ImageOpen,
}

/// Result of an open request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The image is now current.
    Opened {
        path: PathBuf,
        index: usize,
        count: usize,
    },
    /// The file was not found among the directory's recognized images; the
    /// displayed image stays as it was.
    NotInList { path: PathBuf },
}

impl OpenOutcome {
    /// Status bar text describing this outcome.
    pub fn status_text(&self) -> String {
        match self {
            OpenOutcome::Opened { index, count, .. } => position_status(*index, *count),
            OpenOutcome::NotInList { .. } => NOT_IN_LIST_MESSAGE.to_string(),
        }
    }

    pub fn is_opened(&self) -> bool {
        matches!(self, OpenOutcome::Opened { .. })
    }
}

/// Session state for the viewer.
///
/// Invariant: when `current_image_path` is set it is present in `image_list`
/// and the list's current index is its position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageNavigator {
    /// Images in the current directory, as of the last scan.
    image_list: ImageList,
    /// Path to the currently displayed image.
    current_image_path: Option<PathBuf>,
}

impl ImageNavigator {
    /// Creates a new empty ImageNavigator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `path`: normalizes it, rescans its directory and makes it current
    /// if it is one of the directory's recognized images.
    ///
    /// When the file is not in the fresh listing (or the directory cannot be
    /// read) the current image is kept. The fresh listing is still adopted if
    /// it contains the current image, so later navigation does not step onto
    /// files that have disappeared.
    pub fn open(&mut self, path: &Path, lister: &dyn DirectoryLister) -> OpenOutcome {
        let path = match paths::absolutize(path) {
            Ok(path) => path,
            Err(err) => {
                warn!(event = "navigator.open_failed", path = ?path, error = %err);
                return OpenOutcome::NotInList {
                    path: path.to_path_buf(),
                };
            }
        };

        let scanned = match ImageList::scan_directory(&path, lister) {
            Ok(list) => list,
            Err(err) => {
                warn!(event = "navigator.scan_failed", path = ?path, error = %err);
                return OpenOutcome::NotInList { path };
            }
        };

        match scanned.current_index() {
            Some(index) => {
                let count = scanned.len();
                self.image_list = scanned;
                self.current_image_path = Some(path.clone());
                info!(event = "navigator.opened", path = ?path, index, count);
                OpenOutcome::Opened { path, index, count }
            }
            None => {
                info!(event = "navigator.not_in_list", path = ?path);
                for available in scanned.paths() {
                    debug!(event = "navigator.available", path = ?available);
                }
                self.refresh_from(scanned);
                OpenOutcome::NotInList { path }
            }
        }
    }

    /// Opens the image before the current one, wrapping from the first image to
    /// the last. Returns `None` without touching anything when no images are
    /// loaded.
    pub fn navigate_previous(&mut self, lister: &dyn DirectoryLister) -> Option<OpenOutcome> {
        let previous = self.peek_previous()?.to_path_buf();
        debug!(event = "navigator.previous", path = ?previous);
        Some(self.open(&previous, lister))
    }

    /// Adopts `scanned` in place of the current list when it still contains the
    /// current image.
    fn refresh_from(&mut self, mut scanned: ImageList) {
        let Some(current) = self.current_image_path.as_deref() else {
            return;
        };
        if let Some(index) = scanned.position(current) {
            debug!(
                event = "navigator.list_refreshed",
                count = scanned.len(),
                index
            );
            scanned.set_current(current);
            self.image_list = scanned;
        }
    }

    /// Returns the path to the current image, if set.
    pub fn current_image_path(&self) -> Option<&Path> {
        self.current_image_path.as_deref()
    }

    /// Returns the current index in the image list, if set.
    pub fn current_index(&self) -> Option<usize> {
        self.image_list.current_index()
    }

    /// Returns the sorted image paths of the current directory.
    pub fn image_files(&self) -> &[PathBuf] {
        self.image_list.paths()
    }

    /// Returns the path the next [`navigate_previous`](Self::navigate_previous)
    /// call will open.
    pub fn peek_previous(&self) -> Option<&Path> {
        self.image_list.previous()
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.image_list.len()
    }

    /// Checks if the image list is empty.
    pub fn is_empty(&self) -> bool {
        self.image_list.is_empty()
    }

    pub fn state(&self) -> NavigatorState {
        if self.current_image_path.is_some() {
            NavigatorState::ImageOpen
        } else {
            NavigatorState::NoImageOpen
        }
    }

    /// Status text for the current position, or `None` when nothing is open.
    pub fn status_text(&self) -> Option<String> {
        let index = self.image_list.current_index()?;
        Some(position_status(index, self.image_list.len()))
    }

    /// Directory of the current image, used as the file dialog's start location.
    pub fn current_directory(&self) -> Option<&Path> {
        self.current_image_path.as_deref().and_then(Path::parent)
    }
}
