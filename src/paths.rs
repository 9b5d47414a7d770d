// SPDX-License-Identifier: MPL-2.0
//! Path helpers: absolute path normalization and the application config directory.
//!
//! Every path the navigator compares goes through [`absolutize`] so that a file
//! picked in the dialog, a path rebuilt from a directory listing and a path
//! taken from the sorted list all have the same textual form.
//!
//! Normalization is lexical: relative paths are joined to the current
//! directory, `.` components are dropped and `..` components remove the
//! preceding component. Symbolic links are not resolved.

use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Application name used for directory naming.
const APP_NAME: &str = "OneDarkViewer";

/// Returns the absolute, lexically normalized form of `path`.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the path is empty or the current
/// directory cannot be determined for a relative path.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    Ok(normalize_lexically(&absolute))
}

/// Removes `.` components and folds `..` into the preceding component.
///
/// A `..` at the root stays at the root, as it does on every platform.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Returns the application config directory.
///
/// - Linux: `~/.config/OneDarkViewer/`
/// - macOS: `~/Library/Application Support/OneDarkViewer/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\OneDarkViewer\`
///
/// Returns `None` if the platform config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory, preferring `override_path`.
///
/// The override is used as-is (no app name appended) so tests can point the
/// config loader at a temporary directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
