// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Smallest width accepted from the config file.
pub const MIN_WINDOW_WIDTH: u32 = 200;

/// Smallest height accepted from the config file.
pub const MIN_WINDOW_HEIGHT: u32 = 150;

/// Initial window position (top-left corner) in logical pixels.
pub const DEFAULT_WINDOW_POSITION: (f32, f32) = (100.0, 100.0);

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";
