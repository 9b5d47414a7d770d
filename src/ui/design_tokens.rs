// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the One Dark palette plus spacing, typography and radius
//! scales shared by every widget.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    /// Window, menu bar and menu popup background (`#282c34`).
    pub const BACKGROUND: Color = Color::from_rgb8(0x28, 0x2c, 0x34);
    /// Default foreground text (`#abb2bf`).
    pub const FOREGROUND: Color = Color::from_rgb8(0xab, 0xb2, 0xbf);
    /// Selected / hovered menu item (`#3e4451`).
    pub const SELECTION: Color = Color::from_rgb8(0x3e, 0x44, 0x51);
    /// Slightly darker gutter used for the status bar (`#21252b`).
    pub const GUTTER: Color = Color::from_rgb8(0x21, 0x25, 0x2b);
    /// Muted text such as shortcut hints (`#5c6370`).
    pub const COMMENT: Color = Color::from_rgb8(0x5c, 0x63, 0x70);

    pub const BLUE: Color = Color::from_rgb8(0x61, 0xaf, 0xef);
    pub const GREEN: Color = Color::from_rgb8(0x98, 0xc3, 0x79);
    pub const YELLOW: Color = Color::from_rgb8(0xe5, 0xc0, 0x7b);
    pub const RED: Color = Color::from_rgb8(0xe0, 0x6c, 0x75);
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Width of the File menu popup.
    pub const MENU_WIDTH: f32 = 200.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
}
