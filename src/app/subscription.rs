// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes the two native inputs the viewer reacts to: mouse wheel scrolling
//! (navigation) and the open shortcut.

use super::Message;
use iced::{event, keyboard, mouse, Subscription};

/// Creates the subscription turning native events into application messages.
///
/// Wheel events are routed even when a widget captured them; the shortcut is
/// only routed when no widget handled the key press.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            Some(Message::WheelScrolled(delta))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Character(ref c),
            modifiers,
            ..
        }) if status == event::Status::Ignored && is_open_shortcut(c.as_str(), modifiers) => {
            Some(Message::OpenShortcut)
        }
        _ => None,
    })
}

/// `Ctrl+O` (`Cmd+O` on macOS), with no other modifier.
pub fn is_open_shortcut(key: &str, modifiers: keyboard::Modifiers) -> bool {
    key.eq_ignore_ascii_case("o") && modifiers.command() && !modifiers.alt()
}

/// Whether the wheel was rotated up (away from the user).
///
/// Only the vertical component counts; horizontal scrolling is ignored.
pub fn is_scroll_up(delta: mouse::ScrollDelta) -> bool {
    match delta {
        mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => y > 0.0,
    }
}
