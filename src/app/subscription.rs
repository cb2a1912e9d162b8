// SPDX-License-Identifier: MPL-2.0
//! Routes native events (keyboard, mouse wheel, window) to top-level
//! messages, depending on whether the viewer overlay is open.

use super::Message;
use crate::config::defaults::TICK_INTERVAL_MS;
use crate::ui::viewer;
use iced::{event, keyboard, mouse, time, Subscription};

/// Native event stream for the current interaction mode.
///
/// While browsing, the grid scrollable owns wheel and keyboard input, so only
/// window-level events (file drops, resizes) are routed here. While the viewer
/// overlay is open, keyboard navigation and wheel stepping take over and the
/// wheel is routed unconditionally to override the suspended scrollable.
pub fn events(viewer_open: bool) -> Subscription<Message> {
    if viewer_open {
        event::listen_with(|event, status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            // Wheel steps through the gallery; downward motion advances.
            if let event::Event::Mouse(mouse::Event::WheelScrolled { delta }) = &event {
                let vertical = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => {
                        *y
                    }
                };
                if vertical < 0.0 {
                    return Some(Message::Viewer(viewer::Message::AdvanceRequested));
                }
                if vertical > 0.0 {
                    return Some(Message::Viewer(viewer::Message::RetreatRequested));
                }
                return None;
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) = &event
            {
                let message = match named {
                    keyboard::key::Named::Escape => {
                        Some(Message::Viewer(viewer::Message::CloseRequested))
                    }
                    keyboard::key::Named::ArrowRight => {
                        Some(Message::Viewer(viewer::Message::AdvanceRequested))
                    }
                    keyboard::key::Named::ArrowLeft => {
                        Some(Message::Viewer(viewer::Message::RetreatRequested))
                    }
                    _ => None,
                };
                return match status {
                    event::Status::Ignored => message,
                    event::Status::Captured => None,
                };
            }

            None
        })
    } else {
        event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }

            if let event::Event::Window(iced::window::Event::Resized(size)) = &event {
                return Some(Message::WindowResized(*size));
            }

            None
        })
    }
}

/// Periodic tick driving the placeholder pulse, import progress repaints,
/// and notification auto-dismiss. Idle when nothing animates.
pub fn tick(
    is_loading: bool,
    has_notifications: bool,
    has_placeholders: bool,
) -> Subscription<Message> {
    if is_loading || has_notifications || has_placeholders {
        time::every(std::time::Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
