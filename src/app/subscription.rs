// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer, touch and keyboard input reaches the comparison canvas directly
//! through its `update`; only window lifecycle events are routed here.

use super::Message;
use crate::ui::comparison;
use crate::ui::widgets::animated_spinner::TICK_INTERVAL;
use iced::{event, time, Subscription};

/// Forwards window close requests so the slider can be torn down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Drives the loading spinner while images are pending.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(|_| Message::Comparison(comparison::Message::SpinnerTick))
    } else {
        Subscription::none()
    }
}
