// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Only active while toasts are showing, so an idle application generates no
/// wakeups.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the automatic inbox refresh subscription.
///
/// An interval of zero disables automatic refresh entirely.
pub fn create_refresh_subscription(interval_secs: u64) -> Subscription<Message> {
    if interval_secs == 0 {
        Subscription::none()
    } else {
        time::every(Duration::from_secs(interval_secs)).map(|_| Message::FetchRequested)
    }
}
