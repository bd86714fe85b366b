// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of toasts.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::toast::{Toast, ToastId};
use std::collections::VecDeque;

/// Maximum number of toasts visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

/// Manages the toast queue and visible toasts.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible toasts (newest first).
    visible: VecDeque<Toast>,
    /// Queued toasts waiting to be displayed.
    queue: VecDeque<Toast>,
}

impl Manager {
    /// Creates a new empty toast manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new toast to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` toasts are showing, it's displayed
    /// immediately. Otherwise, it's added to the queue and shown when space
    /// becomes available.
    pub fn push(&mut self, toast: Toast) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(toast);
        } else {
            self.queue.push_back(toast);
        }
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        if let Some(pos) = self.visible.iter().position(|t| t.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any toasts that have expired.
    ///
    /// Should be called periodically (e.g., every 100-500ms) to handle
    /// auto-dismiss.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<ToastId> = self
            .visible
            .iter()
            .filter(|t| t.should_auto_dismiss())
            .map(Toast::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible toasts.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns the number of queued toasts.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any toasts (visible or queued).
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Clears all toasts (visible and queued).
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    /// Promotes toasts from the queue to visible while there is space.
    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            if let Some(toast) = self.queue.pop_front() {
                self.visible.push_back(toast);
            } else {
                break;
            }
        }
    }
}
