// SPDX-License-Identifier: MPL-2.0
//! Toast system for transient user feedback.
//!
//! This module provides a non-intrusive feedback system following
//! toast/snackbar UX patterns. Toasts appear temporarily to inform users
//! about actions (settings saved, fetch failures, etc.) without blocking
//! interaction.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`widget`] - Widget rendering the toast overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toasts::{Manager, Severity, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Toast::warning("toast-mark-read-failed"));
//!
//! // In the view function, render the overlay
//! let overlay = widget::view_overlay(&manager, &i18n).map(Message::Toast);
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

pub mod manager;
pub mod toast;
pub mod widget;

pub use manager::{Manager, Message};
pub use toast::{Severity, Toast, ToastId};
