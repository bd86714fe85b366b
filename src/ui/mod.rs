// SPDX-License-Identifier: MPL-2.0
//! UI components and visual foundations.

pub mod design_tokens;
pub mod inbox;
pub mod settings;
pub mod theming;
pub mod toasts;
