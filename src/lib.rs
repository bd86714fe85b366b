// SPDX-License-Identifier: MPL-2.0
//! `iced_inbox` is a small desktop notification-center client built with the
//! Iced GUI framework.
//!
//! It fetches the user's notifications from a backend API into a reactive
//! in-memory store, renders them as an inbox, and marks individual
//! notifications read on click — with internationalization via Fluent and
//! user preferences persisted to a TOML config file.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod store;
pub mod ui;
