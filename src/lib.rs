// SPDX-License-Identifier: MPL-2.0
//! `webui_prefs` holds the presentation preferences of a storage dashboard web UI.
//!
//! It resolves the UI language from a reported locale and looks up translated
//! messages with graceful fallback, and it restores, toggles and persists the
//! dark/light theme while keeping page elements in sync.

pub mod config;
pub mod error;
pub mod i18n;
pub mod paths;
pub mod storage;
pub mod theme;
