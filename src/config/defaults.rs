// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for locale and theme settings.
//!
//! # Categories
//!
//! - **Locale**: Default language and message keys with special meaning
//! - **Theme Storage**: Key and sentinel values in the preference store
//! - **Theme Assets**: Root markers, logo sources and toggle icon classes

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Language used when the reported locale is not supported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Message key holding a language's own display name.
pub const LANGUAGE_NAME_KEY: &str = "language-name";

// ==========================================================================
// Theme Storage Defaults
// ==========================================================================

/// Store key holding the dark mode preference.
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Stored value meaning dark mode. Any other value means light mode.
pub const DARK_MODE_ENABLED: &str = "enabled";

/// Stored value written when switching to light mode.
pub const DARK_MODE_DISABLED: &str = "disabled";

// ==========================================================================
// Theme Asset Defaults
// ==========================================================================

/// Root marker present while dark mode is active.
pub const DARK_MARKER: &str = "is-dark";

/// Root marker present while light mode is active.
pub const LIGHT_MARKER: &str = "is-white";

/// Logo shown on light backgrounds.
pub const LOGO_LIGHT: &str = "./img/logo.svg";

/// Logo shown on dark backgrounds.
pub const LOGO_DARK: &str = "./img/logo_white.svg";

/// Toggle icon shown in light mode.
pub const ICON_SUN: &str = "ts-icon is-sun-icon";

/// Toggle icon shown in dark mode.
pub const ICON_MOON: &str = "ts-icon is-moon-icon";
