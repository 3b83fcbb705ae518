// SPDX-License-Identifier: MPL-2.0
//! Dark/light display mode.
//!
//! The mode is a two-state machine. It is restored from the preference store
//! at load, flipped by the toggle control, and written back on every flip.

mod preference;

pub use preference::{ChartTextColor, ThemePreference, ThemeView};

use crate::config::{
    DARK_MARKER, DARK_MODE_DISABLED, DARK_MODE_ENABLED, ICON_MOON, ICON_SUN, LIGHT_MARKER,
    LOGO_DARK, LOGO_LIGHT,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads a stored preference. Only the exact `"enabled"` sentinel means dark.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some(DARK_MODE_ENABLED) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Value written to the preference store.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            ThemeMode::Light => DARK_MODE_DISABLED,
            ThemeMode::Dark => DARK_MODE_ENABLED,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Root marker present in this mode. The other mode's marker is absent.
    #[must_use]
    pub fn root_marker(self) -> &'static str {
        match self {
            ThemeMode::Light => LIGHT_MARKER,
            ThemeMode::Dark => DARK_MARKER,
        }
    }

    #[must_use]
    pub fn logo(self) -> &'static str {
        match self {
            ThemeMode::Light => LOGO_LIGHT,
            ThemeMode::Dark => LOGO_DARK,
        }
    }

    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemeMode::Light => ICON_SUN,
            ThemeMode::Dark => ICON_MOON,
        }
    }

    /// Chart label color readable on this mode's background.
    #[must_use]
    pub fn chart_text_color(self) -> TextColor {
        match self {
            ThemeMode::Light => TextColor::Black,
            ThemeMode::Dark => TextColor::White,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

/// Text color handed to the chart collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_sentinel_means_dark() {
        assert_eq!(ThemeMode::from_stored(Some("enabled")), ThemeMode::Dark);
        for value in [None, Some("disabled"), Some("Enabled"), Some(" enabled"), Some("")] {
            assert_eq!(ThemeMode::from_stored(value), ThemeMode::Light, "{value:?}");
        }
    }

    #[test]
    fn stored_value_round_trips() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_stored(Some(mode.stored_value())), mode);
        }
    }

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn markers_are_mutually_exclusive() {
        assert_ne!(ThemeMode::Light.root_marker(), ThemeMode::Dark.root_marker());
        assert_eq!(ThemeMode::Dark.root_marker(), "is-dark");
        assert_eq!(ThemeMode::Light.root_marker(), "is-white");
    }

    #[test]
    fn chart_text_contrasts_with_background() {
        assert_eq!(ThemeMode::Light.chart_text_color().as_str(), "black");
        assert_eq!(ThemeMode::Dark.chart_text_color().as_str(), "white");
    }
}
