// SPDX-License-Identifier: MPL-2.0
//! Persisted theme preference and the collaborators it drives.

use super::{TextColor, ThemeMode};
use crate::storage::PreferenceStore;

/// Page elements that follow the theme.
pub trait ThemeView {
    /// Adds (`present`) or removes a structural marker on the document root.
    fn set_root_marker(&mut self, marker: &str, present: bool);

    fn set_logo(&mut self, source: &str);

    fn set_toggle_icon(&mut self, icon: &str);
}

/// Chart whose label color must follow the theme.
pub trait ChartTextColor {
    fn set_text_color(&mut self, color: TextColor);
}

/// Theme state for one page session.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    key: String,
    view: Box<dyn ThemeView>,
    chart: Option<Box<dyn ChartTextColor>>,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Reads the stored mode and marks the document root before anything is shown.
    ///
    /// Absent or unrecognized values restore light mode.
    pub fn restore_on_load(store: S, view: Box<dyn ThemeView>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = ThemeMode::from_stored(store.get(&key).as_deref());
        tracing::debug!(%mode, key = %key, "restored theme preference");

        let mut preference = Self {
            store,
            key,
            view,
            chart: None,
            mode,
        };
        preference.mark_root();
        preference
    }

    /// Attaches the chart recolored by [`ThemePreference::apply_mode`].
    #[must_use]
    pub fn with_chart(mut self, chart: Box<dyn ChartTextColor>) -> Self {
        self.chart = Some(chart);
        self
    }

    /// Brings logo, icon and chart in line with the restored mode once the page is ready.
    pub fn finish_load(&mut self) {
        self.apply_mode(self.mode.is_dark());
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Swaps logo, toggle icon and chart text color. Does not persist.
    pub fn apply_mode(&mut self, is_dark: bool) {
        let mode = ThemeMode::from_dark(is_dark);
        self.view.set_logo(mode.logo());
        self.view.set_toggle_icon(mode.toggle_icon());
        if let Some(chart) = self.chart.as_mut() {
            chart.set_text_color(mode.chart_text_color());
        }
    }

    /// Flips the mode, persists it and updates the page. Returns the new mode.
    ///
    /// A failed write is logged; the page still switches.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mark_root();

        if let Err(error) = self.store.set(&self.key, self.mode.stored_value()) {
            tracing::warn!(%error, key = %self.key, "failed to persist theme preference");
        }

        self.apply_mode(self.mode.is_dark());
        tracing::info!(mode = %self.mode, "theme toggled");
        self.mode
    }

    fn mark_root(&mut self) {
        let current = self.mode;
        let other = current.toggled();
        self.view.set_root_marker(current.root_marker(), true);
        self.view.set_root_marker(other.root_marker(), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryStore;
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Page {
        markers: BTreeSet<String>,
        logo: Option<String>,
        icon: Option<String>,
        chart_colors: Vec<TextColor>,
    }

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Page>>);

    impl ThemeView for Shared {
        fn set_root_marker(&mut self, marker: &str, present: bool) {
            let mut page = self.0.borrow_mut();
            if present {
                page.markers.insert(marker.to_string());
            } else {
                page.markers.remove(marker);
            }
        }

        fn set_logo(&mut self, source: &str) {
            self.0.borrow_mut().logo = Some(source.to_string());
        }

        fn set_toggle_icon(&mut self, icon: &str) {
            self.0.borrow_mut().icon = Some(icon.to_string());
        }
    }

    impl ChartTextColor for Shared {
        fn set_text_color(&mut self, color: TextColor) {
            self.0.borrow_mut().chart_colors.push(color);
        }
    }

    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Io("read-only".to_string()))
        }
    }

    fn fresh(page: &Shared) -> ThemePreference<MemoryStore> {
        ThemePreference::restore_on_load(MemoryStore::new(), Box::new(page.clone()), "darkMode")
    }

    fn markers(page: &Shared) -> Vec<String> {
        page.0.borrow().markers.iter().cloned().collect()
    }

    #[test]
    fn empty_store_restores_light_with_light_marker() {
        let page = Shared::default();
        let theme = fresh(&page);

        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(markers(&page), vec!["is-white"]);
        assert!(page.0.borrow().logo.is_none());
    }

    #[test]
    fn enabled_value_restores_dark() {
        let page = Shared::default();
        let store = MemoryStore::from_iter([("darkMode", "enabled")]);
        let theme = ThemePreference::restore_on_load(store, Box::new(page.clone()), "darkMode");

        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(markers(&page), vec!["is-dark"]);
    }

    #[test]
    fn toggle_from_light_persists_enabled() {
        let page = Shared::default();
        let mut theme = fresh(&page);

        let mode = theme.toggle();

        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(theme.store().get("darkMode").as_deref(), Some("enabled"));
        assert_eq!(markers(&page), vec!["is-dark"]);
        assert_eq!(page.0.borrow().logo.as_deref(), Some("./img/logo_white.svg"));
        assert_eq!(page.0.borrow().icon.as_deref(), Some("ts-icon is-moon-icon"));
    }

    #[test]
    fn toggle_twice_restores_mode_and_stored_value() {
        let page = Shared::default();
        let store = MemoryStore::from_iter([("darkMode", "disabled")]);
        let mut theme = ThemePreference::restore_on_load(store, Box::new(page.clone()), "darkMode");

        theme.toggle();
        let mode = theme.toggle();

        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(theme.store().get("darkMode").as_deref(), Some("disabled"));
        assert_eq!(markers(&page), vec!["is-white"]);
    }

    #[test]
    fn apply_mode_recolors_attached_chart() {
        let page = Shared::default();
        let mut theme = fresh(&page).with_chart(Box::new(page.clone()));

        theme.finish_load();
        theme.toggle();

        assert_eq!(
            page.0.borrow().chart_colors,
            vec![TextColor::Black, TextColor::White]
        );
    }

    #[test]
    fn apply_mode_without_chart_updates_logo_and_icon() {
        let page = Shared::default();
        let mut theme = fresh(&page);

        theme.apply_mode(false);

        assert_eq!(page.0.borrow().logo.as_deref(), Some("./img/logo.svg"));
        assert_eq!(page.0.borrow().icon.as_deref(), Some("ts-icon is-sun-icon"));
        assert!(page.0.borrow().chart_colors.is_empty());
        assert_eq!(theme.store().get("darkMode"), None);
    }

    #[test]
    fn failed_write_still_switches_page() {
        let page = Shared::default();
        let mut theme =
            ThemePreference::restore_on_load(ReadOnlyStore, Box::new(page.clone()), "darkMode");

        assert_eq!(theme.toggle(), ThemeMode::Dark);
        assert_eq!(markers(&page), vec!["is-dark"]);
    }

    #[test]
    fn borrowed_store_sees_writes() {
        let page = Shared::default();
        let mut store = MemoryStore::new();
        {
            let mut theme =
                ThemePreference::restore_on_load(&mut store, Box::new(page), "themePref");
            theme.toggle();
        }
        assert_eq!(store.get("themePref").as_deref(), Some("enabled"));
    }
}
