// SPDX-License-Identifier: MPL-2.0
//! Active language tracking and translated string lookup.

use super::catalog::TranslationTable;
use super::languages::{DisplayNames, SupportedLanguages};
use crate::error::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Applies translations to every tagged element of the document.
pub trait DocumentTranslator {
    fn change_language(&mut self, language: &LanguageIdentifier);
}

/// Visible "current language" label.
pub trait LanguageLabel {
    fn show_language_name(&mut self, name: &str);
}

/// Locale state for one page session.
///
/// Holds the active language and drives the document translator whenever it
/// changes. Lookups never fail: see [`LocaleResolver::translate_in`].
pub struct LocaleResolver {
    languages: SupportedLanguages,
    names: DisplayNames,
    table: TranslationTable,
    translator: Box<dyn DocumentTranslator>,
    label: Option<Box<dyn LanguageLabel>>,
    active: LanguageIdentifier,
}

impl LocaleResolver {
    /// Resolves the active language from a reported locale such as `"zh-TW"`
    /// and translates the document into it.
    ///
    /// The primary subtag is used when supported, the default language otherwise.
    /// Fails only when `table` does not match `languages`.
    pub fn initialize(
        languages: SupportedLanguages,
        names: DisplayNames,
        table: TranslationTable,
        translator: Box<dyn DocumentTranslator>,
        reported_locale: &str,
    ) -> Result<Self> {
        if table.default_language() != languages.default_language() {
            return Err(Error::Catalog(format!(
                "table default {} differs from supported default {}",
                table.default_language(),
                languages.default_language()
            )));
        }
        if let Some(missing) = languages.iter().find(|l| !table.has_language(l)) {
            return Err(Error::Catalog(format!(
                "no translations for supported language {}",
                missing
            )));
        }

        let active = languages.resolve(reported_locale).clone();
        tracing::debug!(reported_locale, language = %active, "resolved active language");

        let mut resolver = Self {
            languages,
            names,
            table,
            translator,
            label: None,
            active,
        };
        resolver.reapply_translations();
        Ok(resolver)
    }

    /// Attaches the label updated by [`LocaleResolver::set_active_language`].
    #[must_use]
    pub fn with_label(mut self, label: Box<dyn LanguageLabel>) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn active_language(&self) -> &LanguageIdentifier {
        &self.active
    }

    #[must_use]
    pub fn active_language_name(&self) -> &str {
        self.names.get(&self.active).unwrap_or_default()
    }

    #[must_use]
    pub fn languages(&self) -> &SupportedLanguages {
        &self.languages
    }

    #[must_use]
    pub fn display_names(&self) -> &DisplayNames {
        &self.names
    }

    /// Switches to a user-selected language.
    ///
    /// Codes outside the supported set are rejected and leave the current
    /// language, label and document untouched.
    pub fn set_active_language(&mut self, code: &str) -> Result<()> {
        let Some(language) = self.languages.find(code).cloned() else {
            tracing::warn!(code, "rejected unsupported language selection");
            return Err(Error::UnsupportedLanguage(code.to_string()));
        };

        tracing::info!(language = %language, "switching language");
        self.active = language;
        if let Some(label) = self.label.as_mut() {
            label.show_language_name(self.names.get(&self.active).unwrap_or_default());
        }
        self.reapply_translations();
        Ok(())
    }

    /// Translates the document again, e.g. after new fragments were inserted.
    pub fn reapply_translations(&mut self) {
        self.translator.change_language(&self.active);
    }

    /// Translates `key` into the active language.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.translate_in(key, &self.active)
    }

    /// Translates `key` into `language`.
    ///
    /// Falls back to the default language, then to `key` itself so a missing
    /// translation stays visible instead of rendering empty.
    #[must_use]
    pub fn translate_in(&self, key: &str, language: &LanguageIdentifier) -> String {
        self.table.translate(language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Recorder {
        fn calls(&self) -> Vec<String> {
            self.0.borrow().clone()
        }
    }

    impl DocumentTranslator for Recorder {
        fn change_language(&mut self, language: &LanguageIdentifier) {
            self.0.borrow_mut().push(language.to_string());
        }
    }

    impl LanguageLabel for Recorder {
        fn show_language_name(&mut self, name: &str) {
            self.0.borrow_mut().push(name.to_string());
        }
    }

    fn lang(code: &str) -> LanguageIdentifier {
        code.parse().unwrap()
    }

    fn resolver(locale: &str, translator: &Recorder) -> LocaleResolver {
        let languages = SupportedLanguages::parse(&["en", "zh"], "en").unwrap();
        let table = TranslationTable::embedded(lang("en")).unwrap();
        let names = DisplayNames::from_table(&languages, &table).unwrap();
        LocaleResolver::initialize(languages, names, table, Box::new(translator.clone()), locale)
            .unwrap()
    }

    #[test]
    fn initialize_picks_supported_primary_subtag() {
        let translator = Recorder::default();
        let resolver = resolver("zh-TW", &translator);
        assert_eq!(resolver.active_language(), &lang("zh"));
        assert_eq!(translator.calls(), vec!["zh"]);
    }

    #[test]
    fn initialize_falls_back_to_default() {
        let translator = Recorder::default();
        let resolver = resolver("fr-FR", &translator);
        assert_eq!(resolver.active_language(), &lang("en"));
        assert_eq!(translator.calls(), vec!["en"]);
    }

    #[test]
    fn initialize_rejects_mismatched_default() {
        let languages = SupportedLanguages::parse(&["en", "zh"], "zh").unwrap();
        let table = TranslationTable::embedded(lang("en")).unwrap();
        let names = DisplayNames::from_table(&languages, &table).unwrap();
        let result = LocaleResolver::initialize(
            languages,
            names,
            table,
            Box::new(Recorder::default()),
            "en",
        );
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn set_active_language_updates_label_and_document() {
        let translator = Recorder::default();
        let label = Recorder::default();
        let mut resolver = resolver("en-US", &translator).with_label(Box::new(label.clone()));

        resolver.set_active_language("zh").unwrap();

        assert_eq!(resolver.active_language(), &lang("zh"));
        assert_eq!(resolver.active_language_name(), "中文（正體）");
        assert_eq!(label.calls(), vec!["中文（正體）"]);
        assert_eq!(translator.calls(), vec!["en", "zh"]);
    }

    #[test]
    fn set_active_language_rejects_unsupported_code() {
        let translator = Recorder::default();
        let label = Recorder::default();
        let mut resolver = resolver("zh", &translator).with_label(Box::new(label.clone()));

        let result = resolver.set_active_language("fr");

        assert_eq!(result, Err(Error::UnsupportedLanguage("fr".to_string())));
        assert_eq!(resolver.active_language(), &lang("zh"));
        assert!(label.calls().is_empty());
        assert_eq!(translator.calls(), vec!["zh"]);
    }

    #[test]
    fn reapply_translations_repeats_current_language() {
        let translator = Recorder::default();
        let mut resolver = resolver("zh", &translator);
        resolver.reapply_translations();
        resolver.reapply_translations();
        assert_eq!(translator.calls(), vec!["zh", "zh", "zh"]);
    }

    #[test]
    fn translate_uses_active_language() {
        let translator = Recorder::default();
        let mut resolver = resolver("zh-TW", &translator);
        assert_eq!(resolver.translate("raid_device_created_succ"), "RAID 裝置已建立");

        resolver.set_active_language("en").unwrap();
        assert_eq!(resolver.translate("raid_device_created_succ"), "RAID device created");
    }

    #[test]
    fn translate_in_echoes_unknown_key() {
        let translator = Recorder::default();
        let resolver = resolver("en", &translator);
        assert_eq!(resolver.translate_in("unknown_key", &lang("zh")), "unknown_key");
        assert_eq!(
            resolver.translate_in("raid_device_deleted_succ", &lang("zh")),
            "RAID 裝置已刪除"
        );
    }
}
