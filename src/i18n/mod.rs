// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the dashboard.
//!
//! This module resolves the active UI language and looks up translated
//! messages. Translations are stored as Fluent files in `assets/i18n/` and
//! embedded at compile time.
//!
//! # Features
//!
//! - Locale resolution from a reported language tag (`"zh-TW"` selects `zh`)
//! - Runtime language switching with rejection of unsupported codes
//! - Three-tier lookup: requested language, default language, then the key itself

pub mod catalog;
pub mod languages;
pub mod resolver;

pub use catalog::TranslationTable;
pub use languages::{primary_subtag, DisplayNames, SupportedLanguages};
pub use resolver::{DocumentTranslator, LanguageLabel, LocaleResolver};

use crate::error::{Error, Result};
use unic_langid::LanguageIdentifier;

/// Builds a resolver over the embedded translations.
///
/// Every embedded language is supported, listed default first and the rest
/// in code order. Display names come from each language's `language-name`.
pub fn embedded_resolver(
    default_language: &str,
    translator: Box<dyn DocumentTranslator>,
    reported_locale: &str,
) -> Result<LocaleResolver> {
    let default = default_language.parse::<LanguageIdentifier>().map_err(|e| {
        Error::Catalog(format!("invalid default language {:?}: {}", default_language, e))
    })?;
    let table = TranslationTable::embedded(default.clone())?;

    let mut others: Vec<LanguageIdentifier> = table
        .languages()
        .filter(|language| **language != default)
        .cloned()
        .collect();
    others.sort_by_key(ToString::to_string);

    let codes = std::iter::once(default.clone()).chain(others);
    let languages = SupportedLanguages::new(codes, default)?;
    let names = DisplayNames::from_table(&languages, &table)?;
    LocaleResolver::initialize(languages, names, table, translator, reported_locale)
}
