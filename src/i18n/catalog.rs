// SPDX-License-Identifier: MPL-2.0
//! Translation table backed by one Fluent bundle per language.
//!
//! Sources are plain `key = value` Fluent files. The default language's file
//! must define every key any other language defines, since it is the fallback
//! source for missing translations.

use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct TranslationTable {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    keys: HashMap<LanguageIdentifier, BTreeSet<String>>,
    default_language: LanguageIdentifier,
}

impl std::fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationTable")
            .field("keys", &self.keys)
            .field("default_language", &self.default_language)
            .finish()
    }
}

impl TranslationTable {
    /// Loads the `.ftl` files compiled into the binary from `assets/i18n/`.
    pub fn embedded(default_language: LanguageIdentifier) -> Result<Self> {
        let mut sources = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let locale = locale_str
                .parse::<LanguageIdentifier>()
                .map_err(|e| Error::Catalog(format!("{}: {}", filename, e)))?;
            if let Some(content) = Asset::get(filename) {
                sources.push((
                    locale,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                ));
            }
        }

        Self::from_sources(default_language, sources)
    }

    /// Builds a table from `(language, ftl source)` pairs.
    ///
    /// Fails on unparsable sources, a language given twice, a missing default
    /// language, or a key that the default language does not define.
    pub fn from_sources<I, S>(default_language: LanguageIdentifier, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (LanguageIdentifier, S)>,
        S: Into<String>,
    {
        let mut bundles = HashMap::new();
        let mut keys = HashMap::new();

        for (language, source) in sources {
            if bundles.contains_key(&language) {
                return Err(Error::Catalog(format!(
                    "language {} has more than one source",
                    language
                )));
            }

            let source = source.into();
            let candidates = message_ids(&source);
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Catalog(format!("{}: {} parse error(s)", language, errors.len()))
            })?;

            let mut bundle = FluentBundle::new(vec![language.clone()]);
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| Error::Catalog(format!("{}: {:?}", language, errors)))?;

            let defined: BTreeSet<String> = candidates
                .into_iter()
                .filter(|id| bundle.has_message(id))
                .collect();

            keys.insert(language.clone(), defined);
            bundles.insert(language, bundle);
        }

        let Some(default_keys) = keys.get(&default_language) else {
            return Err(Error::Catalog(format!(
                "no source for default language {}",
                default_language
            )));
        };

        for (language, language_keys) in &keys {
            if let Some(missing) = language_keys.difference(default_keys).next() {
                return Err(Error::Catalog(format!(
                    "{} defines `{}` but default language {} does not",
                    language, missing, default_language
                )));
            }
        }

        Ok(Self {
            bundles,
            keys,
            default_language,
        })
    }

    #[must_use]
    pub fn default_language(&self) -> &LanguageIdentifier {
        &self.default_language
    }

    #[must_use]
    pub fn has_language(&self, language: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(language)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.bundles.keys()
    }

    /// Keys defined for `language`, in sorted order.
    pub fn keys(&self, language: &LanguageIdentifier) -> impl Iterator<Item = &str> {
        self.keys
            .get(language)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    /// Single-tier lookup: the value of `key` in `language` only.
    #[must_use]
    pub fn lookup(&self, language: &LanguageIdentifier, key: &str) -> Option<String> {
        let bundle = self.bundles.get(language)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            None
        }
    }

    /// Looks up `key` in `language`, then in the default language, then
    /// returns `key` itself.
    #[must_use]
    pub fn translate(&self, language: &LanguageIdentifier, key: &str) -> String {
        self.lookup(language, key)
            .or_else(|| self.lookup(&self.default_language, key))
            .unwrap_or_else(|| key.to_string())
    }
}

/// Identifiers of top-level `id = value` lines.
///
/// Messages start in the first column; comments, terms and continuation
/// lines do not. The result is confirmed against the parsed bundle.
fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let (id, _) = line.split_once('=')?;
            let id = id.trim_end();
            let mut chars = id.chars();
            let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            valid.then(|| id.to_string())
        })
        .collect()
}
