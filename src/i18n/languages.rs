// SPDX-License-Identifier: MPL-2.0
//! Supported language set and display names.

use super::catalog::TranslationTable;
use crate::config::LANGUAGE_NAME_KEY;
use crate::error::{Error, Result};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Returns the leading segment of a language tag (`"en"` for `"en-US"`).
///
/// POSIX locales such as `zh_TW.UTF-8` use `_` instead of `-`, so both split.
#[must_use]
pub fn primary_subtag(locale: &str) -> &str {
    locale.trim().split(['-', '_']).next().unwrap_or_default()
}

/// Ordered, immutable set of languages with a designated default member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedLanguages {
    codes: Vec<LanguageIdentifier>,
    default: LanguageIdentifier,
}

impl SupportedLanguages {
    /// Builds the set, dropping duplicates while keeping first-seen order.
    ///
    /// Fails when `default` is not one of `codes`.
    pub fn new(
        codes: impl IntoIterator<Item = LanguageIdentifier>,
        default: LanguageIdentifier,
    ) -> Result<Self> {
        let mut unique: Vec<LanguageIdentifier> = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }

        if !unique.contains(&default) {
            return Err(Error::Catalog(format!(
                "default language {} is not in the supported set",
                default
            )));
        }

        Ok(Self {
            codes: unique,
            default,
        })
    }

    /// Builds the set from string codes.
    pub fn parse(codes: &[&str], default: &str) -> Result<Self> {
        let parse = |code: &str| {
            code.parse::<LanguageIdentifier>()
                .map_err(|e| Error::Catalog(format!("invalid language code {:?}: {}", code, e)))
        };
        let codes = codes.iter().copied().map(parse).collect::<Result<Vec<_>>>()?;
        Self::new(codes, parse(default)?)
    }

    #[must_use]
    pub fn default_language(&self) -> &LanguageIdentifier {
        &self.default
    }

    #[must_use]
    pub fn contains(&self, language: &LanguageIdentifier) -> bool {
        self.codes.contains(language)
    }

    /// Looks up a member by its string code.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&LanguageIdentifier> {
        let language = code.trim().parse::<LanguageIdentifier>().ok()?;
        self.codes.iter().find(|member| **member == language)
    }

    /// Maps a reported locale to a member: its primary subtag when supported,
    /// the default otherwise.
    #[must_use]
    pub fn resolve(&self, reported_locale: &str) -> &LanguageIdentifier {
        self.find(primary_subtag(reported_locale))
            .unwrap_or(&self.default)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageIdentifier> {
        self.codes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// Human-readable label for every supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNames {
    names: HashMap<LanguageIdentifier, String>,
}

impl DisplayNames {
    /// Fails when a supported language has no label.
    pub fn new<I, S>(languages: &SupportedLanguages, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = (LanguageIdentifier, S)>,
        S: Into<String>,
    {
        let names: HashMap<LanguageIdentifier, String> = names
            .into_iter()
            .map(|(language, name)| (language, name.into()))
            .collect();

        if let Some(missing) = languages.iter().find(|l| !names.contains_key(*l)) {
            return Err(Error::Catalog(format!(
                "no display name for language {}",
                missing
            )));
        }

        Ok(Self { names })
    }

    /// Reads each language's own `language-name` message from the table.
    pub fn from_table(languages: &SupportedLanguages, table: &TranslationTable) -> Result<Self> {
        let names = languages
            .iter()
            .filter_map(|language| {
                table
                    .lookup(language, LANGUAGE_NAME_KEY)
                    .map(|name| (language.clone(), name))
            })
            .collect::<Vec<_>>();
        Self::new(languages, names)
    }

    #[must_use]
    pub fn get(&self, language: &LanguageIdentifier) -> Option<&str> {
        self.names.get(language).map(String::as_str)
    }
}
