// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles and locale negotiation.

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl fmt::Debug for I18n {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(&SiteConfig::default())
    }
}

impl I18n {
    /// Loads the embedded translations and picks a locale for `config`.
    ///
    /// Only an explicit `language` switches away from [`DEFAULT_LOCALE`];
    /// the visitor's browser or system locale is never consulted.
    ///
    /// A translation file that fails to parse is skipped with a warning so a
    /// broken locale never takes the page down.
    pub fn new(config: &SiteConfig) -> Self {
        let sources = Asset::iter().filter_map(|file| {
            let locale = file.strip_suffix(".ftl")?.to_string();
            let content = Asset::get(&file)?;
            Some((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()))
        });

        let mut i18n = Self::empty();
        for (locale, source) in sources {
            if let Err(err) = i18n.add_locale(&locale, source) {
                tracing::warn!(%locale, error = %err, "skipping translation file");
            }
        }

        if let Some(locale) = resolve_locale(config.language.iter(), &i18n.available_locales) {
            i18n.current_locale = locale;
        }
        tracing::debug!(locale = %i18n.current_locale, "selected locale");
        i18n
    }

    /// Builds a catalogue from in-memory Fluent sources, keyed by locale tag.
    ///
    /// The first locale becomes the current one.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut i18n = Self::empty();
        for (locale, source) in sources {
            i18n.add_locale(locale, source.to_string())?;
        }
        if let Some(first) = i18n.available_locales.first() {
            i18n.current_locale = first.clone();
        }
        Ok(i18n)
    }

    fn empty() -> Self {
        Self {
            bundles: HashMap::new(),
            available_locales: Vec::new(),
            current_locale: LanguageIdentifier::default(),
        }
        .with_default_locale()
    }

    fn with_default_locale(mut self) -> Self {
        if let Ok(locale) = DEFAULT_LOCALE.parse() {
            self.current_locale = locale;
        }
        self
    }

    fn add_locale(&mut self, locale: &str, source: String) -> Result<()> {
        let locale: LanguageIdentifier = locale
            .parse()
            .map_err(|err| Error::I18n(format!("invalid locale {locale:?}: {err}")))?;
        let resource = FluentResource::try_new(source)
            .map_err(|(_, errors)| Error::I18n(format!("{locale}: {} syntax error(s)", errors.len())))?;

        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        // Messages end up in text nodes, Unicode isolation marks would show.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::I18n(format!("{locale}: {} duplicate message(s)", errors.len())))?;

        self.bundles.insert(locale.clone(), bundle);
        if !self.available_locales.contains(&locale) {
            self.available_locales.push(locale);
        }
        Ok(())
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Picks the first requested tag that is available, exactly or by language.
fn resolve_locale<'a>(
    requested: impl IntoIterator<Item = &'a String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    requested.into_iter().find_map(|tag| {
        let wanted: LanguageIdentifier = tag.parse().ok()?;
        available
            .iter()
            .find(|locale| **locale == wanted)
            .or_else(|| available.iter().find(|locale| locale.language == wanted.language))
            .cloned()
    })
}
