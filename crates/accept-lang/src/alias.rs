//! Locale normalization applied to header ranges before matching.
//!
//! Browsers and older platforms still send region-only Chinese tags such as
//! `zh-TW` or Microsoft's `zh-CHT`. Candidates are usually written with an
//! explicit script (`zh-Hant-TW`), so the default normalization rewrites the
//! legacy forms before the header is split into subtags.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Legacy locale (lower-case) to script-qualified locale.
static CANONICAL_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // .NET "zh-CHS"/"zh-CHT" neutral cultures.
        ("zh-chs", "zh-Hans"),
        ("zh-cht", "zh-Hant"),
        ("zh-cn", "zh-Hans-CN"),
        ("zh-hk", "zh-Hant-HK"),
        ("zh-mo", "zh-Hant-MO"),
        ("zh-sg", "zh-Hans-SG"),
        ("zh-tw", "zh-Hant-TW"),
    ])
});

/// Rewrites the locale part of a header range before it is split into subtags.
pub trait MapLocale {
    fn map_locale(&self, locale: &str) -> String;
}

impl<F> MapLocale for F
where
    F: Fn(&str) -> String,
{
    fn map_locale(&self, locale: &str) -> String {
        self(locale)
    }
}

/// Leaves locales untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Identity;

impl MapLocale for Identity {
    fn map_locale(&self, locale: &str) -> String {
        locale.to_owned()
    }
}

/// The built-in normalization, see [`map_locale`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultAliases;

impl MapLocale for DefaultAliases {
    fn map_locale(&self, locale: &str) -> String {
        map_locale(locale)
    }
}

/// Looks up the script-qualified form of a lower-case legacy locale.
pub fn canonical_alias(locale: &str) -> Option<&'static str> {
    CANONICAL_ALIASES.get(locale).copied()
}

/// Lower-cases `locale`, turns `_` into `-` and expands known legacy aliases.
///
/// ```
/// assert_eq!(accept_lang::map_locale("zh_TW"), "zh-Hant-TW");
/// assert_eq!(accept_lang::map_locale("en-US"), "en-us");
/// ```
pub fn map_locale(locale: &str) -> String {
    let normalized = normalize(locale);
    match canonical_alias(&normalized) {
        Some(canonical) => canonical.to_owned(),
        None => normalized,
    }
}

fn normalize(locale: &str) -> String {
    locale.to_lowercase().replace('_', "-")
}

/// Caller-defined aliases layered over the built-in table.
///
/// Keys are normalized like [`map_locale`] input, so `en_UK` and `en-uk`
/// register the same alias. Values are used as given.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliasMap {
    entries: HashMap<String, String>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an alias, returning the canonical locale it replaced.
    pub fn insert(&mut self, alias: &str, canonical: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize(alias), canonical.into())
    }

    /// Returns the caller-defined target for `alias`, ignoring the built-in table.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(&normalize(alias)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AliasMap
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut aliases = Self::new();
        for (alias, canonical) in iter {
            aliases.insert(alias.as_ref(), canonical);
        }
        aliases
    }
}

impl MapLocale for AliasMap {
    fn map_locale(&self, locale: &str) -> String {
        let normalized = normalize(locale);
        if let Some(canonical) = self.entries.get(&normalized) {
            return canonical.clone();
        }
        match canonical_alias(&normalized) {
            Some(canonical) => canonical.to_owned(),
            None => normalized,
        }
    }
}
