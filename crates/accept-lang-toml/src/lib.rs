#![doc = include_str!("../README.md")]

use accept_lang::{AliasMap, PickOptions};
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up by [`NegotiationConfig::read_from_dir`] and
/// [`NegotiationConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "accept-lang.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("accept-lang.toml configuration file not found")]
    NotFound,
    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),
    /// `supported` is empty or only holds empty strings.
    #[error("No supported locales configured")]
    NoSupportedLocales,
    /// `default_locale` is not one of the supported locales.
    #[error("Default locale '{name}' is not listed in supported locales")]
    UnknownDefaultLocale {
        /// The configured default locale.
        name: String,
    },
}

/// A negotiation profile read from `accept-lang.toml`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct NegotiationConfig {
    /// Candidate locales in priority order.
    pub supported: Vec<String>,
    /// Locale returned by [`negotiate`](Self::negotiate) when nothing matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    /// Match on the primary language code only.
    #[serde(default)]
    pub loose: bool,
    /// Extra aliases, consulted before the built-in legacy table.
    ///
    /// ```toml
    /// [aliases]
    /// "en-uk" = "en-GB"
    /// ```
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,
}

impl NegotiationConfig {
    /// Reads and validates the configuration at `path`.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound);
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            supported = config.supported.len(),
            "loaded negotiation profile"
        );

        Ok(config)
    }

    /// Reads `accept-lang.toml` from `dir`.
    pub fn read_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Self::read_from_path(dir.join(CONFIG_FILE_NAME))
    }

    /// Looks for `accept-lang.toml` in `start` and then in each parent
    /// directory, returning the first one found together with its path.
    pub fn discover(start: &Path) -> Result<(PathBuf, Self), ConfigError> {
        for dir in start.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                let config = Self::read_from_path(&candidate)?;
                return Ok((candidate, config));
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Parses and validates a profile from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: NegotiationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that at least one locale is supported and that the default
    /// locale, if any, is one of them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.supported.iter().all(|locale| locale.is_empty()) {
            return Err(ConfigError::NoSupportedLocales);
        }

        if let Some(default_locale) = &self.default_locale
            && !self
                .supported
                .iter()
                .any(|locale| locale.eq_ignore_ascii_case(default_locale))
        {
            return Err(ConfigError::UnknownDefaultLocale {
                name: default_locale.clone(),
            });
        }

        Ok(())
    }

    /// The configured aliases layered over the built-in ones.
    pub fn alias_map(&self) -> AliasMap {
        self.aliases.iter().collect()
    }

    /// Pick options reflecting this profile.
    pub fn pick_options(&self) -> PickOptions<AliasMap> {
        PickOptions::new()
            .loose(self.loose)
            .map_locales(self.alias_map())
    }

    /// Resolves `header` with this profile's options, falling back to
    /// [`default_locale`](Self::default_locale).
    pub fn negotiate(&self, header: &str) -> Option<&str> {
        self.negotiate_with(header, &self.pick_options())
    }

    /// Like [`negotiate`](Self::negotiate), with caller-supplied options.
    pub fn negotiate_with<M: accept_lang::MapLocale>(
        &self,
        header: &str,
        options: &PickOptions<M>,
    ) -> Option<&str> {
        match accept_lang::try_pick(&self.supported, header, options) {
            Ok(locale) => Some(locale),
            Err(err) => {
                tracing::debug!(%err, header, "falling back to the default locale");
                self.default_locale.as_deref()
            },
        }
    }
}
