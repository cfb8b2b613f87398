//! Picks the best supported locale for a header.
//!
//! Preferences are visited in quality order and, for each one, candidates in
//! the order the caller listed them. The first candidate a preference accepts
//! wins, so quality always beats list position and list position only breaks
//! ties between equally weighted ranges.

use crate::alias::{DefaultAliases, MapLocale};
use crate::error::PickError;
use crate::parser::parse_with;
use crate::tag::{LanguageTag, Subtags};

/// Options for [`pick`] and [`try_pick`].
#[derive(Clone, Debug)]
pub struct PickOptions<M = DefaultAliases> {
    loose: bool,
    map_locales: M,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            loose: false,
            map_locales: DefaultAliases,
        }
    }
}

impl PickOptions {
    /// Strict matching with the built-in alias normalization.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MapLocale> PickOptions<M> {
    /// When loose, only the primary language code has to match; script and
    /// region are ignored on both sides.
    pub fn loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    /// Replaces the normalization applied to header ranges. Candidates are
    /// never normalized.
    pub fn map_locales<N: MapLocale>(self, map_locales: N) -> PickOptions<N> {
        PickOptions {
            loose: self.loose,
            map_locales,
        }
    }

    pub fn is_loose(&self) -> bool {
        self.loose
    }

    pub fn mapper(&self) -> &M {
        &self.map_locales
    }
}

/// Returns the best candidate for `header`, or `None`.
///
/// `None` covers both an unusable call (no non-empty candidate) and a call
/// where nothing matched; see [`try_pick`] to tell them apart.
pub fn pick<'a, S, M>(
    candidates: &'a [S],
    header: &str,
    options: &PickOptions<M>,
) -> Option<&'a str>
where
    S: AsRef<str>,
    M: MapLocale,
{
    try_pick(candidates, header, options).ok()
}

/// Like [`pick`], for a header that has not been decoded yet.
pub fn pick_bytes<'a, S, M>(
    candidates: &'a [S],
    header: &[u8],
    options: &PickOptions<M>,
) -> Option<&'a str>
where
    S: AsRef<str>,
    M: MapLocale,
{
    try_pick_bytes(candidates, header, options).ok()
}

/// Returns the best candidate for `header`, reporting why none was chosen.
///
/// The returned string is the candidate exactly as supplied, whatever casing
/// the header used.
///
/// ```
/// use accept_lang::{PickError, PickOptions, try_pick};
///
/// let options = PickOptions::new();
/// assert_eq!(try_pick(&["en-US", "fr-CA"], "fr-ca,en;q=0.5", &options), Ok("fr-CA"));
/// assert_eq!(try_pick(&["de"], "fr-ca", &options), Err(PickError::NoMatch));
/// assert_eq!(try_pick::<&str, _>(&[], "fr-ca", &options), Err(PickError::InvalidInput));
/// ```
pub fn try_pick<'a, S, M>(
    candidates: &'a [S],
    header: &str,
    options: &PickOptions<M>,
) -> Result<&'a str, PickError>
where
    S: AsRef<str>,
    M: MapLocale,
{
    let supported: Vec<(&'a str, Subtags<'a>)> = candidates
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| !candidate.is_empty())
        .map(|candidate| (candidate, Subtags::split(candidate)))
        .collect();

    if supported.is_empty() {
        tracing::debug!("no non-empty candidate locales to negotiate against");
        return Err(PickError::InvalidInput);
    }

    let preferences = parse_with(header, &options.map_locales);
    for preference in &preferences {
        let found = supported
            .iter()
            .find(|(_, subtags)| accepts(preference, subtags, options.loose));

        if let Some(&(candidate, _)) = found {
            tracing::debug!(
                preference = %preference,
                candidate,
                loose = options.loose,
                "picked supported locale"
            );
            return Ok(candidate);
        }
    }

    tracing::debug!(
        header,
        preferences = preferences.len(),
        candidates = supported.len(),
        "no supported locale matched"
    );
    Err(PickError::NoMatch)
}

/// Like [`try_pick`]; a header that is not valid UTF-8 is
/// [`PickError::InvalidInput`].
pub fn try_pick_bytes<'a, S, M>(
    candidates: &'a [S],
    header: &[u8],
    options: &PickOptions<M>,
) -> Result<&'a str, PickError>
where
    S: AsRef<str>,
    M: MapLocale,
{
    let header = std::str::from_utf8(header).map_err(|err| {
        tracing::debug!(%err, "Accept-Language header is not valid UTF-8");
        PickError::InvalidInput
    })?;
    try_pick(candidates, header, options)
}

fn accepts(preference: &LanguageTag, candidate: &Subtags<'_>, loose: bool) -> bool {
    same_subtag(&preference.code, candidate.code)
        && (loose || subtag_accepts(preference.script.as_deref(), candidate.script))
        && (loose || subtag_accepts(preference.region.as_deref(), candidate.region))
}

/// An absent preferred subtag accepts anything.
fn subtag_accepts(preferred: Option<&str>, supported: Option<&str>) -> bool {
    match preferred {
        None => true,
        Some(preferred) => supported.is_some_and(|supported| same_subtag(preferred, supported)),
    }
}

fn same_subtag(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
