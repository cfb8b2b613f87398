//! Tokenizer for `Accept-Language` header values.

use crate::alias::{Identity, MapLocale};
use crate::tag::{LanguageTag, Subtags};
use regex::Regex;
use std::sync::LazyLock;

/// Quality assumed for terms without a `q=` parameter.
pub const DEFAULT_QUALITY: f64 = 1.0;

/// One language range: up to three subtags or `*`, then an optional `;q=` weight.
static TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[A-Za-z]+(?:-[0-9A-Za-z]+){0,2}|\*)(?:;q=[01](?:\.[0-9]+)?)?")
        .expect("language range pattern is valid")
});

/// Parses a header value with no locale normalization.
///
/// ```
/// let tags = accept_lang::parse("fr-CA,fr;q=0.8");
/// assert_eq!(tags.len(), 2);
/// assert_eq!(tags[1].code, "fr");
/// ```
pub fn parse(header: &str) -> Vec<LanguageTag> {
    parse_with(header, &Identity)
}

/// Parses a header value, passing each locale through `map` before it is split
/// into subtags.
///
/// Text that does not form a language range is skipped. The result is sorted
/// by descending quality; terms of equal quality keep their header order.
pub fn parse_with<M: MapLocale + ?Sized>(header: &str, map: &M) -> Vec<LanguageTag> {
    let mut tags: Vec<LanguageTag> = TERM
        .find_iter(header)
        .filter_map(|term| parse_term(term.as_str(), map))
        .collect();

    tags.sort_by(|a, b| b.quality.total_cmp(&a.quality));
    tags
}

fn parse_term<M: MapLocale + ?Sized>(term: &str, map: &M) -> Option<LanguageTag> {
    let (locale, params) = match term.split_once(';') {
        Some((locale, params)) => (locale, Some(params)),
        None => (term, None),
    };

    let quality = params
        .and_then(|params| params.strip_prefix("q="))
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(DEFAULT_QUALITY);

    let mapped = map.map_locale(locale);
    let subtags = Subtags::split(&mapped);
    if subtags.code.is_empty() {
        tracing::trace!(
            term,
            mapped = mapped.as_str(),
            "dropping language range with an empty code"
        );
        return None;
    }

    Some(LanguageTag::from_subtags(subtags, quality))
}
