//! Structured language tags.
//!
//! [`LanguageTag`] is what the parser produces for every accepted term of an
//! `Accept-Language` header. [`Subtags`] is the borrowed, quality-less view
//! used for the candidate locales a caller supports.

use std::fmt;

/// A single language range taken from an `Accept-Language` header.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LanguageTag {
    /// Primary language subtag (or `*`), case preserved.
    pub code: String,
    /// Script subtag. Only set when the tag had exactly three segments.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub script: Option<String>,
    /// Region subtag, either a country code or a numeric area code.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub region: Option<String>,
    /// Relative weight from the `q=` parameter.
    pub quality: f64,
}

impl LanguageTag {
    pub(crate) fn from_subtags(subtags: Subtags<'_>, quality: f64) -> Self {
        Self {
            code: subtags.code.to_owned(),
            script: subtags.script.map(str::to_owned),
            region: subtags.region.map(str::to_owned),
            quality,
        }
    }

    /// Returns `true` for the `*` range.
    pub fn is_wildcard(&self) -> bool {
        self.code == "*"
    }

    /// Borrows the subtags of this tag, dropping the quality.
    pub fn subtags(&self) -> Subtags<'_> {
        Subtags {
            code: &self.code,
            script: self.script.as_deref(),
            region: self.region.as_deref(),
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subtags())?;
        if self.quality != crate::DEFAULT_QUALITY {
            write!(f, ";q={}", self.quality)?;
        }
        Ok(())
    }
}

/// The `code[-script][-region]` parts of a locale string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subtags<'a> {
    /// Primary language subtag, as written.
    pub code: &'a str,
    /// Script subtag, present only for three-segment locales.
    pub script: Option<&'a str>,
    /// Region subtag.
    pub region: Option<&'a str>,
}

impl<'a> Subtags<'a> {
    /// Splits a locale string on `-`.
    ///
    /// One segment is a bare code, two are code and region, three are code,
    /// script and region. With four or more segments only the code and the
    /// second segment (as region) are kept.
    pub fn split(locale: &'a str) -> Self {
        let mut segments = locale.split('-');
        let code = segments.next().unwrap_or_default();
        let second = segments.next();
        let third = segments.next();

        match (second, third, segments.next()) {
            (Some(script), Some(region), None) => Self {
                code,
                script: Some(script),
                region: Some(region),
            },
            _ => Self {
                code,
                script: None,
                region: second,
            },
        }
    }
}

impl fmt::Display for Subtags<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)?;
        for subtag in [self.script, self.region].into_iter().flatten() {
            write!(f, "-{subtag}")?;
        }
        Ok(())
    }
}
