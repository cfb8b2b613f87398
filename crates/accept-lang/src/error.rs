use thiserror::Error;

/// Why a negotiation produced no locale.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PickError {
    /// No non-empty candidate was supplied, or the header was not text.
    #[error("no usable candidates or header to negotiate against")]
    InvalidInput,
    /// Every candidate was rejected by every accepted language.
    #[error("no supported locale matches the accepted languages")]
    NoMatch,
}
