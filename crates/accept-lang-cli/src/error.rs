use accept_lang_toml::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(accept_lang::config))]
    Config(#[from] ConfigError),

    #[error("no supported locales given")]
    #[diagnostic(
        code(accept_lang::pick::no_candidates),
        help("Pass locales with `-s`, or create an accept-lang.toml with a `supported` list")
    )]
    NoCandidates,

    #[error("no supported locale matches `{header}`")]
    #[diagnostic(
        code(accept_lang::pick::no_match),
        help("Use --loose to match on the language code only, or set default_locale in accept-lang.toml")
    )]
    NoMatch { header: String },

    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}
