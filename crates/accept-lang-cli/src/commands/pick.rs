//! `accept-lang pick`: choose a supported locale for a header.

use crate::error::CliError;
use accept_lang_toml::{ConfigError, NegotiationConfig};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the pick command.
#[derive(Debug, Parser)]
pub struct PickArgs {
    /// The Accept-Language header value.
    pub header: String,

    /// A supported locale. Repeat in priority order; replaces the profile's list.
    #[arg(short = 's', long = "supported", value_name = "LOCALE")]
    pub supported: Vec<String>,

    /// Match on the primary language code only.
    #[arg(long)]
    pub loose: bool,

    /// Path to an accept-lang.toml profile.
    ///
    /// Without it, and without `-s`, the profile is looked up from the current
    /// directory upwards.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a JSON object instead of the bare locale.
    #[arg(long)]
    pub json: bool,
}

/// Outcome of a successful pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickReport {
    pub header: String,
    pub locale: String,
    pub loose: bool,
}

fn load_profile(args: &PickArgs) -> Result<NegotiationConfig, CliError> {
    let mut profile = match &args.config {
        Some(path) => NegotiationConfig::read_from_path(path)?,
        None if !args.supported.is_empty() => NegotiationConfig::default(),
        None => {
            let cwd = std::env::current_dir().map_err(CliError::CurrentDir)?;
            match NegotiationConfig::discover(&cwd) {
                Ok((path, profile)) => {
                    tracing::debug!(path = %path.display(), "using discovered profile");
                    profile
                },
                Err(ConfigError::NotFound) => return Err(CliError::NoCandidates),
                Err(err) => return Err(err.into()),
            }
        },
    };

    if !args.supported.is_empty() {
        profile.supported = args.supported.clone();
        if let Some(default_locale) = &profile.default_locale
            && !profile
                .supported
                .iter()
                .any(|locale| locale.eq_ignore_ascii_case(default_locale))
        {
            tracing::debug!(
                default_locale = default_locale.as_str(),
                "default locale is not among the given locales; ignoring it"
            );
            profile.default_locale = None;
        }
        profile.validate()?;
    }

    Ok(profile)
}

/// Resolves the locale for `args.header`, falling back to the profile's
/// default locale.
pub fn resolve_pick(args: &PickArgs) -> Result<PickReport, CliError> {
    let profile = load_profile(args)?;
    let loose = profile.loose || args.loose;
    let options = profile.pick_options().loose(loose);

    let locale = profile
        .negotiate_with(&args.header, &options)
        .ok_or_else(|| CliError::NoMatch {
            header: args.header.clone(),
        })?;

    Ok(PickReport {
        header: args.header.clone(),
        locale: locale.to_string(),
        loose,
    })
}

/// Run the pick command.
pub fn run_pick(args: PickArgs) -> Result<(), CliError> {
    let report = resolve_pick(&args)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.locale);
    }

    Ok(())
}
