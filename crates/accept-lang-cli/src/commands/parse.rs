//! `accept-lang parse`: show how a header is understood.

use crate::error::CliError;
use accept_lang::{DefaultAliases, LanguageTag, parse, parse_with};
use clap::Parser;

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// The Accept-Language header value.
    pub header: String,

    /// Keep ranges as written instead of applying the built-in aliases.
    #[arg(long)]
    pub raw: bool,

    /// Print a JSON array instead of one range per line.
    #[arg(long)]
    pub json: bool,
}

/// Renders the parsed ranges of `args.header`.
pub fn render_parse(args: &ParseArgs) -> Result<String, CliError> {
    let tags = if args.raw {
        parse(&args.header)
    } else {
        parse_with(&args.header, &DefaultAliases)
    };

    if args.json {
        return Ok(serde_json::to_string_pretty(&tags)?);
    }

    Ok(tags
        .iter()
        .map(LanguageTag::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Run the parse command.
pub fn run_parse(args: ParseArgs) -> Result<(), CliError> {
    let output = render_parse(&args)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
