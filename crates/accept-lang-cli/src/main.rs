use accept_lang_cli::commands::{ParseArgs, PickArgs, run_parse, run_pick};
use accept_lang_cli::logging;
use clap::{Parser, Subcommand};
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "accept-lang")]
#[command(about = "Parse Accept-Language headers and pick supported locales")]
#[command(version)]
struct Cli {
    /// Log negotiation decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the language ranges of a header, highest quality first
    Parse(ParseArgs),

    /// Pick the best supported locale for a header
    Pick(PickArgs),
}

fn main() -> MietteResult<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Parse(args) => run_parse(args),
        Commands::Pick(args) => run_pick(args),
    };

    result.map_err(miette::Report::new)
}
