// crates/dictnorm-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "dictnorm")]
#[command(about = "Normalize Latin-1 dictionary dumps to lowercase a-z word lists", long_about = None)]
pub struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Strip the header, transliterate, lowercase and filter a dictionary
    Normalize(cmd::normalize::NormalizeArgs),

    /// Run the full pipeline without writing output
    Check(cmd::check::CheckArgs),

    /// Print the fixed character policy
    Policy,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Policy => cmd::policy::run(),
    }
}
