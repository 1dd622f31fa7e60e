// crates/dictnorm-cli/src/cmd/check.rs

use clap::Args;
use dictnorm_core::Normalizer;

use crate::cmd::normalize::print_stats;
use crate::io::bytes;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input dictionary (Latin-1); reads stdin if omitted
    #[arg(long)]
    pub r#in: Option<String>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let raw = bytes::read_input(args.r#in.as_deref())?;
    let (_out, stats) = Normalizer::new().normalize_with_stats(&raw)?;
    print_stats(args.r#in.as_deref().unwrap_or("<stdin>"), &stats);
    eprintln!("OK");
    Ok(())
}
