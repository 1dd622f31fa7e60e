// crates/dictnorm-cli/src/cmd/normalize.rs

use clap::Args;
use dictnorm_core::{NormStats, Normalizer};

use crate::io::bytes;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Input dictionary (Latin-1); reads stdin if omitted
    #[arg(long)]
    pub r#in: Option<String>,

    /// Output path; writes stdout if omitted
    #[arg(long)]
    pub out: Option<String>,

    /// Print a summary of kept/dropped characters to stderr
    #[arg(long, default_value_t = false)]
    pub stats: bool,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let raw = bytes::read_input(args.r#in.as_deref())?;
    tracing::info!(bytes = raw.len(), "input read");

    // Nothing is written unless the whole body passes.
    let (out, stats) = Normalizer::new().normalize_with_stats(&raw)?;
    bytes::write_output(args.out.as_deref(), out.as_bytes())?;
    tracing::info!(bytes = out.len(), "output written");

    if args.stats {
        print_stats(args.r#in.as_deref().unwrap_or("<stdin>"), &stats);
    }
    Ok(())
}

pub fn print_stats(source: &str, s: &NormStats) {
    eprintln!("--- normalize ---");
    eprintln!("file            = {}", source);
    eprintln!("input_bytes     = {}", s.input_bytes);
    eprintln!("header_bytes    = {}", s.header_bytes);
    eprintln!("body_chars      = {}", s.body_chars);
    eprintln!("kept_chars      = {}", s.kept_chars);
    eprintln!("dropped_chars   = {}", s.dropped_chars);
    eprintln!("output_lines    = {}", s.output_lines);

    let rows = s.top_dropped();
    if !rows.is_empty() {
        eprintln!("--- dropped ---");
        for (c, n) in rows {
            eprintln!("{:?} (code {:>3}) count={}", c, c as u32, n);
        }
    }
}
