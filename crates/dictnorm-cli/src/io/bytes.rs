// crates/dictnorm-cli/src/io/bytes.rs

use std::io::{Read, Write};

use anyhow::Context;

/// Read the whole input: a file when `path` is given, stdin otherwise.
pub fn read_input(path: Option<&str>) -> anyhow::Result<Vec<u8>> {
    match path {
        Some(p) => std::fs::read(p).with_context(|| format!("read input: {p}")),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}

/// Write `data` in one go: to a file when `path` is given, stdout otherwise.
pub fn write_output(path: Option<&str>, data: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(p) => std::fs::write(p, data).with_context(|| format!("write output: {p}")),
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(data).context("write stdout")?;
            out.flush().context("flush stdout")?;
            Ok(())
        }
    }
}
