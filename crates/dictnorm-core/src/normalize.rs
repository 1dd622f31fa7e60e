// crates/dictnorm-core/src/normalize.rs

use std::io::Read;

use crate::decode::decode_latin1;
use crate::error::Result;
use crate::filter::{filter_str, filter_str_counted};
use crate::header::strip_header;
use crate::stats::NormStats;
use crate::translit::{Deunicode, Transliterator};

/// Latin-1 dictionary dump -> lowercase `a..=z` / `\n` word list.
///
/// Pipeline: decode, strip header, transliterate, lowercase, filter.
#[derive(Clone, Debug, Default)]
pub struct Normalizer<T = Deunicode> {
    translit: T,
}

impl Normalizer<Deunicode> {
    pub fn new() -> Self {
        Self { translit: Deunicode }
    }
}

impl<T: Transliterator> Normalizer<T> {
    pub fn with_transliterator(translit: T) -> Self {
        Self { translit }
    }

    /// Decode, strip the header, transliterate and lowercase.
    /// Everything up to but not including the policy filter.
    pub fn prepare(&self, raw: &[u8]) -> Result<String> {
        self.prepare_body(raw).map(|(_, body)| body)
    }

    pub fn normalize(&self, raw: &[u8]) -> Result<String> {
        let prepared = self.prepare(raw)?;
        let out = filter_str(&prepared)?;
        tracing::debug!(output_bytes = out.len(), "normalized");
        Ok(out)
    }

    pub fn normalize_with_stats(&self, raw: &[u8]) -> Result<(String, NormStats)> {
        let (header_bytes, prepared) = self.prepare_body(raw)?;
        let mut stats = NormStats {
            input_bytes: raw.len() as u64,
            header_bytes,
            body_chars: prepared.chars().count() as u64,
            ..NormStats::default()
        };
        let out = filter_str_counted(&prepared, &mut stats)?;
        tracing::debug!(
            kept = stats.kept_chars,
            dropped = stats.dropped_chars,
            lines = stats.output_lines,
            "normalized"
        );
        Ok((out, stats))
    }

    /// Returns (header bytes discarded, prepared body).
    fn prepare_body(&self, raw: &[u8]) -> Result<(u64, String)> {
        let text = decode_latin1(raw);
        let body = strip_header(&text)?;
        // Latin-1 is one byte per char.
        let body_len = body.chars().count();
        let header_bytes = (raw.len() - body_len) as u64;
        tracing::debug!(input_bytes = raw.len(), header_bytes, body_len, "header stripped");
        Ok((header_bytes, self.translit.transliterate(body).to_lowercase()))
    }
}

/// Normalize with the default transliterator.
pub fn normalize(raw: &[u8]) -> Result<String> {
    Normalizer::new().normalize(raw)
}

/// Read `reader` to the end, then normalize.
pub fn read_and_normalize<R: Read>(mut reader: R) -> Result<String> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    normalize(&raw)
}
