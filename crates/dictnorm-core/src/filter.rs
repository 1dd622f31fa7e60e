// crates/dictnorm-core/src/filter.rs

use crate::error::{NormError, Result};
use crate::policy::{classify, CharClass};
use crate::stats::NormStats;

fn ignore_drop(_: char) {}

/// Streaming policy filter over a `char` sequence.
///
/// Yields pass-through characters in order, hands drop-set characters to
/// `on_drop`, and yields a single `Err` at the first rejected character.
/// After an error the iterator is exhausted.
pub struct Filter<I, F = fn(char)> {
    inner: I,
    on_drop: F,
    line: u64,
    failed: bool,
}

impl<I: Iterator<Item = char>> Filter<I> {
    pub fn new(inner: I) -> Self {
        Filter::with_drop_hook(inner, ignore_drop as fn(char))
    }
}

impl<I: Iterator<Item = char>, F: FnMut(char)> Filter<I, F> {
    pub fn with_drop_hook(inner: I, on_drop: F) -> Self {
        Self {
            inner,
            on_drop,
            line: 0,
            failed: false,
        }
    }
}

impl<I: Iterator<Item = char>, F: FnMut(char)> Iterator for Filter<I, F> {
    type Item = Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for c in self.inner.by_ref() {
            match classify(c) {
                CharClass::PassThrough => {
                    if c == '\n' {
                        self.line += 1;
                    }
                    return Some(Ok(c));
                }
                CharClass::Drop => (self.on_drop)(c),
                CharClass::Reject => {
                    self.failed = true;
                    return Some(Err(NormError::unexpected(c, self.line)));
                }
            }
        }
        None
    }
}

/// Filter a whole string. On failure no partial output is returned.
pub fn filter_str(text: &str) -> Result<String> {
    Filter::new(text.chars()).collect()
}

/// Like [`filter_str`], also filling the kept/dropped counters of `stats`.
/// `stats` is left untouched on failure.
pub fn filter_str_counted(text: &str, stats: &mut NormStats) -> Result<String> {
    let mut drops = NormStats::default();
    let out = Filter::with_drop_hook(text.chars(), |c| drops.record_drop(c))
        .collect::<Result<String>>()?;

    // Output is ASCII: bytes == chars.
    stats.kept_chars = out.len() as u64;
    stats.output_lines = out.bytes().filter(|&b| b == b'\n').count() as u64;
    stats.dropped_chars = drops.dropped_chars;
    stats.dropped = drops.dropped;
    Ok(out)
}
