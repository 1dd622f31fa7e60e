// crates/dictnorm-core/src/stats.rs

use std::collections::BTreeMap;

/// Counters gathered over one normalization run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormStats {
    pub input_bytes: u64,
    /// Header bytes discarded, delimiter included.
    pub header_bytes: u64,
    /// Body length in chars after transliteration and lowercasing.
    pub body_chars: u64,
    pub kept_chars: u64,
    pub dropped_chars: u64,
    pub output_lines: u64,
    pub dropped: BTreeMap<char, u64>,
}

impl NormStats {
    pub fn record_drop(&mut self, c: char) {
        self.dropped_chars += 1;
        *self.dropped.entry(c).or_insert(0) += 1;
    }

    /// Drop-set characters ranked by count, ties by char.
    pub fn top_dropped(&self) -> Vec<(char, u64)> {
        let mut rows: Vec<(char, u64)> = self.dropped.iter().map(|(&c, &n)| (c, n)).collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_dropped_orders_by_count_then_char() {
        let mut s = NormStats::default();
        for c in ['-', ' ', ' ', ',', ' ', '-'] {
            s.record_drop(c);
        }
        assert_eq!(s.dropped_chars, 6);
        assert_eq!(s.top_dropped(), vec![(' ', 3), ('-', 2), (',', 1)]);
    }
}
