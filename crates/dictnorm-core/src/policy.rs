// crates/dictnorm-core/src/policy.rs

//! Fixed character policy for normalized dictionary text.
//!
//! Every `char` falls in exactly one class:
//! - `PassThrough`: `a..=z` and `\n`
//! - `Drop`: the characters in [`DROP_SET`]
//! - `Reject`: anything else

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    PassThrough,
    Drop,
    Reject,
}

/// Punctuation removed from the output without error.
pub const DROP_SET: [char; 10] = [' ', '-', '\'', '!', ',', '.', '?', '/', ';', ':'];

#[inline]
pub fn classify(c: char) -> CharClass {
    match c {
        'a'..='z' | '\n' => CharClass::PassThrough,
        c if DROP_SET.contains(&c) => CharClass::Drop,
        _ => CharClass::Reject,
    }
}

/// The pass-through set in ascending order.
pub fn pass_through_chars() -> impl Iterator<Item = char> {
    std::iter::once('\n').chain('a'..='z')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_set_matches_classify() {
        for c in DROP_SET {
            assert_eq!(classify(c), CharClass::Drop, "{c:?}");
        }
    }

    #[test]
    fn pass_through_chars_match_classify() {
        let chars: Vec<char> = pass_through_chars().collect();
        assert_eq!(chars.len(), 27);
        for c in chars {
            assert_eq!(classify(c), CharClass::PassThrough, "{c:?}");
        }
    }

    #[test]
    fn ascii_partition_is_exact() {
        let mut pass = 0;
        let mut drop = 0;
        for b in 0u8..=127 {
            match classify(b as char) {
                CharClass::PassThrough => pass += 1,
                CharClass::Drop => drop += 1,
                CharClass::Reject => {}
            }
        }
        assert_eq!(pass, 27);
        assert_eq!(drop, DROP_SET.len());
    }

    #[test]
    fn uppercase_digits_and_controls_reject() {
        for c in ['A', 'Z', '0', '9', '#', '\r', '\t', '"', '(', 'é'] {
            assert_eq!(classify(c), CharClass::Reject, "{c:?}");
        }
    }
}
