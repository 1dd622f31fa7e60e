// crates/dictnorm-core/src/translit.rs

/// Maps text to its closest plain-ASCII approximation.
pub trait Transliterator {
    fn transliterate(&self, text: &str) -> String;
}

/// Transliteration backed by the `deunicode` tables.
///
/// ASCII (controls included) is kept verbatim; the tables would erase
/// `\n`, `\r` and `\t`. Non-ASCII code points with no table entry map to
/// the empty string.
#[derive(Copy, Clone, Debug, Default)]
pub struct Deunicode;

impl Deunicode {
    #[inline]
    pub fn transliterate_char(c: char) -> &'static str {
        deunicode::deunicode_char(c).unwrap_or("")
    }
}

impl Transliterator for Deunicode {
    fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii() {
                out.push(c);
            } else {
                out.push_str(Self::transliterate_char(c));
            }
        }
        out
    }
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> String,
{
    fn transliterate(&self, text: &str) -> String {
        self(text)
    }
}
