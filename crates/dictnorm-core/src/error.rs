use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormError>;

#[derive(Debug, Error)]
pub enum NormError {
    #[error("missing delimiter: no line of 68 '-' found")]
    MissingDelimiter,

    /// `line` counts the newlines preceding `ch` in the body, so the first line
    /// after the delimiter is line 1.
    #[error("unexpected character {ch:?} (code {code}) on line {line}")]
    UnexpectedCharacter { ch: char, code: u32, line: u64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl NormError {
    pub fn unexpected(ch: char, line: u64) -> Self {
        NormError::UnexpectedCharacter {
            ch,
            code: ch as u32,
            line,
        }
    }
}
