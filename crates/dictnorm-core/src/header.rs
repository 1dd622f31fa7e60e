// crates/dictnorm-core/src/header.rs

use crate::error::{NormError, Result};

pub const DELIMITER_LEN: usize = 68;

/// Marker separating the preamble from the dictionary body.
pub const DELIMITER: &str =
    "--------------------------------------------------------------------";

/// Return everything strictly after the first occurrence of [`DELIMITER`].
///
/// Only the first match splits; later occurrences stay in the body.
pub fn strip_header(text: &str) -> Result<&str> {
    let idx = text.find(DELIMITER).ok_or(NormError::MissingDelimiter)?;
    Ok(&text[idx + DELIMITER.len()..])
}
