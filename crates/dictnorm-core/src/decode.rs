// crates/dictnorm-core/src/decode.rs

/// Decode bytes as Latin-1 (ISO-8859-1).
///
/// Every byte maps to the code point of the same value, so this never fails.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
