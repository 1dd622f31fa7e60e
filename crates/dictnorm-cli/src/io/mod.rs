// crates/dictnorm-cli/src/io/mod.rs

pub mod bytes;
