// crates/dictnorm-cli/src/cmd/mod.rs

pub mod check;
pub mod normalize;
pub mod policy;
