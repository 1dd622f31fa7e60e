pub mod error;

pub mod decode;
pub mod filter;
pub mod header;
pub mod normalize;
pub mod policy;
pub mod stats;
pub mod translit;

pub use crate::error::{NormError, Result};
pub use crate::normalize::{normalize, read_and_normalize, Normalizer};
pub use crate::policy::{classify, CharClass};
pub use crate::stats::NormStats;
pub use crate::translit::{Deunicode, Transliterator};
