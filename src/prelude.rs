//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{BoxSeq, Lazy, Seq};

// Entry points
pub use crate::{from_generator, from_seq, range, range_by, range_until};
