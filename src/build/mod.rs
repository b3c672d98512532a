//! Building sequences from scratch
//!
//! This module provides the primitive producers: sequences that originate
//! values instead of transforming another sequence.

mod generate;
mod range;

// Re-export building blocks
pub use generate::{generate, Generate};
pub use range::{Range, RangeEnd, RangeStep, StepBy, Steppable, Successor, UpTo};
