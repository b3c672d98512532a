//! Decorating sequences
//!
//! This module provides the decorators: sequences that wrap exactly one inner
//! sequence and transform, filter, or bound what it produces.

mod filter;
mod map;
mod take;

// Re-export composition operations
pub use filter::{filter, Filter};
pub use map::{map, Map};
pub use take::{take, take_while, Take, TakeWhile, TakeWhileState};
