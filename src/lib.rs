//! # lazyseq: Composable Pull-Based Sequences
//!
//! Build lazy sequences from generators and ranges, decorate them with
//! transforms, filters and bounds, and drive them to completion on demand.
//!
//! ## Core Trait
//!
//! - **[`Seq`]**: a single-pass source of values with one operation, `next()`
//!
//! ## Key Features
//!
//! - **Lazy**: building a chain does no work; every value is computed when pulled
//! - **Composable**: decorate with `.map()`, `.filter()`, `.take()`, `.take_while()`
//! - **Static by default**: a chain's type encodes every stage; `.boxed()` erases it
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut out = Vec::new();
//! range(0, 10)
//!     .filter(|x| x % 2 == 0)  // 0, 2, 4, ...
//!     .map(|x| x * x)          // 0, 4, 16, ...
//!     .take(3)
//!     .each(|x| out.push(x));
//! assert_eq!(out, vec![0, 4, 16]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`from_generator(f)`](from_generator) - Call `f` for every value, forever
//! - [`range(begin, end)`](range) - `begin, begin + 1, ...` excluding `end`
//! - [`range_by(begin, end, advance)`](range_by) - Same, with a custom successor
//! - [`range_until(begin, is_last, step)`](range_until) - Fully custom range
//!
//! **Execution:**
//! - [`Lazy::each`] - Pull every value and pass it to a callback

pub mod build;
pub mod compose;
mod lazy;
pub mod prelude;
mod seq;

pub use lazy::*;
pub use seq::*;
