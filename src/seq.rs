//! Core trait for lazy sequences.
//!
//! This module defines the [`Seq`] trait, the single contract every producer and
//! decorator in this crate implements. A [`Seq`] is a single-pass, pull-driven
//! source of values.
//!
//! # The Seq Trait
//!
//! [`Seq`] represents a computation that:
//! - Produces values of type `Item`, one per call to [`next`](Seq::next)
//! - Signals exhaustion with `None`
//! - Never computes a value before it is asked for
//!
//! There is no length, no reset, and no error channel. `None` is the only way a
//! sequence says it has nothing more to give.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut seq = range(0, 3).into_inner();
//! assert_eq!(seq.next(), Some(0));
//! assert_eq!(seq.next(), Some(1));
//! assert_eq!(seq.next(), Some(2));
//! assert_eq!(seq.next(), None);
//! ```

use either::Either;

/// A single-pass lazy source of values.
///
/// Each call to `next()` advances the sequence by exactly one logical element.
pub trait Seq {
    /// Type of the values this sequence produces.
    type Item;

    /// Produce the next value, or `None` once the sequence is exhausted.
    fn next(&mut self) -> Option<Self::Item>;

    /// Erase the concrete type of this sequence behind a box.
    ///
    /// The boxed sequence dispatches `next` dynamically and otherwise behaves
    /// exactly like `self`.
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A heap-allocated, type-erased sequence.
pub type BoxSeq<'a, T> = Box<dyn Seq<Item = T> + 'a>;

impl<S> Seq for &'_ mut S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<S> Seq for Box<S>
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Generate, Range};
    use crate::compose::take;

    fn drain<S: Seq>(mut seq: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(v) = seq.next() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_mut_ref_advances_underlying_sequence() {
        let mut seq = Range::up_to(0u8, 4);
        {
            let mut by_ref = &mut seq;
            assert_eq!(Seq::next(&mut by_ref), Some(0));
            assert_eq!(Seq::next(&mut by_ref), Some(1));
        }
        assert_eq!(seq.next(), Some(2));
    }

    #[test]
    fn test_boxed_matches_concrete() {
        let concrete = drain(take(3, Range::up_to(10, 20)));
        let boxed = drain(take(3, Range::up_to(10, 20)).boxed());
        assert_eq!(concrete, boxed);
        assert_eq!(boxed, vec![10, 11, 12]);
    }

    #[test]
    fn test_either_dispatches_to_active_side() {
        fn pick(short: bool) -> Either<impl Seq<Item = i32>, impl Seq<Item = i32>> {
            if short {
                Either::Left(take(2, Generate::new(|| 7)))
            } else {
                Either::Right(Range::up_to(0, 3))
            }
        }
        assert_eq!(drain(pick(true)), vec![7, 7]);
        assert_eq!(drain(pick(false)), vec![0, 1, 2]);
    }
}
