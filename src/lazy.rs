//! Chainable wrapper over any [`Seq`].
//!
//! [`Lazy`] is the user-facing surface of the crate: the entry points below
//! produce one, its combinator methods nest a decorator around the wrapped
//! sequence, and [`Lazy::each`] drives the finished chain.
//!
//! Building a chain does no work. Nothing is pulled until `each` (or a manual
//! [`Seq::next`]) asks for a value.

use tracing::trace;

use crate::{
    Seq,
    build::{Generate, Range, RangeEnd, RangeStep, StepBy, Steppable, Successor, UpTo},
    compose::{Filter, Map, Take, TakeWhile, filter, map, take, take_while},
    seq::BoxSeq,
};

/// A sequence with chainable combinators.
///
/// Each combinator consumes the wrapper and returns a new one around the
/// decorated sequence, so the full chain is encoded in the type.
#[derive(Clone)]
pub struct Lazy<S>(S);

impl<S> Lazy<S>
where
    S: Seq,
{
    /// Transform every value with `f`.
    pub fn map<B, F>(self, f: F) -> Lazy<Map<S, F>>
    where
        F: FnMut(S::Item) -> B,
    {
        Lazy(map(f, self.0))
    }

    /// Keep only the values for which `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Lazy<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Lazy(filter(predicate, self.0))
    }

    /// Stop after `n` values.
    pub fn take(self, n: usize) -> Lazy<Take<S>> {
        Lazy(take(n, self.0))
    }

    /// Stop at the first value for which `predicate` fails.
    pub fn take_while<P>(self, predicate: P) -> Lazy<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        Lazy(take_while(predicate, self.0))
    }

    /// Pull every value and hand it to `f`, in order, until the sequence ends.
    ///
    /// On an infinite chain this never returns.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut seen = Vec::new();
    /// range(0, 10)
    ///     .filter(|x| x % 2 == 0)
    ///     .take(2)
    ///     .each(|x| seen.push(x));
    /// assert_eq!(seen, vec![0, 2]);
    /// ```
    pub fn each<F>(mut self, mut f: F)
    where
        F: FnMut(S::Item),
    {
        let mut delivered = 0usize;
        while let Some(v) = self.0.next() {
            f(v);
            delivered += 1;
        }
        trace!(delivered, "sequence exhausted");
    }

    /// Erase the chain's concrete type.
    pub fn boxed<'a>(self) -> Lazy<BoxSeq<'a, S::Item>>
    where
        S: 'a,
    {
        Lazy(self.0.boxed())
    }

    /// Unwrap the underlying sequence.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S> Seq for Lazy<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.0.next()
    }
}

/// Wrap any sequence, including user-defined ones, for chaining.
pub fn from_seq<S: Seq>(seq: S) -> Lazy<S> {
    Lazy(seq)
}

/// An endless sequence of `f()` results.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut out = Vec::new();
/// from_generator(|| 1).take(3).each(|x| out.push(x));
/// assert_eq!(out, vec![1, 1, 1]);
/// ```
pub fn from_generator<T, F>(f: F) -> Lazy<Generate<F>>
where
    F: FnMut() -> T,
{
    Lazy(Generate::new(f))
}

/// The values `begin, begin + 1, ...` up to but excluding `end`.
///
/// The range ends when the position compares equal to `end`. Integer positions
/// wrap at their maximum, so `range(250u8, 0)` yields `250..=255`.
pub fn range<T>(begin: T, end: T) -> Lazy<Range<T, UpTo<T>, Successor>>
where
    T: Steppable + PartialEq,
{
    Lazy(Range::up_to(begin, end))
}

/// Like [`range`], but `advance` computes each next position from the current one.
///
/// The current position is emitted first, so `advance` never has to return the
/// value being yielded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut out = Vec::new();
/// range_by(0, 10, |x: &i32| x + 5).each(|x| out.push(x));
/// assert_eq!(out, vec![0, 5]);
/// ```
pub fn range_by<T, A>(begin: T, end: T, advance: A) -> Lazy<Range<T, UpTo<T>, StepBy<A>>>
where
    T: PartialEq,
    A: FnMut(&T) -> T,
{
    Lazy(Range::up_to_by(begin, end, advance))
}

/// The general range: ends when `is_last(&position)` holds, otherwise emits
/// whatever `step(&mut position)` returns.
///
/// `step` must both choose the emitted value and move the position.
pub fn range_until<T, L, N>(begin: T, is_last: L, step: N) -> Lazy<Range<T, L, N>>
where
    L: RangeEnd<T>,
    N: RangeStep<T>,
{
    Lazy(Range::new(begin, is_last, step))
}
