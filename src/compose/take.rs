//! Bounding sequences.
//!
//! [`Take`] bounds by count and [`TakeWhile`] by a predicate. Both terminate
//! permanently: once either reports `None` it never pulls from its inner
//! sequence again, even if that sequence still has values.

use tracing::trace;

use crate::Seq;

/// Yields at most `n` values of the wrapped sequence.
#[derive(Clone)]
pub struct Take<S> {
    remaining: usize,
    seq: S,
}

/// Create a sequence yielding the first `n` values of `seq`.
///
/// The inner sequence is pulled at most `n` times in total.
pub fn take<S>(n: usize, seq: S) -> Take<S> {
    Take { remaining: n, seq }
}

impl<S> Take<S> {
    /// Number of pulls left before this sequence is exhausted.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<S> Seq for Take<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            trace!("take budget spent");
        }
        self.seq.next()
    }
}

/// Whether a [`TakeWhile`] can still produce values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TakeWhileState {
    /// Pulling from the inner sequence and testing each value.
    Active,
    /// Terminal. The inner sequence is never touched again.
    Ended,
}

/// Yields values of the wrapped sequence while a predicate holds.
///
/// The first value failing the predicate is consumed and discarded, and
/// the sequence ends there.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    predicate: P,
    seq: S,
    state: TakeWhileState,
}

/// Create a sequence yielding the longest prefix of `seq` whose values all satisfy `predicate`.
///
/// ```rust
/// use lazyseq::Seq;
/// use lazyseq::build::Range;
/// use lazyseq::compose::{take_while, TakeWhileState};
///
/// let mut small = take_while(|x: &i32| *x * *x < 10, Range::up_to(0, 100));
/// assert_eq!(small.next(), Some(0));
/// assert_eq!(small.next(), Some(1));
/// assert_eq!(small.next(), Some(2));
/// assert_eq!(small.next(), Some(3));
/// assert_eq!(small.next(), None);
/// assert_eq!(small.state(), TakeWhileState::Ended);
/// ```
pub fn take_while<S, P>(predicate: P, seq: S) -> TakeWhile<S, P> {
    TakeWhile {
        predicate,
        seq,
        state: TakeWhileState::Active,
    }
}

impl<S, P> TakeWhile<S, P> {
    /// Whether this sequence can still produce values.
    pub fn state(&self) -> TakeWhileState {
        self.state
    }
}

impl<S, P> Seq for TakeWhile<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        match self.state {
            TakeWhileState::Ended => None,
            TakeWhileState::Active => match self.seq.next() {
                Some(v) if (self.predicate)(&v) => Some(v),
                pulled => {
                    trace!(
                        inner_exhausted = pulled.is_none(),
                        "take_while ended"
                    );
                    self.state = TakeWhileState::Ended;
                    None
                }
            },
        }
    }
}
