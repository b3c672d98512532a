//! Transforming the values of a sequence.

use crate::Seq;

/// Applies a function to every value pulled from the wrapped sequence.
///
/// Length and order are preserved; exhaustion of the inner sequence passes
/// straight through.
#[derive(Clone)]
pub struct Map<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that transforms each value of `seq` with `f`.
///
/// `f` runs once per value, at the moment that value is pulled.
///
/// # Examples
///
/// ```
/// use lazyseq::Seq;
/// use lazyseq::build::Range;
/// use lazyseq::compose::map;
///
/// let mut squares = map(|x: u32| x * x, Range::up_to(1, 4));
/// assert_eq!(squares.next(), Some(1));
/// assert_eq!(squares.next(), Some(4));
/// assert_eq!(squares.next(), Some(9));
/// assert_eq!(squares.next(), None);
/// ```
pub fn map<S, F>(f: F, seq: S) -> Map<S, F> {
    Map { f, seq }
}

impl<B, S, F> Seq for Map<S, F>
where
    S: Seq,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        self.seq.next().map(&mut self.f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{Range, generate};
    use std::cell::Cell;

    #[test]
    fn test_map_changes_item_type() {
        let mut seq = map(|x: i32| format!("#{x}"), Range::up_to(0, 2));
        assert_eq!(seq.next().as_deref(), Some("#0"));
        assert_eq!(seq.next().as_deref(), Some("#1"));
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let mut seq = map(
            |x: u64| {
                calls.set(calls.get() + 1);
                x + 1
            },
            Range::up_to(0, 1_000_000),
        );
        assert_eq!(calls.get(), 0);
        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), Some(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_does_not_call_f_on_exhaustion() {
        let calls = Cell::new(0);
        let mut seq = map(
            |x: i32| {
                calls.set(calls.get() + 1);
                x
            },
            Range::up_to(0, 1),
        );
        assert_eq!(seq.next(), Some(0));
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_over_generator() {
        let mut seq = map(|x: i32| x * 3, generate(|| 2));
        assert_eq!(seq.next(), Some(6));
        assert_eq!(seq.next(), Some(6));
    }
}
