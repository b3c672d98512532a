//! Steppable sequences driven by an end test and a step function.
//!
//! A [`Range`] holds a current position and asks two collaborators what to do
//! with it on each pull:
//! - a [`RangeEnd`] decides whether the position is past the last element
//! - a [`RangeStep`] returns the value to emit and moves the position forward
//!
//! Plain closures implement both traits, so `Range::new(0, |v: &i32| *v >= 10, |v: &mut i32| { *v += 2; *v })`
//! works directly. [`UpTo`], [`Successor`] and [`StepBy`] are the named building
//! blocks behind [`Range::up_to`] and [`Range::up_to_by`].

use std::mem;

use crate::Seq;

/// Decides whether a range has reached its end.
pub trait RangeEnd<T> {
    /// Returns `true` once `position` is past the last element.
    fn is_last(&mut self, position: &T) -> bool;
}

impl<T, F> RangeEnd<T> for F
where
    F: FnMut(&T) -> bool,
{
    fn is_last(&mut self, position: &T) -> bool {
        (*self)(position)
    }
}

/// Advances a range and returns the value to emit for this pull.
///
/// The implementation is responsible for both: it must leave `position` at the
/// place the next end test should look at.
pub trait RangeStep<T> {
    /// Returns the value to emit and moves `position` forward.
    fn step(&mut self, position: &mut T) -> T;
}

impl<T, F> RangeStep<T> for F
where
    F: FnMut(&mut T) -> T,
{
    fn step(&mut self, position: &mut T) -> T {
        (*self)(position)
    }
}

/// Ends the range when the position equals a fixed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpTo<T>(pub T);

impl<T: PartialEq> RangeEnd<T> for UpTo<T> {
    fn is_last(&mut self, position: &T) -> bool {
        *position == self.0
    }
}

/// Emits the current position, then moves to its [`Steppable::successor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Successor;

impl<T: Steppable> RangeStep<T> for Successor {
    fn step(&mut self, position: &mut T) -> T {
        let next = position.successor();
        mem::replace(position, next)
    }
}

/// Emits the current position, then moves to `advance(&current)`.
///
/// `advance` only computes the next position; emitting and storing are done here.
#[derive(Clone)]
pub struct StepBy<A>(pub A);

impl<T, A> RangeStep<T> for StepBy<A>
where
    A: FnMut(&T) -> T,
{
    fn step(&mut self, position: &mut T) -> T {
        let next = (self.0)(&*position);
        mem::replace(position, next)
    }
}

/// Types with a canonical "next value", used by [`Range::up_to`].
///
/// Integers wrap at their maximum, so `Range::up_to(250u8, 0)` ends after `255`.
pub trait Steppable {
    /// The value following `self`.
    fn successor(&self) -> Self;
}

macro_rules! steppable_int {
    ($($t:ty),*) => {
        $(
            impl Steppable for $t {
                #[inline]
                fn successor(&self) -> Self {
                    self.wrapping_add(1)
                }
            }
        )*
    };
}

steppable_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Steppable for f32 {
    #[inline]
    fn successor(&self) -> Self {
        *self + 1.0
    }
}

impl Steppable for f64 {
    #[inline]
    fn successor(&self) -> Self {
        *self + 1.0
    }
}

/// A sequence over positions, from a start until the end test holds.
///
/// Once the end test holds, the position is never moved again, so exhaustion
/// is permanent.
#[derive(Clone)]
pub struct Range<T, L, N> {
    position: T,
    end: L,
    step: N,
}

impl<T, L, N> Range<T, L, N>
where
    L: RangeEnd<T>,
    N: RangeStep<T>,
{
    /// Start at `begin`, stop when `end` reports the last position, emit whatever
    /// `step` returns.
    pub fn new(begin: T, end: L, step: N) -> Self {
        Range {
            position: begin,
            end,
            step,
        }
    }
}

impl<T> Range<T, UpTo<T>, Successor>
where
    T: Steppable + PartialEq,
{
    /// The half-open interval `[begin, end)`.
    ///
    /// If stepping from `begin` never lands exactly on `end`, the range does not end.
    pub fn up_to(begin: T, end: T) -> Self {
        Range::new(begin, UpTo(end), Successor)
    }
}

impl<T, A> Range<T, UpTo<T>, StepBy<A>>
where
    T: PartialEq,
    A: FnMut(&T) -> T,
{
    /// Emit `begin`, `advance(begin)`, ... up to but excluding `end`.
    pub fn up_to_by(begin: T, end: T, advance: A) -> Self {
        Range::new(begin, UpTo(end), StepBy(advance))
    }
}

impl<T, L, N> Range<T, L, N> {
    /// The position the next end test will look at.
    pub fn position(&self) -> &T {
        &self.position
    }
}

impl<T, L, N> Seq for Range<T, L, N>
where
    L: RangeEnd<T>,
    N: RangeStep<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.end.is_last(&self.position) {
            return None;
        }
        Some(self.step.step(&mut self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: Seq>(mut seq: S) -> Vec<S::Item> {
        let mut out = Vec::new();
        while let Some(v) = seq.next() {
            out.push(v);
        }
        out
    }

    #[test]
    fn test_up_to_is_half_open() {
        assert_eq!(drain(Range::up_to(0, 5)), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_unsigned_wraps_to_end() {
        assert_eq!(drain(Range::up_to(250u8, 0)), vec![250, 251, 252, 253, 254, 255]);
    }

    #[test]
    fn test_signed_wraps_to_end() {
        assert_eq!(drain(Range::up_to(i8::MAX - 1, i8::MIN + 1)), vec![126, 127, -128]);
    }

    #[test]
    fn test_empty_when_begin_equals_end() {
        let mut r = Range::up_to(5u32, 5);
        assert_eq!(r.next(), None);
        assert_eq!(r.position(), &5);
    }

    #[test]
    fn test_exhaustion_is_sticky() {
        let mut r = Range::up_to(0i64, 2);
        assert_eq!(r.next(), Some(0));
        assert_eq!(r.next(), Some(1));
        assert_eq!(r.next(), None);
        assert_eq!(r.next(), None);
        assert_eq!(r.position(), &2);
    }

    #[test]
    fn test_up_to_by_emits_before_advancing() {
        assert_eq!(drain(Range::up_to_by(1, 16, |v: &i32| v * 2)), vec![1, 2, 4, 8]);
    }

    #[test]
    fn test_up_to_by_descending() {
        assert_eq!(drain(Range::up_to_by(3, 0, |v: &i32| v - 1)), vec![3, 2, 1]);
    }

    #[test]
    fn test_float_successor() {
        assert_eq!(drain(Range::up_to(0.5f64, 3.5)), vec![0.5, 1.5, 2.5]);
    }

    #[test]
    fn test_closures_as_end_and_step() {
        let r = Range::new(0, |v: &i32| *v >= 10, |v: &mut i32| {
            *v += 3;
            *v
        });
        // the step emits the post-increment value
        assert_eq!(drain(r), vec![3, 6, 9, 12]);
    }

    #[test]
    fn test_non_copy_positions() {
        let r = Range::up_to_by(String::new(), "aaa".to_string(), |s: &String| {
            format!("{s}a")
        });
        assert_eq!(drain(r), vec!["", "a", "aa"]);
    }

    #[test]
    fn test_clone_has_independent_position() {
        let mut a = Range::up_to(0, 10);
        a.next();
        let mut b = a.clone();
        assert_eq!(a.next(), Some(1));
        assert_eq!(a.next(), Some(2));
        assert_eq!(b.next(), Some(1));
    }
}
