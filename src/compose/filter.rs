use crate::Seq;

/// Skips values of the wrapped sequence that fail a predicate.
///
/// Rejected values are pulled and dropped; they cannot be recovered.
#[derive(Clone)]
pub struct Filter<S, P> {
    predicate: P,
    seq: S,
}

/// Create a sequence yielding only the values of `seq` for which `predicate` holds.
pub fn filter<S, P>(predicate: P, seq: S) -> Filter<S, P> {
    Filter { predicate, seq }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while let Some(v) = self.seq.next() {
            if (self.predicate)(&v) {
                return Some(v);
            }
        }
        None
    }
}
