use crate::Seq;

/// Produces a value by calling a function on every pull.
///
/// Never exhausts on its own; bound it with [`take`](crate::compose::take),
/// [`take_while`](crate::compose::take_while) or a terminating consumer.
#[derive(Clone)]
pub struct Generate<F>(F);

impl<F> Generate<F> {
    /// Same as [`generate`].
    pub fn new(f: F) -> Self {
        Generate(f)
    }
}

/// Create a sequence that calls `f` each time a value is requested.
///
/// ```rust
/// use lazyseq::Seq;
/// use lazyseq::build::generate;
///
/// let mut n = 0;
/// let mut counter = generate(move || {
///     n += 1;
///     n
/// });
/// assert_eq!(counter.next(), Some(1));
/// assert_eq!(counter.next(), Some(2));
/// // Continues forever...
/// ```
pub fn generate<T, F: FnMut() -> T>(f: F) -> Generate<F> {
    Generate(f)
}

impl<T, F> Seq for Generate<F>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some((self.0)())
    }
}
