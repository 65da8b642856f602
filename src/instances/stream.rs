//! The `Stream` family: [`LazyStream<T>`], a lazy and possibly unbounded
//! sequence.
//!
//! Nothing runs until the stream is pulled. `map`, `flat_map` and `plus`
//! build pipelines; `ap` is lazy too but buffers the whole value side the
//! first time a function is pulled, so the value side must be finite.
//! Iteration is forward only: a right fold recurses once per element.

use std::fmt;
use std::rc::Rc;

use crate::hkt::{
    Backward, Capabilities, FunctionalAdapter, Higher, Kinded, Sequential, Witness, ZeroAdapter,
};

/// A lazy sequence of values, pulled on demand.
///
/// # Examples
///
/// ```rust
/// use kindling::instances::LazyStream;
///
/// let naturals = LazyStream::iterate(0_u64, |n| n + 1);
/// let evens: Vec<u64> = naturals.filter(|n| n % 2 == 0).take(3).collect();
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
pub struct LazyStream<T> {
    elements: Box<dyn Iterator<Item = T>>,
}

impl<T: 'static> LazyStream<T> {
    /// Wraps any owned iterator.
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self {
            elements: Box::new(elements.into_iter()),
        }
    }

    /// A stream with no elements.
    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// A stream with exactly one element.
    pub fn once(value: T) -> Self {
        Self::new(std::iter::once(value))
    }

    /// The unbounded stream `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate<F>(seed: T, mut step: F) -> Self
    where
        F: FnMut(&T) -> T + 'static,
    {
        Self::new(std::iter::successors(Some(seed), move |previous| Some(step(previous))))
    }

    /// Keeps at most `count` elements, staying a `LazyStream`.
    #[must_use]
    pub fn limit(self, count: usize) -> Self {
        Self::new(self.elements.take(count))
    }
}

impl<T> Iterator for LazyStream<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

/// Collects eagerly, then replays lazily.
impl<T: 'static> FromIterator<T> for LazyStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> fmt::Debug for LazyStream<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LazyStream").finish_non_exhaustive()
    }
}

/// Witness of `LazyStream<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Stream;

impl Witness for Stream {
    type Of<T> = LazyStream<T>;
    type Adapter = StreamAdapter;
    const NAME: &'static str = "stream";
}

/// Adapter of the `Stream` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StreamAdapter;

impl Kinded for StreamAdapter {
    type Witness = Stream;
}

impl FunctionalAdapter for StreamAdapter {
    const CAPABILITIES: Capabilities = Capabilities::MONAD.with_zero().with_sequential();

    fn unit<T: 'static>(&self, value: T) -> Higher<Stream, T> {
        Higher::widen(LazyStream::once(value))
    }

    fn map<T, R, F>(&self, fa: Higher<Stream, T>, function: F) -> Higher<Stream, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(LazyStream::new(fa.narrow().map(function)))
    }

    fn flat_map<T, R, F>(&self, fa: Higher<Stream, T>, mut function: F) -> Higher<Stream, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Stream, R> + 'static,
    {
        let elements = fa.narrow().flat_map(move |value| function(value).narrow());
        Higher::widen(LazyStream::new(elements))
    }

    fn ap<T, R, F>(&self, ff: Higher<Stream, F>, fa: Higher<Stream, T>) -> Higher<Stream, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        let mut pending = Some(fa.narrow());
        let mut buffered: Rc<Vec<T>> = Rc::default();
        Higher::widen(LazyStream::new(ff.narrow().flat_map(move |mut function| {
            if let Some(values) = pending.take() {
                buffered = Rc::new(values.collect());
            }
            let values = Rc::clone(&buffered);
            (0..values.len()).map(move |index| function(values[index].clone()))
        })))
    }
}

impl ZeroAdapter for StreamAdapter {
    fn zero<T: 'static>(&self) -> Higher<Stream, T> {
        Higher::widen(LazyStream::empty())
    }

    fn plus<T: 'static>(
        &self,
        left: Higher<Stream, T>,
        right: Higher<Stream, T>,
    ) -> Higher<Stream, T> {
        Higher::widen(LazyStream::new(left.narrow().chain(right.narrow())))
    }
}

impl Sequential for StreamAdapter {
    type Elements<T: 'static> = LazyStream<T>;
    type Reversed<T: 'static> = std::iter::Empty<T>;

    fn elements<T: 'static>(&self, fa: Higher<Stream, T>) -> Self::Elements<T> {
        fa.narrow()
    }

    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<Stream, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>> {
        Backward::ForwardOnly(fa.narrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn collect<T: 'static>(fa: Higher<Stream, T>) -> Vec<T> {
        fa.narrow().collect()
    }

    #[rstest]
    fn map_is_lazy_until_pulled() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let source = Higher::widen(LazyStream::new(vec![1, 2, 3]));
        let mapped = StreamAdapter.map(source, move |n| {
            counter.set(counter.get() + 1);
            n * 2
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(mapped.narrow().limit(2).collect::<Vec<_>>(), vec![2, 4]);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn flat_map_over_unbounded_source() {
        let naturals = Higher::<Stream, u32>::widen(LazyStream::iterate(1, |n| n + 1));
        let twice = |n: u32| Higher::widen(LazyStream::new(vec![n, n]));
        let pairs = StreamAdapter.flat_map(naturals, twice);
        let prefix: Vec<u32> = pairs.narrow().limit(5).collect();
        assert_eq!(prefix, vec![1, 1, 2, 2, 3]);
    }

    #[rstest]
    fn ap_reuses_buffered_values_for_every_function() {
        let functions: Vec<fn(i32) -> i32> = vec![|n| n + 1, |n| n * 10];
        let result = StreamAdapter.ap(
            Higher::widen(LazyStream::new(functions)),
            Higher::widen(LazyStream::new(vec![1, 2])),
        );
        assert_eq!(collect(result), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn plus_chains_lazily() {
        let left = Higher::widen(LazyStream::new(vec!['a']));
        let right = Higher::widen(LazyStream::iterate('b', |c| *c));
        let combined = StreamAdapter.plus(left, right);
        assert_eq!(combined.narrow().limit(3).collect::<String>(), "abb");
    }

    #[rstest]
    fn from_iterator_replays_collected_values() {
        let stream: LazyStream<i32> = (1..=3).collect();
        assert_eq!(stream.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(collect(StreamAdapter.zero::<i32>()).is_empty());
    }

    #[rstest]
    fn iteration_is_forward_only() {
        let backward = StreamAdapter.right_to_left(Higher::widen(LazyStream::new(vec![1, 2])));
        assert!(matches!(backward, Backward::ForwardOnly(_)));
    }

    #[rstest]
    fn debug_is_opaque() {
        assert_eq!(format!("{:?}", LazyStream::once(1)), "LazyStream { .. }");
    }
}
