//! Foldable type class - reducing a container to a summary value.
//!
//! Folds consume a container through its family's [`Sequential`] capability.
//! `fold_left` reduces in the family's own iteration order. `fold_right`
//! reduces from the other end: when the family can iterate backwards this is
//! a plain loop, otherwise it recurses once per element.
//!
//! # Laws
//!
//! ```text
//! fold_left(fa, seed, op)  == elements(fa).fold(seed, op)
//! fold_left(fa, seed, op)  == fold_right(fa, seed, flip(op))   // op commutative
//! fold_map(fa, m, f)       == fold_left(fa, m.empty(), |b, a| m.combine(b, f(a)))
//! ```
//!
//! Folding an unbounded family does not terminate unless the operation
//! short-circuits (`exists`, `for_all`, `find`).
//!
//! [`Sequential`]: crate::hkt::Sequential

use super::monoid::Monoid;
use crate::hkt::{Backward, Higher, Kinded, Sequential};

/// A type class for families that can be reduced element by element.
pub trait Foldable: Kinded {
    /// Reduces from the first element to the last.
    ///
    /// # Arguments
    ///
    /// * `fa` - The container to reduce
    /// * `seed` - The initial accumulator
    /// * `function` - Combines the accumulator with the next element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::List;
    /// use kindling::typeclass::{Foldable, Instances};
    ///
    /// let foldable = Instances::<List>::foldable();
    /// let total = foldable.fold_left(Higher::widen(vec![1, 2, 3, 4]), 0, |acc, n| acc + n);
    /// assert_eq!(total, 10);
    /// ```
    fn fold_left<T, B, F>(&self, fa: Higher<Self::Witness, T>, seed: B, function: F) -> B
    where
        T: 'static,
        F: FnMut(B, T) -> B;

    /// Reduces from the last element to the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::List;
    /// use kindling::typeclass::{Foldable, Instances};
    ///
    /// let foldable = Instances::<List>::foldable();
    /// let text = foldable.fold_right(Higher::widen(vec!['a', 'b']), String::new(), |c, mut acc| {
    ///     acc.push(c);
    ///     acc
    /// });
    /// assert_eq!(text, "ba");
    /// ```
    fn fold_right<T, B, F>(&self, fa: Higher<Self::Witness, T>, seed: B, function: F) -> B
    where
        T: 'static,
        F: FnMut(T, B) -> B;

    /// Maps every element into a monoid and combines the results.
    fn fold_map<T, A, M, F>(&self, fa: Higher<Self::Witness, T>, monoid: &M, mut function: F) -> A
    where
        T: 'static,
        M: Monoid<A>,
        F: FnMut(T) -> A,
    {
        self.fold_left(fa, monoid.empty(), |accumulator, value| {
            monoid.combine(accumulator, function(value))
        })
    }

    /// Combines the elements with a monoid.
    fn fold<T, M>(&self, fa: Higher<Self::Witness, T>, monoid: &M) -> T
    where
        T: 'static,
        M: Monoid<T>,
    {
        self.fold_map(fa, monoid, |value| value)
    }

    /// Counts the elements.
    fn length<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> usize {
        self.fold_left(fa, 0, |count, _| count + 1)
    }

    /// Returns `true` if the container has no elements.
    fn is_empty<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> bool {
        self.length(fa) == 0
    }

    /// Collects the elements in iteration order.
    fn to_vec<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> Vec<T> {
        self.fold_left(fa, Vec::new(), |mut elements, value| {
            elements.push(value);
            elements
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<T, P>(&self, fa: Higher<Self::Witness, T>, mut predicate: P) -> bool
    where
        T: 'static,
        P: FnMut(&T) -> bool,
    {
        self.fold_left(fa, false, |found, value| found || predicate(&value))
    }

    /// Returns `true` if every element satisfies `predicate`.
    fn for_all<T, P>(&self, fa: Higher<Self::Witness, T>, mut predicate: P) -> bool
    where
        T: 'static,
        P: FnMut(&T) -> bool,
    {
        !self.exists(fa, move |value| !predicate(value))
    }

    /// Returns the first element satisfying `predicate`.
    fn find<T, P>(&self, fa: Higher<Self::Witness, T>, mut predicate: P) -> Option<T>
    where
        T: 'static,
        P: FnMut(&T) -> bool,
    {
        self.fold_left(fa, None, |found, value| {
            found.or_else(|| predicate(&value).then_some(value))
        })
    }
}

/// The `Foldable` instance built from a family's sequential iteration.
///
/// The searching operations stop at the first decisive element, so they also
/// terminate on unbounded families when a match exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralFoldable<S> {
    adapter: S,
}

impl<S: Sequential> GeneralFoldable<S> {
    /// Creates the instance.
    pub const fn new(adapter: S) -> Self {
        Self { adapter }
    }
}

impl<S: Sequential> Kinded for GeneralFoldable<S> {
    type Witness = S::Witness;
}

impl<S: Sequential> Foldable for GeneralFoldable<S> {
    fn fold_left<T, B, F>(&self, fa: Higher<Self::Witness, T>, seed: B, function: F) -> B
    where
        T: 'static,
        F: FnMut(B, T) -> B,
    {
        self.adapter.elements(fa).fold(seed, function)
    }

    fn fold_right<T, B, F>(&self, fa: Higher<Self::Witness, T>, seed: B, mut function: F) -> B
    where
        T: 'static,
        F: FnMut(T, B) -> B,
    {
        match self.adapter.right_to_left(fa) {
            Backward::Reversed(elements) => {
                elements.fold(seed, |accumulator, value| function(value, accumulator))
            }
            Backward::ForwardOnly(mut elements) => {
                fold_right_recursive(&mut elements, seed, &mut function)
            }
        }
    }

    fn is_empty<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> bool {
        self.adapter.elements(fa).next().is_none()
    }

    fn exists<T, P>(&self, fa: Higher<Self::Witness, T>, mut predicate: P) -> bool
    where
        T: 'static,
        P: FnMut(&T) -> bool,
    {
        self.adapter.elements(fa).any(|value| predicate(&value))
    }

    fn find<T, P>(&self, fa: Higher<Self::Witness, T>, predicate: P) -> Option<T>
    where
        T: 'static,
        P: FnMut(&T) -> bool,
    {
        self.adapter.elements(fa).find(predicate)
    }
}

// Depth grows with the element count.
fn fold_right_recursive<I, B, F>(elements: &mut I, seed: B, function: &mut F) -> B
where
    I: Iterator,
    F: FnMut(I::Item, B) -> B,
{
    match elements.next() {
        None => seed,
        Some(value) => {
            let accumulator = fold_right_recursive(elements, seed, function);
            function(value, accumulator)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Either, List, Maybe};
    use crate::typeclass::Instances;
    use crate::typeclass::monoid::{Product, Sum};
    use rstest::rstest;

    #[rstest]
    fn fold_left_and_fold_right_agree_for_addition() {
        let foldable = Instances::<List>::foldable();
        let left = foldable.fold_left(Higher::widen(vec![1, 2, 3, 4]), 0, |acc, n| acc + n);
        let right = foldable.fold_right(Higher::widen(vec![1, 2, 3, 4]), 0, |n, acc| acc + n);
        assert_eq!(left, 10);
        assert_eq!(right, 10);
    }

    #[rstest]
    fn fold_left_follows_iteration_order() {
        let foldable = Instances::<List>::foldable();
        let letters = Higher::widen(vec!["a", "b", "c"]);
        let text = foldable.fold_left(letters, String::new(), |acc, s| acc + s);
        assert_eq!(text, "abc");
    }

    #[rstest]
    fn fold_map_with_product() {
        let foldable = Instances::<List>::foldable();
        let result: u64 = foldable.fold_map(Higher::widen(vec![1_u64, 2, 3]), &Product, |n| n + 1);
        assert_eq!(result, 24);
    }

    #[rstest]
    fn fold_with_sum() {
        let foldable = Instances::<Maybe>::foldable();
        assert_eq!(foldable.fold(Higher::widen(Some(7)), &Sum), 7);
        assert_eq!(foldable.fold(Higher::widen(None::<i32>), &Sum), 0);
    }

    #[rstest]
    #[case(Ok(3), 1)]
    #[case(Err("no"), 0)]
    fn either_has_at_most_one_element(
        #[case] input: Result<i32, &'static str>,
        #[case] expected: usize,
    ) {
        let foldable = Instances::<Either<&'static str>>::foldable();
        assert_eq!(foldable.length(Higher::widen(input)), expected);
    }

    #[rstest]
    fn searching_operations() {
        let foldable = Instances::<List>::foldable();
        let values = || Higher::<List, i32>::widen(vec![3, 8, 5, 10]);
        assert!(foldable.exists(values(), |n| *n > 9));
        assert!(!foldable.for_all(values(), |n| n % 2 == 0));
        assert_eq!(foldable.find(values(), |n| n % 2 == 0), Some(8));
        assert_eq!(foldable.to_vec(values()), vec![3, 8, 5, 10]);
        assert!(!foldable.is_empty(values()));
    }

    #[rstest]
    fn recursive_right_fold_matches_reversed_order() {
        let mut elements = vec![1, 2, 3].into_iter();
        let mut push = |value: i32, mut acc: Vec<i32>| {
            acc.push(value);
            acc
        };
        let folded = fold_right_recursive(&mut elements, Vec::new(), &mut push);
        assert_eq!(folded, vec![3, 2, 1]);
    }
}
