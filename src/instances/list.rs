//! The `List` family: `Vec<T>`.
//!
//! - `ap` is cartesian, functions outer and values inner, so it agrees with
//!   `flat_map`. [`ZippingApplicative`] pairs positionally instead, at the
//!   cost of the identity law.
//! - `zero` is the empty vector and `plus` concatenates.
//! - Iteration is reversible, so right folds are loops.

use crate::hkt::{
    Backward, Capabilities, FunctionalAdapter, Higher, Kinded, Sequential, Witness, ZeroAdapter,
};
use crate::typeclass::{Applicative, Functor};

/// Witness of `Vec<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct List;

impl Witness for List {
    type Of<T> = Vec<T>;
    type Adapter = ListAdapter;
    const NAME: &'static str = "list";
}

/// Adapter of the `List` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ListAdapter;

impl Kinded for ListAdapter {
    type Witness = List;
}

impl FunctionalAdapter for ListAdapter {
    const CAPABILITIES: Capabilities = Capabilities::MONAD.with_zero().with_sequential();

    fn unit<T: 'static>(&self, value: T) -> Higher<List, T> {
        Higher::widen(vec![value])
    }

    fn map<T, R, F>(&self, fa: Higher<List, T>, function: F) -> Higher<List, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(fa.narrow().into_iter().map(function).collect())
    }

    fn flat_map<T, R, F>(&self, fa: Higher<List, T>, mut function: F) -> Higher<List, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<List, R> + 'static,
    {
        Higher::widen(
            fa.narrow()
                .into_iter()
                .flat_map(|value| function(value).narrow())
                .collect(),
        )
    }

    fn ap<T, R, F>(&self, ff: Higher<List, F>, fa: Higher<List, T>) -> Higher<List, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        let values = fa.narrow();
        let functions = ff.narrow();
        let mut results = Vec::with_capacity(functions.len() * values.len());
        for mut function in functions {
            results.extend(values.iter().cloned().map(&mut function));
        }
        Higher::widen(results)
    }
}

impl ZeroAdapter for ListAdapter {
    fn zero<T: 'static>(&self) -> Higher<List, T> {
        Higher::widen(Vec::new())
    }

    fn plus<T: 'static>(&self, left: Higher<List, T>, right: Higher<List, T>) -> Higher<List, T> {
        let mut combined = left.narrow();
        combined.extend(right.narrow());
        Higher::widen(combined)
    }
}

impl Sequential for ListAdapter {
    type Elements<T: 'static> = std::vec::IntoIter<T>;
    type Reversed<T: 'static> = std::iter::Rev<std::vec::IntoIter<T>>;

    fn elements<T: 'static>(&self, fa: Higher<List, T>) -> Self::Elements<T> {
        fa.narrow().into_iter()
    }

    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<List, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>> {
        Backward::Reversed(fa.narrow().into_iter().rev())
    }
}

/// A list applicative that pairs functions and values by position.
///
/// The result is as long as the shorter input.
///
/// # Law violations
///
/// This is not a lawful [`Applicative`]. `unit` is a one-element list, so
/// `ap(unit(id), fa)` truncates `fa` to its first element and the identity
/// law only holds for inputs of length zero or one. Composition and
/// interchange fail the same way once lengths differ. Homomorphism holds.
///
/// Paired with the list `flat_map` through `general::monad` it yields a
/// monad whose `ap` disagrees with `flat_map`. Use it where positional
/// pairing is wanted, not as a drop-in for the canonical list applicative.
///
/// # Examples
///
/// ```rust
/// use kindling::hkt::Higher;
/// use kindling::instances::list::ZippingApplicative;
/// use kindling::typeclass::Applicative;
///
/// let zipped = ZippingApplicative.product(
///     Higher::widen(vec![1, 2, 3]),
///     Higher::widen(vec!['a', 'b']),
/// );
/// assert_eq!(zipped.narrow(), vec![(1, 'a'), (2, 'b')]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ZippingApplicative;

impl Kinded for ZippingApplicative {
    type Witness = List;
}

impl Functor for ZippingApplicative {
    fn map<T, R, F>(&self, fa: Higher<List, T>, function: F) -> Higher<List, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        ListAdapter.map(fa, function)
    }
}

impl Applicative for ZippingApplicative {
    fn unit<T: 'static>(&self, value: T) -> Higher<List, T> {
        ListAdapter.unit(value)
    }

    fn ap<T, R, F>(&self, ff: Higher<List, F>, fa: Higher<List, T>) -> Higher<List, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(
            ff.narrow()
                .into_iter()
                .zip(fa.narrow())
                .map(|(mut function, value)| function(value))
                .collect(),
        )
    }
}
