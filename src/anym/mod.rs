//! `AnyM` - one monadic surface over every registered family.
//!
//! `AnyM<W, T>` wraps a `Higher<W, T>` and exposes ordinary combinators
//! (`map`, `flat_map`, `filter`, `zip`, folds, `traverse`) by delegating to
//! the canonical instances of `W`. Callers never see an adapter or a type
//! class. The only way back to the concrete container is [`AnyM::unwrap`].
//!
//! Two `AnyM` values combine only when they share a witness; this is a type
//! error, not a runtime check. Values that crossed an erasure boundary are
//! brought back with [`AnyM::restore`] or `TryFrom<ErasedHigher<T>>`, which
//! fail with [`KindError::WitnessMismatch`] on a foreign family.
//!
//! [`ListT`] layers a list over any family, for computations that produce
//! many values inside one effect.
//!
//! # Examples
//!
//! ```rust
//! use kindling::anym::AnyM;
//! use kindling::instances::{List, Maybe};
//!
//! fn describe<W: kindling::hkt::Witness>(numbers: AnyM<W, i32>) -> AnyM<W, String> {
//!     numbers.map(|n| format!("#{n}"))
//! }
//!
//! assert_eq!(describe(AnyM::<List, _>::of(vec![1, 2])).unwrap(), vec!["#1", "#2"]);
//! assert_eq!(describe(AnyM::<Maybe, _>::of(Some(3))).unwrap(), Some("#3".to_string()));
//! ```

mod comprehension;
mod list_t;

use std::fmt;

pub use comprehension::{Append, Bound, Comprehension, For};
pub use list_t::ListT;

use crate::error::{KindError, Result};
use crate::hkt::{ErasedHigher, Higher, Sequential, Witness, WitnessRegistry, ZeroAdapter};
use crate::typeclass::{
    Applicative, Foldable, Functor, Instances, Monad, MonadPlus, MonadZero, Monoid, Traverse,
};

/// A value of any family `W`, with monadic combinators.
pub struct AnyM<W: Witness, T> {
    value: Higher<W, T>,
}

impl<W: Witness, T: 'static> AnyM<W, T> {
    /// Wraps a concrete container.
    pub fn of(value: W::Of<T>) -> Self {
        Self::from_higher(Higher::widen(value))
    }

    /// Wraps an already tagged value.
    pub const fn from_higher(value: Higher<W, T>) -> Self {
        Self { value }
    }

    /// Lifts a single value through the family's `unit`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::AnyM;
    /// use kindling::instances::List;
    ///
    /// assert_eq!(AnyM::<List, _>::unit('k').unwrap(), vec!['k']);
    /// ```
    pub fn unit(value: T) -> Self {
        Self::from_higher(Instances::<W>::applicative().unit(value))
    }

    /// The witness of the wrapped value.
    pub const fn witness(&self) -> W {
        self.value.witness()
    }

    /// Returns the concrete container.
    pub fn unwrap(self) -> W::Of<T> {
        self.value.narrow()
    }

    /// Returns the tagged value.
    pub fn into_higher(self) -> Higher<W, T> {
        self.value
    }

    /// Borrows the concrete container.
    pub const fn as_concrete(&self) -> &W::Of<T> {
        self.value.as_concrete()
    }

    /// Transforms every element.
    pub fn map<R, F>(self, function: F) -> AnyM<W, R>
    where
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        AnyM::from_higher(Instances::<W>::functor().map(self.value, function))
    }

    /// Replaces every element with the `AnyM` `function` returns for it, and
    /// flattens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::AnyM;
    /// use kindling::instances::List;
    ///
    /// let replicated = AnyM::<List, usize>::of(vec![1, 2, 3]).flat_map(|n| AnyM::of(vec![n; n]));
    /// assert_eq!(replicated.unwrap(), vec![1, 2, 2, 3, 3, 3]);
    /// ```
    pub fn flat_map<R, F>(self, mut function: F) -> AnyM<W, R>
    where
        R: 'static,
        F: FnMut(T) -> AnyM<W, R> + 'static,
    {
        let monad = Instances::<W>::monad();
        AnyM::from_higher(monad.flat_map(self.value, move |value| function(value).value))
    }

    /// Applies the functions wrapped in `functions` to the wrapped values.
    pub fn ap<R, F>(self, functions: AnyM<W, F>) -> AnyM<W, R>
    where
        T: Clone,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        AnyM::from_higher(Instances::<W>::applicative().ap(functions.value, self.value))
    }

    /// Pairs the elements of two values of the same family.
    pub fn zip<U>(self, other: AnyM<W, U>) -> AnyM<W, (T, U)>
    where
        T: Clone,
        U: Clone + 'static,
    {
        AnyM::from_higher(Instances::<W>::applicative().product(self.value, other.value))
    }

    /// Combines the elements of two values of the same family.
    pub fn zip_with<U, R, F>(self, other: AnyM<W, U>, function: F) -> AnyM<W, R>
    where
        T: Clone,
        U: Clone + 'static,
        R: 'static,
        F: FnMut(T, U) -> R + Clone + 'static,
    {
        AnyM::from_higher(Instances::<W>::applicative().map2(self.value, other.value, function))
    }

    /// Forgets the family at the type level.
    pub fn erase(self) -> ErasedHigher<T>
    where
        W::Of<T>: 'static,
    {
        self.value.erase()
    }

    /// Restores an erased value, checking both that `W` is registered and
    /// that the value belongs to it.
    ///
    /// # Errors
    ///
    /// [`KindError::UnregisteredWitness`] or [`KindError::WitnessMismatch`].
    pub fn restore(erased: ErasedHigher<T>, registry: &WitnessRegistry) -> Result<Self>
    where
        W::Of<T>: 'static,
    {
        registry.narrow::<W, T>(erased).map(Self::from_higher)
    }

    /// Pairs with an erased value, which must belong to `W`.
    ///
    /// # Errors
    ///
    /// [`KindError::WitnessMismatch`] if `other` belongs to another family.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::AnyM;
    /// use kindling::error::KindError;
    /// use kindling::instances::{List, Maybe};
    ///
    /// let foreign = AnyM::<Maybe, i32>::of(Some(1)).erase();
    /// let result = AnyM::<List, i32>::of(vec![1]).zip_erased(foreign);
    /// assert_eq!(
    ///     result.unwrap_err(),
    ///     KindError::WitnessMismatch { expected: "list", found: "maybe" }
    /// );
    /// ```
    pub fn zip_erased<U>(self, other: ErasedHigher<U>) -> Result<AnyM<W, (T, U)>>
    where
        T: Clone,
        U: Clone + 'static,
        W::Of<U>: 'static,
    {
        let other = AnyM::try_from(other)?;
        Ok(self.zip(other))
    }
}

impl<W, T> AnyM<W, T>
where
    W: Witness,
    W::Adapter: ZeroAdapter,
    T: 'static,
{
    /// The empty value of the family.
    pub fn empty() -> Self {
        Self::from_higher(Instances::<W>::monad_zero().zero())
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::from_higher(Instances::<W>::monad_zero().filter(self.value, predicate))
    }

    /// Combines with another value using the family's own `plus`.
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self::from_higher(Instances::<W>::monad_plus().plus(self.value, other.value))
    }

    /// Combines with another value using a caller-supplied monoid.
    #[must_use]
    pub fn plus_with<M>(self, other: Self, monoid: &M) -> Self
    where
        M: Monoid<Higher<W, T>>,
    {
        Self::from_higher(monoid.combine(self.value, other.value))
    }
}

impl<W, T> AnyM<W, T>
where
    W: Witness,
    W::Adapter: Sequential,
    T: 'static,
{
    /// Reduces from the first element to the last.
    pub fn fold_left<B, F>(self, seed: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        Instances::<W>::foldable().fold_left(self.value, seed, function)
    }

    /// Reduces from the last element to the first.
    pub fn fold_right<B, F>(self, seed: B, function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        Instances::<W>::foldable().fold_right(self.value, seed, function)
    }

    /// Maps every element into a monoid and combines the results.
    pub fn fold_map<A, M, F>(self, monoid: &M, function: F) -> A
    where
        M: Monoid<A>,
        F: FnMut(T) -> A,
    {
        Instances::<W>::foldable().fold_map(self.value, monoid, function)
    }

    /// Collects the elements in iteration order.
    pub fn to_vec(self) -> Vec<T> {
        Instances::<W>::foldable().to_vec(self.value)
    }
}

impl<W, T> AnyM<W, T>
where
    W: Witness,
    W::Adapter: ZeroAdapter + Sequential,
    T: 'static,
{
    /// Maps every element to a value of family `G` and collects the results
    /// into one `G` value holding a concrete container of family `W`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::AnyM;
    /// use kindling::instances::{List, Maybe};
    ///
    /// let doubled = AnyM::<List, i32>::of(vec![1, 2, 3]).traverse(|n| AnyM::<Maybe, _>::of(Some(n * 2)));
    /// assert_eq!(doubled.unwrap(), Some(vec![2, 4, 6]));
    /// ```
    pub fn traverse<G, R, F>(self, mut function: F) -> AnyM<G, W::Of<R>>
    where
        G: Witness,
        R: Clone + 'static,
        F: FnMut(T) -> AnyM<G, R>,
        Higher<W, R>: Clone,
    {
        let target = Instances::<G>::applicative();
        let traverse = Instances::<W>::traverse();
        let traversed = traverse.traverse_a(&target, self.value, |value| function(value).value);
        AnyM::from_higher(target.map(traversed, Higher::narrow))
    }
}

impl<W: Witness, T: 'static> From<Higher<W, T>> for AnyM<W, T> {
    fn from(value: Higher<W, T>) -> Self {
        Self::from_higher(value)
    }
}

impl<W: Witness, T: 'static> TryFrom<ErasedHigher<T>> for AnyM<W, T>
where
    W::Of<T>: 'static,
{
    type Error = KindError;

    fn try_from(erased: ErasedHigher<T>) -> Result<Self> {
        erased.narrow::<W>().map(Self::from_higher)
    }
}

impl<W: Witness, T> Clone for AnyM<W, T>
where
    W::Of<T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

impl<W: Witness, T> PartialEq for AnyM<W, T>
where
    W::Of<T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W: Witness, T> fmt::Debug for AnyM<W, T>
where
    W::Of<T>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("AnyM")
            .field(&W::NAME)
            .field(self.value.as_concrete())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Either, Id, List, Maybe};
    use crate::typeclass::monoid;
    use rstest::rstest;

    // =========================================================================
    // Basic combinators
    // =========================================================================

    #[rstest]
    fn map_doubles_a_list() {
        let result = AnyM::<List, i32>::of(vec![1, 2, 3]).map(|n| n * 2);
        assert_eq!(result.unwrap(), vec![2, 4, 6]);
    }

    #[rstest]
    fn filter_on_unit() {
        let two = || AnyM::<Maybe, i32>::unit(2);
        assert_eq!(two().filter(|n| *n > 1), AnyM::unit(2));
        assert_eq!(two().filter(|n| *n > 5), AnyM::empty());
    }

    #[rstest]
    fn ap_applies_wrapped_functions() {
        let render: fn(i32) -> String = |n| n.to_string();
        let functions = AnyM::<Maybe, _>::of(Some(render));
        let rendered = AnyM::<Maybe, i32>::of(Some(7)).ap(functions);
        assert_eq!(rendered.unwrap(), Some("7".to_string()));
    }

    #[rstest]
    fn zip_and_zip_with() {
        let pairs = AnyM::<List, i32>::of(vec![1, 2]).zip(AnyM::of(vec!['a']));
        assert_eq!(pairs.unwrap(), vec![(1, 'a'), (2, 'a')]);

        let sums = AnyM::<Either<String>, i32>::of(Ok(1)).zip_with(AnyM::of(Ok(2)), |a, b| a + b);
        assert_eq!(sums.unwrap(), Ok(3));
    }

    #[rstest]
    fn witness_reports_family() {
        assert_eq!(AnyM::<Id, u8>::unit(0).witness(), Id);
    }

    // =========================================================================
    // Zero and plus
    // =========================================================================

    #[rstest]
    fn plus_uses_family_policy() {
        let combined = AnyM::<List, i32>::of(vec![1]).plus(AnyM::of(vec![2]));
        assert_eq!(combined.unwrap(), vec![1, 2]);

        let first = AnyM::<Maybe, i32>::of(None).plus(AnyM::of(Some(4)));
        assert_eq!(first.unwrap(), Some(4));
    }

    #[rstest]
    fn plus_with_custom_monoid() {
        let longest = monoid::of(Higher::<List, i32>::widen(vec![]), |left, right| {
            if right.as_concrete().len() > left.as_concrete().len() {
                right
            } else {
                left
            }
        });
        let result = AnyM::<List, i32>::of(vec![1]).plus_with(AnyM::of(vec![2, 3]), &longest);
        assert_eq!(result.unwrap(), vec![2, 3]);
    }

    // =========================================================================
    // Folds and traverse
    // =========================================================================

    #[rstest]
    fn folds_agree_on_sum() {
        let values = || AnyM::<List, i32>::of(vec![1, 2, 3, 4]);
        assert_eq!(values().fold_left(0, |acc, n| acc + n), 10);
        assert_eq!(values().fold_right(0, |n, acc| acc + n), 10);
        assert_eq!(values().fold_map(&monoid::Sum, |n| n * 10), 100);
        assert_eq!(values().to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn traverse_is_absent_if_any_element_is_absent() {
        let result = AnyM::<List, i32>::of(vec![1, 2, 3])
            .traverse(|n| AnyM::<Maybe, _>::of((n != 3).then_some(n)));
        assert_eq!(result.unwrap(), None);
    }

    // =========================================================================
    // Erasure
    // =========================================================================

    #[rstest]
    fn try_from_erased_checks_family() {
        let erased = AnyM::<List, i32>::of(vec![9]).erase();
        let back: Result<AnyM<List, i32>> = erased.try_into();
        assert_eq!(back.map(AnyM::unwrap), Ok(vec![9]));

        let erased = AnyM::<List, i32>::of(vec![9]).erase();
        let wrong: Result<AnyM<Maybe, i32>> = AnyM::try_from(erased);
        assert!(matches!(wrong, Err(KindError::WitnessMismatch { .. })));
    }

    #[rstest]
    fn restore_requires_registration() {
        let registry = WitnessRegistry::builder()
            .register::<Maybe>()
            .build()
            .unwrap();
        let erased = AnyM::<List, i32>::of(vec![1]).erase();
        assert_eq!(
            AnyM::<List, i32>::restore(erased, &registry).unwrap_err(),
            KindError::UnregisteredWitness { name: "list" }
        );
    }

    #[rstest]
    fn zip_erased_same_family() {
        let other = AnyM::<Maybe, char>::of(Some('z')).erase();
        let zipped = AnyM::<Maybe, i32>::of(Some(1)).zip_erased(other).unwrap();
        assert_eq!(zipped.unwrap(), Some((1, 'z')));
    }

    #[rstest]
    fn debug_names_the_family() {
        let value = AnyM::<Maybe, i32>::of(Some(1));
        assert_eq!(format!("{value:?}"), "AnyM(\"maybe\", Some(1))");
    }
}
