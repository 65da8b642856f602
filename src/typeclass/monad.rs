//! Monad type class - sequencing dependent computations.
//!
//! A `Monad` refines an [`Applicative`] with `flat_map`, where the next
//! container depends on the elements of the previous one. [`GeneralMonad`]
//! takes the applicative it refines as a parameter. The pairing is only
//! lawful when that applicative's `ap` agrees with the family's `flat_map`.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(unit(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(fa, unit) == fa
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::Higher;
//! use kindling::instances::List;
//! use kindling::typeclass::{Instances, Monad};
//!
//! let monad = Instances::<List>::monad();
//! let replicated = monad.flat_map(Higher::widen(vec![1, 2, 3]), |n: usize| {
//!     Higher::widen(vec![n; n])
//! });
//! assert_eq!(replicated.narrow(), vec![1, 2, 2, 3, 3, 3]);
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use crate::hkt::{FunctionalAdapter, Higher, Kinded};

/// A type class for families that can sequence dependent computations.
///
/// # Laws
///
/// ```text
/// flat_map(unit(a), f)         == f(a)
/// flat_map(fa, unit)           == fa
/// flat_map(flat_map(fa, f), g) == flat_map(fa, |a| flat_map(f(a), g))
/// ```
pub trait Monad: Applicative {
    /// Feeds every element to `function` and flattens the containers it
    /// returns.
    ///
    /// # Arguments
    ///
    /// * `fa` - The source container
    /// * `function` - Produces a container for each element
    ///
    /// # Returns
    ///
    /// The concatenation, in the family's sense, of all produced containers
    fn flat_map<T, R, F>(
        &self,
        fa: Higher<Self::Witness, T>,
        function: F,
    ) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Self::Witness, R> + 'static;

    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::Maybe;
    /// use kindling::typeclass::{Instances, Monad};
    ///
    /// let monad = Instances::<Maybe>::monad();
    /// let nested = Higher::widen(Some(Higher::widen(Some(3))));
    /// assert_eq!(monad.flatten(nested).narrow(), Some(3));
    /// ```
    fn flatten<T: 'static>(
        &self,
        ffa: Higher<Self::Witness, Higher<Self::Witness, T>>,
    ) -> Higher<Self::Witness, T> {
        self.flat_map(ffa, |inner| inner)
    }
}

/// The `Monad` instance built from an applicative and an adapter's
/// `flat_map`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralMonad<Ap, A> {
    applicative: Ap,
    adapter: A,
}

impl<Ap, A> GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    /// Creates the instance.
    pub const fn new(applicative: Ap, adapter: A) -> Self {
        Self {
            applicative,
            adapter,
        }
    }
}

impl<Ap, A> Kinded for GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    type Witness = A::Witness;
}

impl<Ap, A> Functor for GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    #[inline]
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.applicative.map(fa, function)
    }
}

impl<Ap, A> Applicative for GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    #[inline]
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T> {
        self.applicative.unit(value)
    }

    #[inline]
    fn ap<T, R, F>(
        &self,
        ff: Higher<Self::Witness, F>,
        fa: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.applicative.ap(ff, fa)
    }
}

impl<Ap, A> Monad for GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    #[inline]
    fn flat_map<T, R, F>(
        &self,
        fa: Higher<Self::Witness, T>,
        function: F,
    ) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Self::Witness, R> + 'static,
    {
        self.adapter.flat_map(fa, function)
    }
}
