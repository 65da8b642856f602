//! `MonadPlus` - a `MonadZero` whose containers can be combined.
//!
//! The combination policy is a [`Monoid`] over `Higher<W, T>` handed in at
//! construction. The canonical choice is [`FamilyMonoid`], the family's own
//! `zero` / `plus`; any other monoid (for example "keep the first non-empty
//! container") can be plugged in without touching the family.
//!
//! # Laws
//!
//! ```text
//! plus(identity(), fa)       == fa
//! plus(fa, identity())       == fa
//! plus(plus(a, b), c)        == plus(a, plus(b, c))
//! ```
//!
//! [`FamilyMonoid`]: super::monoid::FamilyMonoid

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;
use super::monad_zero::MonadZero;
use super::monoid::Monoid;
use crate::hkt::{Higher, Kinded};

/// A `MonadZero` with an associative combination of containers holding `T`.
///
/// `T` is a trait parameter because a caller-supplied monoid may only be
/// defined for one element type.
pub trait MonadPlus<T: 'static>: MonadZero {
    /// Combines two containers.
    fn plus(
        &self,
        left: Higher<Self::Witness, T>,
        right: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, T>;

    /// The identity of [`MonadPlus::plus`].
    fn identity(&self) -> Higher<Self::Witness, T>;

    /// Combines any number of containers, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::List;
    /// use kindling::typeclass::{Instances, MonadPlus};
    ///
    /// let plus = Instances::<List>::monad_plus();
    /// let all = plus.sum([Higher::widen(vec![1]), Higher::widen(vec![2, 3])]);
    /// assert_eq!(all.narrow(), vec![1, 2, 3]);
    /// ```
    fn sum<I>(&self, values: I) -> Higher<Self::Witness, T>
    where
        I: IntoIterator<Item = Higher<Self::Witness, T>>,
    {
        values
            .into_iter()
            .fold(self.identity(), |left, right| self.plus(left, right))
    }
}

/// The `MonadPlus` instance built from a `MonadZero` and a monoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralMonadPlus<MZ, N> {
    monad_zero: MZ,
    monoid: N,
}

impl<MZ: MonadZero, N> GeneralMonadPlus<MZ, N> {
    /// Creates the instance.
    pub const fn new(monad_zero: MZ, monoid: N) -> Self {
        Self { monad_zero, monoid }
    }

    /// The monoid used by [`MonadPlus::plus`].
    pub const fn monoid(&self) -> &N {
        &self.monoid
    }
}

impl<MZ, N> Kinded for GeneralMonadPlus<MZ, N>
where
    MZ: MonadZero,
    N: Clone + 'static,
{
    type Witness = MZ::Witness;
}

impl<MZ, N> Functor for GeneralMonadPlus<MZ, N>
where
    MZ: MonadZero,
    N: Clone + 'static,
{
    #[inline]
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.monad_zero.map(fa, function)
    }
}

impl<MZ, N> Applicative for GeneralMonadPlus<MZ, N>
where
    MZ: MonadZero,
    N: Clone + 'static,
{
    #[inline]
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T> {
        self.monad_zero.unit(value)
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
        self.monad_zero.ap(ff, fa)
    }
}

impl<MZ, N> Monad for GeneralMonadPlus<MZ, N>
where
    MZ: MonadZero,
    N: Clone + 'static,
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
        self.monad_zero.flat_map(fa, function)
    }
}

impl<MZ, N> MonadZero for GeneralMonadPlus<MZ, N>
where
    MZ: MonadZero,
    N: Clone + 'static,
{
    #[inline]
    fn zero<T: 'static>(&self) -> Higher<Self::Witness, T> {
        self.monad_zero.zero()
    }
}

impl<T, MZ, N> MonadPlus<T> for GeneralMonadPlus<MZ, N>
where
    T: 'static,
    MZ: MonadZero,
    N: Monoid<Higher<MZ::Witness, T>> + Clone + 'static,
{
    #[inline]
    fn plus(
        &self,
        left: Higher<Self::Witness, T>,
        right: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, T> {
        self.monoid.combine(left, right)
    }

    #[inline]
    fn identity(&self) -> Higher<Self::Witness, T> {
        self.monoid.empty()
    }
}
