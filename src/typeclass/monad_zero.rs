//! `MonadZero` - a monad with an empty container.
//!
//! With `zero` available, filtering needs no family-specific code: each
//! element is replaced by `unit(x)` when it passes and by `zero()` when it
//! does not, and `flat_map` does the rest.
//!
//! # Laws
//!
//! ```text
//! flat_map(zero(), f)             == zero()
//! filter(filter(fa, p), p)        == filter(fa, p)
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use super::monad::Monad;
use crate::hkt::{Higher, Kinded, ZeroAdapter};

/// A monad with an empty container.
pub trait MonadZero: Monad {
    /// The empty container.
    fn zero<T: 'static>(&self) -> Higher<Self::Witness, T>;

    /// Keeps the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::Maybe;
    /// use kindling::typeclass::{Applicative, Instances, MonadZero};
    ///
    /// let monad = Instances::<Maybe>::monad_zero();
    /// assert_eq!(monad.filter(monad.unit(2), |n| *n > 1).narrow(), Some(2));
    /// assert_eq!(monad.filter(monad.unit(2), |n| *n > 5).narrow(), None);
    /// ```
    fn filter<T, P>(
        &self,
        fa: Higher<Self::Witness, T>,
        mut predicate: P,
    ) -> Higher<Self::Witness, T>
    where
        T: 'static,
        P: FnMut(&T) -> bool + 'static,
    {
        let instance = self.clone();
        self.flat_map(fa, move |value| {
            if predicate(&value) {
                instance.unit(value)
            } else {
                instance.zero()
            }
        })
    }
}

/// The `MonadZero` instance built from a monad and an adapter's `zero`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralMonadZero<M, Z> {
    monad: M,
    zero: Z,
}

impl<M, Z> GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    /// Creates the instance.
    pub const fn new(monad: M, zero: Z) -> Self {
        Self { monad, zero }
    }

    /// The adapter supplying `zero` / `plus`.
    pub const fn zero_adapter(&self) -> &Z {
        &self.zero
    }
}

impl<M, Z> Kinded for GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    type Witness = Z::Witness;
}

impl<M, Z> Functor for GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    #[inline]
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.monad.map(fa, function)
    }
}

impl<M, Z> Applicative for GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    #[inline]
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T> {
        self.monad.unit(value)
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
        self.monad.ap(ff, fa)
    }
}

impl<M, Z> Monad for GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
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
        self.monad.flat_map(fa, function)
    }
}

impl<M, Z> MonadZero for GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    #[inline]
    fn zero<T: 'static>(&self) -> Higher<Self::Witness, T> {
        self.zero.zero()
    }
}
