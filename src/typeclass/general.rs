//! Constructors for the general instances, and the canonical set per family.
//!
//! The free functions mirror the dependency structure of the instances: an
//! applicative is built from a functor, a monad from an applicative, and so
//! on. Each takes exactly the parts it needs, so any layer can be swapped.
//!
//! [`Instances`] wires the canonical set for a witness from its adapter alone.
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::{Higher, Witness};
//! use kindling::instances::Maybe;
//! use kindling::typeclass::{Applicative, Monad, general};
//!
//! let adapter = Maybe::adapter();
//! let functor = general::functor(adapter);
//! let monad = general::monad(general::applicative(functor, adapter), adapter);
//!
//! let sums = monad.map2(Higher::widen(Some(1)), Higher::widen(Some(10)), |a, b| a + b);
//! assert_eq!(sums.narrow(), Some(11));
//! let halved = monad.flat_map(Higher::widen(Some(8)), |n| Higher::widen(Some(n / 2)));
//! assert_eq!(halved.narrow(), Some(4));
//! ```

use std::marker::PhantomData;

use super::applicative::{Applicative, GeneralApplicative};
use super::foldable::GeneralFoldable;
use super::functor::{Functor, GeneralFunctor};
use super::monad::{GeneralMonad, Monad};
use super::monad_plus::GeneralMonadPlus;
use super::monad_zero::{GeneralMonadZero, MonadZero};
use super::monoid::FamilyMonoid;
use super::traverse::GeneralTraverse;
use crate::hkt::{FunctionalAdapter, Sequential, Witness, ZeroAdapter};

/// Builds a `Functor` from an adapter.
pub const fn functor<A: FunctionalAdapter>(adapter: A) -> GeneralFunctor<A> {
    GeneralFunctor::new(adapter)
}

/// Builds an `Applicative` from a functor and an adapter.
pub const fn applicative<Fu, A>(functor: Fu, adapter: A) -> GeneralApplicative<Fu, A>
where
    A: FunctionalAdapter,
    Fu: Functor<Witness = A::Witness>,
{
    GeneralApplicative::new(functor, adapter)
}

/// Builds a `Monad` from an applicative and an adapter.
pub const fn monad<Ap, A>(applicative: Ap, adapter: A) -> GeneralMonad<Ap, A>
where
    A: FunctionalAdapter,
    Ap: Applicative<Witness = A::Witness>,
{
    GeneralMonad::new(applicative, adapter)
}

/// Builds a `MonadZero` from a monad and an adapter supplying `zero`.
pub const fn monad_zero<M, Z>(monad: M, zero: Z) -> GeneralMonadZero<M, Z>
where
    Z: ZeroAdapter,
    M: Monad<Witness = Z::Witness>,
{
    GeneralMonadZero::new(monad, zero)
}

/// Builds a `MonadPlus` from a `MonadZero` and a combination monoid.
pub const fn monad_plus<MZ: MonadZero, N>(monad_zero: MZ, monoid: N) -> GeneralMonadPlus<MZ, N> {
    GeneralMonadPlus::new(monad_zero, monoid)
}

/// Builds a `Foldable` from an adapter with sequential iteration.
pub const fn foldable<S: Sequential>(adapter: S) -> GeneralFoldable<S> {
    GeneralFoldable::new(adapter)
}

/// Builds a `Traverse` from a functor and an adapter with `zero` / `plus`
/// and sequential iteration.
pub const fn traverse<Fu, S>(functor: Fu, adapter: S) -> GeneralTraverse<Fu, S>
where
    S: ZeroAdapter + Sequential,
    Fu: Functor<Witness = S::Witness>,
{
    GeneralTraverse::new(functor, adapter)
}

/// Adapter of witness `W`.
type AdapterOf<W> = <W as Witness>::Adapter;

/// The canonical `Functor` of `W`.
pub type FunctorOf<W> = GeneralFunctor<AdapterOf<W>>;
/// The canonical `Applicative` of `W`.
pub type ApplicativeOf<W> = GeneralApplicative<FunctorOf<W>, AdapterOf<W>>;
/// The canonical `Monad` of `W`.
pub type MonadOf<W> = GeneralMonad<ApplicativeOf<W>, AdapterOf<W>>;
/// The canonical `MonadZero` of `W`.
pub type MonadZeroOf<W> = GeneralMonadZero<MonadOf<W>, AdapterOf<W>>;
/// The canonical `MonadPlus` of `W`, combining with the family's own `plus`.
pub type MonadPlusOf<W> = GeneralMonadPlus<MonadZeroOf<W>, FamilyMonoid<AdapterOf<W>>>;
/// The canonical `Foldable` of `W`.
pub type FoldableOf<W> = GeneralFoldable<AdapterOf<W>>;
/// The canonical `Traverse` of `W`.
pub type TraverseOf<W> = GeneralTraverse<FunctorOf<W>, AdapterOf<W>>;

/// The canonical instances of family `W`, built from `W::adapter()`.
///
/// Instances are zero-sized and built on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct Instances<W>(PhantomData<W>);

impl<W: Witness> Instances<W> {
    /// The functor of `W`.
    pub fn functor() -> FunctorOf<W> {
        functor(W::adapter())
    }

    /// The applicative of `W`.
    pub fn applicative() -> ApplicativeOf<W> {
        applicative(Self::functor(), W::adapter())
    }

    /// The monad of `W`.
    pub fn monad() -> MonadOf<W> {
        monad(Self::applicative(), W::adapter())
    }

    /// The `MonadZero` of `W`.
    pub fn monad_zero() -> MonadZeroOf<W>
    where
        W::Adapter: ZeroAdapter,
    {
        monad_zero(Self::monad(), W::adapter())
    }

    /// The `MonadPlus` of `W`.
    pub fn monad_plus() -> MonadPlusOf<W>
    where
        W::Adapter: ZeroAdapter,
    {
        monad_plus(Self::monad_zero(), FamilyMonoid::new(W::adapter()))
    }

    /// The foldable of `W`.
    pub fn foldable() -> FoldableOf<W>
    where
        W::Adapter: Sequential,
    {
        foldable(W::adapter())
    }

    /// The traverse of `W`.
    pub fn traverse() -> TraverseOf<W>
    where
        W::Adapter: ZeroAdapter + Sequential,
    {
        traverse(Self::functor(), W::adapter())
    }
}
