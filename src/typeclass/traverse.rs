//! Traverse type class - turning a container of effects inside out.
//!
//! `traverse_a` maps every element of a source container to a computation in
//! a *target* family and collects the results, producing one target
//! computation whose result is a source container:
//!
//! ```text
//! traverse_a(target, [a, b, c], f) : G<[R]>    where f : T -> G<R>
//! ```
//!
//! The source is walked left to right. The accumulator starts as
//! `target.unit(source.zero())` and each step appends through the target's
//! `map2`, so the target's effects happen in source order and a target
//! failure (an absent `Option`, an `Err`) wins over everything after it.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! traverse_a(Id, fa, |x| Identity(f(x))) == Identity(map(fa, f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::Higher;
//! use kindling::instances::{List, Maybe};
//! use kindling::typeclass::{Instances, Traverse};
//!
//! let traverse = Instances::<List>::traverse();
//! let maybe = Instances::<Maybe>::applicative();
//!
//! let all = traverse.traverse_a(&maybe, Higher::widen(vec![1, 2, 3]), |n| Higher::widen(Some(n * 2)));
//! assert_eq!(all.narrow().map(Higher::narrow), Some(vec![2, 4, 6]));
//!
//! let none = traverse.traverse_a(&maybe, Higher::widen(vec![1, 2, 3]), |n| {
//!     Higher::widen((n != 2).then_some(n))
//! });
//! assert!(none.narrow().is_none());
//! ```

use super::applicative::Applicative;
use super::functor::Functor;
use crate::hkt::{Higher, Kinded, Sequential, ZeroAdapter};

/// A type class for families whose elements can be visited in order under
/// an applicative effect.
pub trait Traverse: Functor {
    /// Maps every element to a target computation and collects the results.
    ///
    /// # Arguments
    ///
    /// * `target` - The applicative instance of the target family
    /// * `fa` - The source container
    /// * `function` - Produces one target computation per element
    ///
    /// # Returns
    ///
    /// One target computation holding a source container of results
    fn traverse_a<G, T, R, F>(
        &self,
        target: &G,
        fa: Higher<Self::Witness, T>,
        function: F,
    ) -> Higher<G::Witness, Higher<Self::Witness, R>>
    where
        G: Applicative,
        T: 'static,
        R: Clone + 'static,
        F: FnMut(T) -> Higher<G::Witness, R>,
        Higher<Self::Witness, R>: Clone;

    /// Turns a container of target computations into a target computation of
    /// a container.
    fn sequence_a<G, T>(
        &self,
        target: &G,
        fga: Higher<Self::Witness, Higher<G::Witness, T>>,
    ) -> Higher<G::Witness, Higher<Self::Witness, T>>
    where
        G: Applicative,
        T: Clone + 'static,
        Higher<Self::Witness, T>: Clone,
    {
        self.traverse_a(target, fga, |computation| computation)
    }
}

/// The `Traverse` instance built from a functor and an adapter supplying
/// `zero` / `plus` and sequential iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralTraverse<Fu, S> {
    functor: Fu,
    adapter: S,
}

impl<Fu, S> GeneralTraverse<Fu, S>
where
    S: ZeroAdapter + Sequential,
    Fu: Functor<Witness = S::Witness>,
{
    /// Creates the instance.
    pub const fn new(functor: Fu, adapter: S) -> Self {
        Self { functor, adapter }
    }
}

impl<Fu, S> Kinded for GeneralTraverse<Fu, S>
where
    S: ZeroAdapter + Sequential,
    Fu: Functor<Witness = S::Witness>,
{
    type Witness = S::Witness;
}

impl<Fu, S> Functor for GeneralTraverse<Fu, S>
where
    S: ZeroAdapter + Sequential,
    Fu: Functor<Witness = S::Witness>,
{
    #[inline]
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.functor.map(fa, function)
    }
}

impl<Fu, S> Traverse for GeneralTraverse<Fu, S>
where
    S: ZeroAdapter + Sequential,
    Fu: Functor<Witness = S::Witness>,
{
    fn traverse_a<G, T, R, F>(
        &self,
        target: &G,
        fa: Higher<Self::Witness, T>,
        function: F,
    ) -> Higher<G::Witness, Higher<Self::Witness, R>>
    where
        G: Applicative,
        T: 'static,
        R: Clone + 'static,
        F: FnMut(T) -> Higher<G::Witness, R>,
        Higher<Self::Witness, R>: Clone,
    {
        let source = self.adapter;
        let seed = target.unit(source.zero::<R>());
        self.adapter
            .elements(fa)
            .map(function)
            .fold(seed, |accumulator, next| {
                target.map2(accumulator, next, move |collected, value| {
                    source.plus(collected, source.unit(value))
                })
            })
    }
}
