//! Applicative type class - lifting values and applying lifted functions.
//!
//! An `Applicative` adds two operations to a [`Functor`]:
//!
//! - `unit`: lift a plain value into the family
//! - `ap`: apply functions held in the family to values held in the family
//!
//! From these, `map2` and `product` combine two independent containers.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(unit(|x| x), fa) == fa
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(unit(f), unit(a)) == unit(f(a))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! ap(ff, unit(a)) == ap(unit(|f| f(a)), ff)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::Higher;
//! use kindling::instances::Maybe;
//! use kindling::typeclass::{Applicative, Instances};
//!
//! let applicative = Instances::<Maybe>::applicative();
//! let sum = applicative.map2(
//!     Higher::widen(Some(1)),
//!     Higher::widen(Some(2)),
//!     |a, b| a + b,
//! );
//! assert_eq!(sum.narrow(), Some(3));
//! ```

use super::functor::Functor;
use crate::hkt::{FunctionalAdapter, Higher, Kinded};

/// A type class for families that can lift values and apply lifted functions.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// ap(unit(|x| x), fa) == fa
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// ap(unit(f), unit(a)) == unit(f(a))
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into the family.
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T>;

    /// Applies the functions in `ff` to the values in `fa`.
    ///
    /// # Arguments
    ///
    /// * `ff` - A container of functions
    /// * `fa` - A container of arguments
    ///
    /// # Returns
    ///
    /// A container of results, combined according to the family's policy
    fn ap<T, R, F>(
        &self,
        ff: Higher<Self::Witness, F>,
        fa: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static;

    /// Combines two containers with a binary function.
    ///
    /// Expressed as `ap(map(fa, curry(function)), fb)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::List;
    /// use kindling::typeclass::{Applicative, Instances};
    ///
    /// let applicative = Instances::<List>::applicative();
    /// let sums = applicative.map2(
    ///     Higher::widen(vec![1, 2]),
    ///     Higher::widen(vec![10, 20]),
    ///     |a, b| a + b,
    /// );
    /// assert_eq!(sums.narrow(), vec![11, 21, 12, 22]);
    /// ```
    fn map2<A, B, R, F>(
        &self,
        fa: Higher<Self::Witness, A>,
        fb: Higher<Self::Witness, B>,
        function: F,
    ) -> Higher<Self::Witness, R>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        R: 'static,
        F: FnMut(A, B) -> R + Clone + 'static,
    {
        let partial = self.map(fa, move |a: A| {
            let mut function = function.clone();
            move |b: B| function(a.clone(), b)
        });
        self.ap(partial, fb)
    }

    /// Pairs the elements of two containers.
    fn product<A, B>(
        &self,
        fa: Higher<Self::Witness, A>,
        fb: Higher<Self::Witness, B>,
    ) -> Higher<Self::Witness, (A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        self.map2(fa, fb, |a, b| (a, b))
    }
}

/// The `Applicative` instance built from a functor and an adapter's
/// `unit` / `ap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralApplicative<Fu, A> {
    functor: Fu,
    adapter: A,
}

impl<Fu, A> GeneralApplicative<Fu, A>
where
    A: FunctionalAdapter,
    Fu: Functor<Witness = A::Witness>,
{
    /// Creates the instance.
    pub const fn new(functor: Fu, adapter: A) -> Self {
        Self { functor, adapter }
    }
}

impl<Fu, A> Kinded for GeneralApplicative<Fu, A>
where
    A: FunctionalAdapter,
    Fu: Functor<Witness = A::Witness>,
{
    type Witness = A::Witness;
}

impl<Fu, A> Functor for GeneralApplicative<Fu, A>
where
    A: FunctionalAdapter,
    Fu: Functor<Witness = A::Witness>,
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

impl<Fu, A> Applicative for GeneralApplicative<Fu, A>
where
    A: FunctionalAdapter,
    Fu: Functor<Witness = A::Witness>,
{
    #[inline]
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T> {
        self.adapter.unit(value)
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
        self.adapter.ap(ff, fa)
    }
}
