//! Functor type class - mapping over the elements of any family.
//!
//! This module provides the `Functor` trait and [`GeneralFunctor`], the
//! instance every family gets for free from its adapter's `map`.
//!
//! # Laws
//!
//! All `Functor` instances must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::Higher;
//! use kindling::instances::List;
//! use kindling::typeclass::{Functor, Instances};
//!
//! let functor = Instances::<List>::functor();
//! let doubled = functor.map(Higher::widen(vec![1, 2, 3]), |n| n * 2);
//! assert_eq!(doubled.narrow(), vec![2, 4, 6]);
//! ```

use crate::hkt::{FunctionalAdapter, Higher, Kinded};

/// A type class for families whose elements can be transformed in place.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// map(fa, |x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// map(map(fa, f), g) == map(fa, |x| g(f(x)))
/// ```
pub trait Functor: Kinded {
    /// Applies a function to every element.
    ///
    /// # Arguments
    ///
    /// * `fa` - The container to transform
    /// * `function` - A function that transforms one element
    ///
    /// # Returns
    ///
    /// A container of the same family and shape holding the results
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::Maybe;
    /// use kindling::typeclass::{Functor, Instances};
    ///
    /// let functor = Instances::<Maybe>::functor();
    /// let length = functor.map(Higher::widen(Some("four")), str::len);
    /// assert_eq!(length.narrow(), Some(4));
    /// ```
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static;

    /// Replaces every element with a clone of `value`.
    ///
    /// This is equivalent to `map(fa, |_| value.clone())`.
    fn replace<T, R>(&self, fa: Higher<Self::Witness, T>, value: R) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: Clone + 'static,
    {
        self.map(fa, move |_| value.clone())
    }

    /// Discards every element, keeping only the shape.
    fn void<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> Higher<Self::Witness, ()> {
        self.map(fa, |_| ())
    }
}

/// The `Functor` instance built from an adapter's `map`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralFunctor<A> {
    adapter: A,
}

impl<A: FunctionalAdapter> GeneralFunctor<A> {
    /// Creates the instance.
    pub const fn new(adapter: A) -> Self {
        Self { adapter }
    }
}

impl<A: FunctionalAdapter> Kinded for GeneralFunctor<A> {
    type Witness = A::Witness;
}

impl<A: FunctionalAdapter> Functor for GeneralFunctor<A> {
    #[inline]
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        self.adapter.map(fa, function)
    }
}
