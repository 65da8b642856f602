//! Monoid - an identity element plus an associative combine.
//!
//! Monoids here are values, not traits on the combined type: the same
//! `Higher<List, i32>` can be combined by concatenation in one place and by
//! "keep the first non-empty" in another. They are supplied per use and are
//! never owned by a type-class instance beyond the instance they configure.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ## Left Identity
//!
//! ```text
//! combine(empty(), a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! combine(a, empty()) == a
//! ```
//!
//! ## Associativity
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use kindling::typeclass::monoid::{self, Monoid, Sum};
//!
//! assert_eq!(Sum.combine_all([1, 2, 3]), 6);
//!
//! let longest = monoid::of(String::new(), |a: String, b: String| {
//!     if b.len() > a.len() { b } else { a }
//! });
//! assert_eq!(longest.combine_all(["ab".to_string(), "abc".to_string()]), "abc");
//! ```

use std::fmt;
use std::ops::{Add, Mul};

use crate::hkt::{Higher, ZeroAdapter};

/// An identity element and an associative combine over `A`.
pub trait Monoid<A> {
    /// The identity element.
    fn empty(&self) -> A;

    /// Combines two values.
    fn combine(&self, left: A, right: A) -> A;

    /// Combines all values left to right, starting from [`Monoid::empty`].
    fn combine_all<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        values
            .into_iter()
            .fold(self.empty(), |left, right| self.combine(left, right))
    }
}

impl<A, M: Monoid<A> + ?Sized> Monoid<A> for &M {
    fn empty(&self) -> A {
        (**self).empty()
    }

    fn combine(&self, left: A, right: A) -> A {
        (**self).combine(left, right)
    }
}

/// A monoid assembled from an identity value and a combine function.
#[derive(Clone)]
pub struct FnMonoid<A, C> {
    identity: A,
    combine: C,
}

/// Builds a monoid from an identity value and an associative `combine`.
///
/// The caller is responsible for the monoid laws.
pub const fn of<A, C>(identity: A, combine: C) -> FnMonoid<A, C>
where
    A: Clone,
    C: Fn(A, A) -> A,
{
    FnMonoid { identity, combine }
}

impl<A: Clone, C: Fn(A, A) -> A> Monoid<A> for FnMonoid<A, C> {
    fn empty(&self) -> A {
        self.identity.clone()
    }

    fn combine(&self, left: A, right: A) -> A {
        (self.combine)(left, right)
    }
}

impl<A: fmt::Debug, C> fmt::Debug for FnMonoid<A, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FnMonoid")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Addition, with `A::default()` as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl<A: Add<Output = A> + Default> Monoid<A> for Sum {
    fn empty(&self) -> A {
        A::default()
    }

    fn combine(&self, left: A, right: A) -> A {
        left + right
    }
}

/// Multiplication, with one as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Product;

impl<A: Mul<Output = A> + From<u8>> Monoid<A> for Product {
    fn empty(&self) -> A {
        A::from(1)
    }

    fn combine(&self, left: A, right: A) -> A {
        left * right
    }
}

/// A family's own `zero` / `plus`, as a monoid over its containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FamilyMonoid<Z> {
    adapter: Z,
}

impl<Z: ZeroAdapter> FamilyMonoid<Z> {
    /// Wraps the family's adapter.
    pub const fn new(adapter: Z) -> Self {
        Self { adapter }
    }
}

impl<T: 'static, Z: ZeroAdapter> Monoid<Higher<Z::Witness, T>> for FamilyMonoid<Z> {
    fn empty(&self) -> Higher<Z::Witness, T> {
        self.adapter.zero()
    }

    fn combine(
        &self,
        left: Higher<Z::Witness, T>,
        right: Higher<Z::Witness, T>,
    ) -> Higher<Z::Witness, T> {
        self.adapter.plus(left, right)
    }
}
