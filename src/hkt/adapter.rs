//! The functional adapter contract every family implements.
//!
//! An adapter is the only code that knows both the witness and the concrete
//! container. It supplies the primitives the generic layer is built from:
//!
//! - [`FunctionalAdapter`]: `unit`, `map`, `flat_map`, `ap` (mandatory)
//! - [`ZeroAdapter`]: `zero`, `plus` (optional, for `MonadZero` / `MonadPlus`)
//! - [`Sequential`]: ordered element access (optional, for `Foldable` /
//!   `Traverse`)
//!
//! Adapters are stateless zero-sized values. The generic layer assumes, but
//! cannot check, that they obey the functor and monad laws; the law suites in
//! `tests/` are the safety net.

use super::higher::Higher;
use super::witness::Kinded;
use crate::error::Capability;

/// Primitive operations of one container family.
///
/// # Laws
///
/// ```text
/// map(fa, |x| x)                   == fa
/// map(map(fa, f), g)               == map(fa, |x| g(f(x)))
/// ap(unit(|x| x), fa)              == fa
/// ap(unit(f), unit(a))             == unit(f(a))
/// flat_map(unit(a), f)             == f(a)
/// flat_map(fa, unit)               == fa
/// flat_map(flat_map(fa, f), g)     == flat_map(fa, |a| flat_map(f(a), g))
/// ```
///
/// Closures are `FnMut` because multi-element families call them once per
/// element, and `'static` because lazy families keep them inside the result.
pub trait FunctionalAdapter: Kinded + Copy + Default + Send + Sync {
    /// The optional capabilities this adapter implements.
    const CAPABILITIES: Capabilities;

    /// Lifts a single value into the family.
    fn unit<T: 'static>(&self, value: T) -> Higher<Self::Witness, T>;

    /// Applies `function` to every element.
    fn map<T, R, F>(&self, fa: Higher<Self::Witness, T>, function: F) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static;

    /// Replaces every element with the container `function` returns for it
    /// and flattens the result.
    fn flat_map<T, R, F>(
        &self,
        fa: Higher<Self::Witness, T>,
        function: F,
    ) -> Higher<Self::Witness, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Self::Witness, R> + 'static;

    /// Applies the functions held in `ff` to the values held in `fa`.
    ///
    /// `T: Clone` allows multi-element families to feed one value to several
    /// functions.
    fn ap<T, R, F>(
        &self,
        ff: Higher<Self::Witness, F>,
        fa: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static;
}

/// The optional `zero` / `plus` pair.
///
/// # Laws
///
/// ```text
/// plus(zero(), fa)                 == fa
/// plus(fa, zero())                 == fa
/// plus(plus(a, b), c)              == plus(a, plus(b, c))
/// flat_map(zero(), f)              == zero()
/// ```
pub trait ZeroAdapter: FunctionalAdapter {
    /// The empty container.
    fn zero<T: 'static>(&self) -> Higher<Self::Witness, T>;

    /// Combines two containers using the family's canonical policy.
    fn plus<T: 'static>(
        &self,
        left: Higher<Self::Witness, T>,
        right: Higher<Self::Witness, T>,
    ) -> Higher<Self::Witness, T>;
}

/// Right-to-left access to a family's elements.
///
/// A family that can walk its elements backwards returns
/// [`Backward::Reversed`]; one that can only walk forwards returns
/// [`Backward::ForwardOnly`] and pays for a right fold with recursion.
#[derive(Debug, Clone)]
pub enum Backward<R, F> {
    /// The elements, last first.
    Reversed(R),
    /// The elements, first first.
    ForwardOnly(F),
}

/// The sequential iteration capability.
///
/// `elements` must produce the same order every time it is called on equal
/// containers. Unbounded families may return unbounded iterators; bounding
/// them is the caller's job.
pub trait Sequential: FunctionalAdapter {
    /// Left-to-right element iterator.
    type Elements<T: 'static>: Iterator<Item = T>;

    /// Right-to-left element iterator, when the family has one.
    type Reversed<T: 'static>: Iterator<Item = T>;

    /// Consumes the container, yielding its elements left to right.
    fn elements<T: 'static>(&self, fa: Higher<Self::Witness, T>) -> Self::Elements<T>;

    /// Consumes the container, yielding its elements right to left if
    /// possible.
    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<Self::Witness, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>>;
}

/// The set of optional capabilities an adapter publishes.
///
/// # Examples
///
/// ```rust
/// use kindling::error::Capability;
/// use kindling::hkt::Capabilities;
///
/// let caps = Capabilities::MONAD.with_zero();
/// assert!(caps.supports(Capability::Zero));
/// assert!(!caps.supports(Capability::Sequential));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capabilities {
    zero: bool,
    sequential: bool,
}

impl Capabilities {
    /// Only the mandatory monad primitives.
    pub const MONAD: Self = Self {
        zero: false,
        sequential: false,
    };

    /// Adds `zero` / `plus`.
    #[must_use]
    pub const fn with_zero(self) -> Self {
        Self { zero: true, ..self }
    }

    /// Adds sequential iteration.
    #[must_use]
    pub const fn with_sequential(self) -> Self {
        Self {
            sequential: true,
            ..self
        }
    }

    /// Returns `true` if `capability` is in the set.
    pub const fn supports(self, capability: Capability) -> bool {
        match capability {
            Capability::Zero => self.zero,
            Capability::Sequential => self.sequential,
        }
    }

    /// Iterates over the capabilities in the set.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        [Capability::Zero, Capability::Sequential]
            .into_iter()
            .filter(move |capability| self.supports(*capability))
    }
}
