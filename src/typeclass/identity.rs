//! Identity wrapper type - the container of the trivial family.
//!
//! `Identity<A>` holds exactly one value and has no effect of its own. It is
//! the concrete container of the `Id` family, which makes it:
//!
//! - The applicative that states the traverse identity law
//! - A minimal family for exercising generic code

/// A transparent wrapper around exactly one value.
///
/// # Examples
///
/// ```rust
/// use kindling::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Unwraps the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }

    /// Applies a function to the wrapped value.
    #[inline]
    pub fn map<B, F: FnOnce(A) -> B>(self, function: F) -> Identity<B> {
        Identity(function(self.0))
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> IntoIterator for Identity<A> {
    type Item = A;
    type IntoIter = std::iter::Once<A>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.0)
    }
}
