//! The tagged higher-kind `Higher<W, T>` and its erased form.
//!
//! `Higher<W, T>` is "some container of family `W` holding `T`". Generic code
//! passes it around without knowing the container; the family (or the caller
//! who created it) gets the concrete value back with [`Higher::narrow`].
//!
//! Narrowing is checked by the type system: a `Higher<List, T>` can only ever
//! narrow to `Vec<T>`. When a value has to cross a boundary where the family
//! is not statically known, [`Higher::erase`] produces an [`ErasedHigher`]
//! whose narrowing is checked at runtime and reports
//! [`KindError::WitnessMismatch`] instead of miscasting.

use std::any::Any;
use std::fmt;

use super::witness::{Witness, WitnessId};
use crate::error::KindError;

/// A container of family `W` holding elements of type `T`.
///
/// # Examples
///
/// ```rust
/// use kindling::hkt::Higher;
/// use kindling::instances::List;
///
/// let tagged: Higher<List, i32> = Higher::widen(vec![1, 2, 3]);
/// assert_eq!(tagged.as_concrete().len(), 3);
/// assert_eq!(tagged.narrow(), vec![1, 2, 3]);
/// ```
pub struct Higher<W: Witness, T> {
    value: W::Of<T>,
    witness: W,
}

impl<W: Witness, T> Higher<W, T> {
    /// Attaches the tag `W` to a concrete value. Never fails.
    #[inline]
    pub fn widen(value: W::Of<T>) -> Self {
        Self {
            value,
            witness: W::default(),
        }
    }

    /// Removes the tag and returns the concrete value.
    #[inline]
    pub fn narrow(self) -> W::Of<T> {
        self.value
    }

    /// Borrows the concrete value.
    #[inline]
    pub const fn as_concrete(&self) -> &W::Of<T> {
        &self.value
    }

    /// Returns the witness this value is tagged with.
    #[inline]
    pub const fn witness(&self) -> W {
        self.witness
    }

    /// Forgets the family at the type level, keeping it as a runtime tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::hkt::Higher;
    /// use kindling::instances::{List, Maybe};
    ///
    /// let erased = Higher::<List, i32>::widen(vec![1]).erase();
    /// assert!(erased.check::<Maybe>().is_err());
    /// assert_eq!(erased.narrow::<List>().unwrap().narrow(), vec![1]);
    /// ```
    pub fn erase(self) -> ErasedHigher<T>
    where
        T: 'static,
        W::Of<T>: 'static,
    {
        ErasedHigher {
            witness: W::id(),
            value: Box::new(self.value),
            element: std::marker::PhantomData,
        }
    }
}

impl<W: Witness, T> Clone for Higher<W, T>
where
    W::Of<T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            witness: self.witness,
        }
    }
}

impl<W: Witness, T> PartialEq for Higher<W, T>
where
    W::Of<T>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<W: Witness, T> Eq for Higher<W, T> where W::Of<T>: Eq {}

impl<W: Witness, T> fmt::Debug for Higher<W, T>
where
    W::Of<T>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Higher")
            .field("witness", &W::NAME)
            .field("value", &self.value)
            .finish()
    }
}

/// A `Higher` whose family is only known at runtime.
///
/// The element type stays static; only the container family is erased.
pub struct ErasedHigher<T> {
    witness: WitnessId,
    value: Box<dyn Any>,
    element: std::marker::PhantomData<fn() -> T>,
}

impl<T: 'static> ErasedHigher<T> {
    /// Returns the id of the family this value belongs to.
    #[inline]
    pub const fn witness(&self) -> WitnessId {
        self.witness
    }

    /// Returns `true` if this value belongs to family `W`.
    #[inline]
    pub fn is<W: Witness>(&self) -> bool {
        self.witness.is::<W>()
    }

    /// Checks, without consuming the value, whether it would narrow to `W`.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::WitnessMismatch`] if the tag is not `W`.
    pub fn check<W: Witness>(&self) -> Result<(), KindError> {
        if self.is::<W>() {
            Ok(())
        } else {
            Err(mismatch::<W>(self.witness))
        }
    }

    /// Restores the static family `W`.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::WitnessMismatch`] if the value was erased from a
    /// different family.
    pub fn narrow<W: Witness>(self) -> Result<Higher<W, T>, KindError>
    where
        W::Of<T>: 'static,
    {
        let found = self.witness;
        if !self.is::<W>() {
            let error = mismatch::<W>(found);
            tracing::debug!(%error, "rejected narrowing of erased value");
            return Err(error);
        }
        self.value
            .downcast::<W::Of<T>>()
            .map(|value| Higher::widen(*value))
            .map_err(|_| mismatch::<W>(found))
    }
}

fn mismatch<W: Witness>(found: WitnessId) -> KindError {
    let expected = W::id();
    KindError::WitnessMismatch {
        expected: expected.label_against(found),
        found: found.label_against(expected),
    }
}

impl<T> fmt::Debug for ErasedHigher<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ErasedHigher")
            .field("witness", &self.witness.name())
            .finish_non_exhaustive()
    }
}
