//! Error types for witness bookkeeping.
//!
//! The type-class combinators never produce errors of their own: a failure
//! inside a family (an `Err` in the `Either` family, a panic in a user
//! closure) travels through `map`, `flat_map` and friends untouched. The
//! errors below only arise at the two places where the engine itself makes a
//! decision at runtime: checked narrowing of an [`ErasedHigher`] and the
//! [`WitnessRegistry`].
//!
//! [`ErasedHigher`]: crate::hkt::ErasedHigher
//! [`WitnessRegistry`]: crate::hkt::WitnessRegistry

use std::fmt;

use thiserror::Error;

/// An optional capability a family adapter may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Capability {
    /// The family has an empty value and a way to combine two values
    /// (`zero` / `plus`).
    Zero,
    /// The family can hand out its elements in a defined, repeatable order.
    Sequential,
}

impl fmt::Display for Capability {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => formatter.write_str("zero/plus"),
            Self::Sequential => formatter.write_str("sequential iteration"),
        }
    }
}

/// Errors raised by checked narrowing and by the witness registry.
///
/// # Examples
///
/// ```rust
/// use kindling::error::KindError;
///
/// let error = KindError::WitnessMismatch { expected: "list", found: "maybe" };
/// assert_eq!(
///     error.to_string(),
///     "witness mismatch: expected `list`, found `maybe`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KindError {
    /// A value tagged with one family was presented to code of another.
    #[error("witness mismatch: expected `{expected}`, found `{found}`")]
    WitnessMismatch {
        /// Name of the witness the caller asked for.
        expected: &'static str,
        /// Name of the witness the value actually carries.
        found: &'static str,
    },

    /// The witness is not part of the registry consulted.
    #[error("witness `{name}` is not registered")]
    UnregisteredWitness {
        /// Name of the missing witness.
        name: &'static str,
    },

    /// The same witness was registered twice.
    #[error("witness `{name}` is registered more than once")]
    DuplicateWitness {
        /// Name of the duplicated witness.
        name: &'static str,
    },

    /// The witness is registered but its adapter lacks a capability.
    #[error("witness `{name}` does not support {capability}")]
    MissingCapability {
        /// Name of the witness.
        name: &'static str,
        /// The capability that was required.
        capability: Capability,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, KindError>;
