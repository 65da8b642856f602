//! Witnesses: one zero-sized marker per container family.
//!
//! Rust has no higher-kinded types, so "a `Vec` of something" cannot be named
//! without naming the something. A witness closes that gap: `List` stands for
//! the type constructor `Vec<_>`, and `<List as Witness>::Of<T>` recovers the
//! concrete `Vec<T>` through a generic associated type.
//!
//! Witnesses are plain types, resolved at compile time. There is no global
//! table to look them up in and nothing to lock.

use std::any::TypeId;
use std::fmt::Debug;
use std::hash::Hash;

use super::adapter::FunctionalAdapter;

/// A marker naming one container family.
///
/// # Laws
///
/// Exactly one witness type exists per family and it is a zero-sized,
/// immutable value: every `W::default()` is equal to every other.
///
/// # Examples
///
/// ```rust
/// use kindling::hkt::Witness;
/// use kindling::instances::List;
///
/// let concrete: <List as Witness>::Of<i32> = vec![1, 2, 3];
/// assert_eq!(List::NAME, "list");
/// assert_eq!(concrete.len(), 3);
/// ```
pub trait Witness: Copy + Default + Eq + Hash + Debug + Send + Sync + 'static {
    /// The concrete container of this family holding elements of type `T`.
    type Of<T>;

    /// The functional adapter that implements the family's primitives.
    type Adapter: FunctionalAdapter<Witness = Self>;

    /// A short, human-readable family name.
    const NAME: &'static str;

    /// Returns the adapter for this family.
    #[inline]
    fn adapter() -> Self::Adapter {
        Self::Adapter::default()
    }

    /// Returns the runtime identity of this witness.
    #[inline]
    fn id() -> WitnessId {
        WitnessId::of::<Self>()
    }
}

/// Anything that operates on exactly one family: adapters and type-class
/// instances alike.
pub trait Kinded: Clone + 'static {
    /// The family this value operates on.
    type Witness: Witness;
}

/// Runtime identity of a witness.
///
/// Two ids compare equal exactly when they were produced from the same
/// witness type. The family name and the full type name are carried along
/// for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WitnessId {
    type_id: TypeId,
    name: &'static str,
    type_name: &'static str,
}

impl WitnessId {
    /// Returns the id of witness `W`.
    #[inline]
    pub fn of<W: Witness>() -> Self {
        Self {
            type_id: TypeId::of::<W>(),
            name: W::NAME,
            type_name: std::any::type_name::<W>(),
        }
    }

    /// Returns the family name recorded for this id.
    #[inline]
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Returns the full type name of the witness, parameters included.
    ///
    /// Instantiations of a generic witness share a family name, so this is
    /// what tells `Either<String>` from `Either<u8>`.
    #[inline]
    pub const fn type_name(self) -> &'static str {
        self.type_name
    }

    /// Returns the most specific label that tells this id apart from `other`.
    ///
    /// The family name is used when it differs, the full type name otherwise.
    #[inline]
    pub fn label_against(self, other: Self) -> &'static str {
        if self.name == other.name {
            self.type_name
        } else {
            self.name
        }
    }

    /// Returns `true` if this id belongs to witness `W`.
    #[inline]
    pub fn is<W: Witness>(self) -> bool {
        self.type_id == TypeId::of::<W>()
    }
}
