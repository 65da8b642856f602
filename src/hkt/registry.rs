//! An explicit catalogue of the families an application works with.
//!
//! Adapter resolution never goes through this registry: `W::adapter()` is a
//! static call. The registry exists for code that receives erased values and
//! wants to check, up front and with a typed error, that it knows how to deal
//! with them. It is built once, never mutated, and passed by reference, so a
//! test can hand in a registry containing nothing but a mock family.

use smallvec::SmallVec;

use super::adapter::{Capabilities, FunctionalAdapter};
use super::higher::{ErasedHigher, Higher};
use super::witness::{Witness, WitnessId};
use crate::error::{Capability, KindError, Result};

/// What the registry knows about one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WitnessDescriptor {
    #[cfg_attr(feature = "serde", serde(skip))]
    id: WitnessId,
    name: &'static str,
    capabilities: Capabilities,
}

impl WitnessDescriptor {
    /// Describes witness `W`.
    pub fn of<W: Witness>() -> Self {
        Self {
            id: W::id(),
            name: W::NAME,
            capabilities: <W::Adapter as FunctionalAdapter>::CAPABILITIES,
        }
    }

    /// The runtime identity of the family.
    pub const fn id(&self) -> WitnessId {
        self.id
    }

    /// The family name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The optional capabilities the family's adapter publishes.
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

/// An immutable set of registered witnesses.
///
/// # Examples
///
/// ```rust
/// use kindling::error::KindError;
/// use kindling::hkt::WitnessRegistry;
/// use kindling::instances::{Either, List, Maybe};
///
/// let registry = WitnessRegistry::builder()
///     .register::<List>()
///     .register::<Either<String>>()
///     .build()
///     .unwrap();
///
/// assert!(registry.contains::<List>());
/// assert_eq!(
///     registry.descriptor::<Maybe>().unwrap_err(),
///     KindError::UnregisteredWitness { name: "maybe" }
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WitnessRegistry {
    entries: SmallVec<[WitnessDescriptor; 8]>,
}

impl WitnessRegistry {
    /// Starts an empty registry.
    pub fn builder() -> WitnessRegistryBuilder {
        WitnessRegistryBuilder::default()
    }

    /// Every built-in family whose witness has no type parameter.
    ///
    /// `Either<E>` is one family per error type and is left for the caller
    /// to register with the `E` it uses.
    pub fn standard() -> Self {
        let builder = Self::builder()
            .register::<crate::instances::List>()
            .register::<crate::instances::Maybe>()
            .register::<crate::instances::Id>();
        #[cfg(feature = "stream")]
        let builder = builder.register::<crate::instances::Stream>();
        #[cfg(feature = "async")]
        let builder = builder.register::<crate::instances::Task>();
        tracing::debug!(
            families = builder.entries.len(),
            "built standard witness registry"
        );
        Self {
            entries: builder.entries,
        }
    }

    /// Returns `true` if `W` is registered.
    pub fn contains<W: Witness>(&self) -> bool {
        self.get(W::id()).is_some()
    }

    /// Looks a family up by its runtime id.
    pub fn get(&self, id: WitnessId) -> Option<&WitnessDescriptor> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the descriptor of `W`.
    ///
    /// # Errors
    ///
    /// [`KindError::UnregisteredWitness`] if `W` is not registered.
    pub fn descriptor<W: Witness>(&self) -> Result<&WitnessDescriptor> {
        self.get(W::id())
            .ok_or(KindError::UnregisteredWitness { name: W::NAME })
    }

    /// Returns the descriptor of `W` after checking it supports `capability`.
    ///
    /// # Errors
    ///
    /// [`KindError::UnregisteredWitness`] if `W` is not registered,
    /// [`KindError::MissingCapability`] if its adapter lacks `capability`.
    pub fn require<W: Witness>(&self, capability: Capability) -> Result<&WitnessDescriptor> {
        let descriptor = self.descriptor::<W>()?;
        if descriptor.capabilities.supports(capability) {
            Ok(descriptor)
        } else {
            Err(KindError::MissingCapability {
                name: W::NAME,
                capability,
            })
        }
    }

    /// Narrows an erased value to `W`, which must be registered.
    ///
    /// # Errors
    ///
    /// [`KindError::UnregisteredWitness`] if `W` is not registered,
    /// [`KindError::WitnessMismatch`] if the value belongs to another family.
    pub fn narrow<W: Witness, T: 'static>(&self, erased: ErasedHigher<T>) -> Result<Higher<W, T>>
    where
        W::Of<T>: 'static,
    {
        self.descriptor::<W>()?;
        erased.narrow::<W>()
    }

    /// Iterates over the descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &WitnessDescriptor> {
        self.entries.iter()
    }

    /// The family names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(WitnessDescriptor::name)
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a WitnessRegistry {
    type Item = &'a WitnessDescriptor;
    type IntoIter = std::slice::Iter<'a, WitnessDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Collects witnesses for a [`WitnessRegistry`].
#[derive(Debug, Default)]
pub struct WitnessRegistryBuilder {
    entries: SmallVec<[WitnessDescriptor; 8]>,
    duplicate: Option<&'static str>,
}

impl WitnessRegistryBuilder {
    /// Adds witness `W`.
    #[must_use]
    pub fn register<W: Witness>(mut self) -> Self {
        let descriptor = WitnessDescriptor::of::<W>();
        if self.entries.iter().any(|entry| entry.id == descriptor.id) {
            self.duplicate.get_or_insert(W::NAME);
        } else {
            tracing::debug!(
                witness = W::NAME,
                capabilities = ?descriptor.capabilities,
                "registered witness"
            );
            self.entries.push(descriptor);
        }
        self
    }

    /// Finishes the registry.
    ///
    /// # Errors
    ///
    /// [`KindError::DuplicateWitness`] naming the first witness registered
    /// twice.
    pub fn build(self) -> Result<WitnessRegistry> {
        if let Some(name) = self.duplicate {
            return Err(KindError::DuplicateWitness { name });
        }
        tracing::debug!(families = self.entries.len(), "built witness registry");
        Ok(WitnessRegistry {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{Either, Id, List, Maybe};
    use rstest::rstest;

    #[rstest]
    fn empty_builder_builds_empty_registry() {
        let registry = WitnessRegistry::builder().build().unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry, WitnessRegistry::default());
    }

    #[rstest]
    fn names_follow_registration_order() {
        let registry = WitnessRegistry::builder()
            .register::<Maybe>()
            .register::<List>()
            .build()
            .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["maybe", "list"]);
        assert_eq!(registry.len(), 2);
    }

    #[rstest]
    fn duplicate_registration_fails() {
        let result = WitnessRegistry::builder()
            .register::<List>()
            .register::<Maybe>()
            .register::<List>()
            .build();
        assert_eq!(result, Err(KindError::DuplicateWitness { name: "list" }));
    }

    #[rstest]
    fn distinct_either_instantiations_are_distinct_families() {
        let registry = WitnessRegistry::builder()
            .register::<Either<String>>()
            .register::<Either<i32>>()
            .build()
            .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[rstest]
    fn standard_registry_contains_builtin_families() {
        let registry = WitnessRegistry::standard();
        assert!(registry.contains::<List>());
        assert!(registry.contains::<Maybe>());
        assert!(registry.contains::<Id>());
        assert!(!registry.contains::<Either<String>>());
    }

    #[rstest]
    fn require_reports_missing_capability() {
        let registry = WitnessRegistry::standard();
        assert!(registry.require::<List>(Capability::Zero).is_ok());
        assert_eq!(
            registry.require::<Id>(Capability::Zero).unwrap_err(),
            KindError::MissingCapability {
                name: "identity",
                capability: Capability::Zero,
            }
        );
    }

    #[rstest]
    fn narrow_requires_registration() {
        let registry = WitnessRegistry::builder()
            .register::<List>()
            .build()
            .unwrap();
        let erased = Higher::<Maybe, i32>::widen(Some(1)).erase();
        assert_eq!(
            registry.narrow::<Maybe, i32>(erased).unwrap_err(),
            KindError::UnregisteredWitness { name: "maybe" }
        );
    }

    #[rstest]
    fn narrow_checks_the_tag() {
        let registry = WitnessRegistry::standard();
        let erased = Higher::<Maybe, i32>::widen(Some(1)).erase();
        assert_eq!(
            registry.narrow::<List, i32>(erased).unwrap_err(),
            KindError::WitnessMismatch {
                expected: "list",
                found: "maybe",
            }
        );
    }

    #[rstest]
    fn iterating_by_reference_visits_every_descriptor() {
        let registry = WitnessRegistry::standard();
        let mut count = 0;
        for descriptor in &registry {
            assert!(registry.get(descriptor.id()).is_some());
            count += 1;
        }
        assert_eq!(count, registry.len());
    }
}
