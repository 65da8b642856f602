//! Higher-kinded type encoding.
//!
//! - [`Witness`]: one marker type per container family
//! - [`Higher`]: a concrete container tagged with its witness
//! - [`ErasedHigher`]: the same, with the witness checked at runtime
//! - [`FunctionalAdapter`], [`ZeroAdapter`], [`Sequential`]: the primitives a
//!   family supplies
//! - [`WitnessRegistry`]: an explicit catalogue of families

mod adapter;
mod higher;
mod registry;
mod witness;

pub use adapter::{Backward, Capabilities, FunctionalAdapter, Sequential, ZeroAdapter};
pub use higher::{ErasedHigher, Higher};
pub use registry::{WitnessDescriptor, WitnessRegistry, WitnessRegistryBuilder};
pub use witness::{Kinded, Witness, WitnessId};
