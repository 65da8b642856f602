//! # kindling
//!
//! Higher-kinded type classes for Rust containers, dispatched through
//! witness types, and a uniform monadic wrapper over all of them.
//!
//! ## Overview
//!
//! Rust has no type constructors as type parameters, so a container family
//! such as `Vec<_>` is named by a zero-sized *witness* (`List`) whose generic
//! associated type maps an element type to the concrete container. On top of
//! that the crate provides:
//!
//! - **Tagging**: [`hkt::Higher<W, T>`] carries a `W::Of<T>` tagged with its
//!   family; [`hkt::ErasedHigher<T>`] is the runtime-checked erased form.
//! - **Adapters**: one [`hkt::FunctionalAdapter`] per family supplies `unit`,
//!   `map`, `flat_map` and `ap`, optionally `zero`/`plus` and sequential
//!   iteration.
//! - **Type Classes**: Functor, Applicative, Monad, `MonadZero`, `MonadPlus`,
//!   Foldable and Traverse, each implemented once, generically, from an
//!   adapter.
//! - **Registry**: an explicit, immutable [`hkt::WitnessRegistry`] of known
//!   families and their capabilities.
//! - **`AnyM`**: [`anym::AnyM<W, T>`], ordinary combinators over any family,
//!   the [`anym::For`] comprehension builder, and the [`anym::ListT`]
//!   transformer that layers a list over any family.
//! - **Comprehension syntax**: the [`for_m!`] macro.
//!
//! ## Feature Flags
//!
//! - `stream`: the lazy `Stream` family
//! - `async`: the `Task` family over local futures
//! - `compose`: the `for_m!` macro
//! - `serde`: `Serialize` for registry descriptors and `Identity`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use kindling::prelude::*;
//!
//! fn doubled<W: Witness>(numbers: AnyM<W, i32>) -> AnyM<W, i32> {
//!     numbers.map(|n| n * 2)
//! }
//!
//! assert_eq!(doubled(AnyM::<List, _>::of(vec![1, 2])).unwrap(), vec![2, 4]);
//! assert_eq!(doubled(AnyM::<Maybe, _>::of(Some(21))).unwrap(), Some(42));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use kindling::prelude::*;
/// ```
pub mod prelude {
    pub use crate::anym::{AnyM, For, ListT};
    pub use crate::error::{Capability, KindError};
    pub use crate::hkt::{
        ErasedHigher, FunctionalAdapter, Higher, Kinded, Sequential, Witness, WitnessRegistry,
        ZeroAdapter,
    };
    pub use crate::instances::{Either, Id, List, Maybe};
    #[cfg(feature = "stream")]
    pub use crate::instances::{LazyStream, Stream};
    #[cfg(feature = "async")]
    pub use crate::instances::{LocalTask, Task};
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod anym;
pub mod error;
pub mod hkt;
pub mod instances;
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

pub use error::{KindError, Result};
