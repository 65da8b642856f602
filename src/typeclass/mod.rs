//! Type class traits and their general, family-agnostic instances.
//!
//! This module provides the type classes of the engine:
//!
//! - [`Functor`]: Mapping over elements
//! - [`Applicative`]: Lifting values and applying lifted functions
//! - [`Monad`]: Sequencing dependent computations
//! - [`MonadZero`]: A monad with an empty container, hence `filter`
//! - [`MonadPlus`]: A `MonadZero` whose containers combine under a monoid
//! - [`Foldable`]: Reducing a container to a summary value
//! - [`Traverse`]: Visiting elements under another family's effect
//!
//! Each trait comes with a `General*` instance built only from the
//! primitives of a [`FunctionalAdapter`](crate::hkt::FunctionalAdapter).
//! None of them knows a concrete container; a new family gets every instance
//! by supplying an adapter.
//!
//! ## Foundation Types
//!
//! - [`Monoid`]: Value-level identity plus combine, supplied per use
//! - [`Identity`]: The container of the trivial family
//! - [`Instances`]: The canonical instance set of a witness
//!
//! # Examples
//!
//! ```rust
//! use kindling::hkt::Higher;
//! use kindling::instances::List;
//! use kindling::typeclass::{Functor, Instances, Monad, MonadZero};
//!
//! let monad = Instances::<List>::monad_zero();
//! let result = monad.filter(
//!     monad.flat_map(Higher::widen(vec![1, 2, 3]), |n| Higher::widen(vec![n, n * 10])),
//!     |n| n % 2 == 0,
//! );
//! assert_eq!(monad.map(result, |n| n + 1).narrow(), vec![11, 3, 21, 31]);
//! ```

mod applicative;
mod foldable;
mod functor;
pub mod general;
mod identity;
mod monad;
mod monad_plus;
mod monad_zero;
pub mod monoid;
mod traverse;

pub use applicative::{Applicative, GeneralApplicative};
pub use foldable::{Foldable, GeneralFoldable};
pub use functor::{Functor, GeneralFunctor};
pub use general::{
    ApplicativeOf, FoldableOf, FunctorOf, Instances, MonadOf, MonadPlusOf, MonadZeroOf, TraverseOf,
};
pub use identity::Identity;
pub use monad::{GeneralMonad, Monad};
pub use monad_plus::{GeneralMonadPlus, MonadPlus};
pub use monad_zero::{GeneralMonadZero, MonadZero};
pub use monoid::{FamilyMonoid, Monoid};
pub use traverse::{GeneralTraverse, Traverse};
