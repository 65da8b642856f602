//! Built-in container families.
//!
//! Each family is a witness plus an adapter and nothing else; every type
//! class instance comes from [`Instances`](crate::typeclass::Instances).
//!
//! | Witness | Concrete type | `zero` / `plus` | Iteration |
//! |---------|---------------|-----------------|-----------|
//! | [`List`] | `Vec<T>` | `[]` / concatenation | reversible |
//! | [`Maybe`] | `Option<T>` | `None` / first present | reversible |
//! | [`Either<E>`] | `Result<T, E>` | - | reversible |
//! | [`Id`] | [`Identity<T>`](crate::typeclass::Identity) | - | reversible |
//! | `Stream` | `LazyStream<T>` | empty / chain | forward only |
//! | `Task` | `LocalTask<T>` | - | - |
//!
//! `Stream` needs the `stream` feature and `Task` the `async` feature.

mod either;
mod identity;
pub mod list;
mod maybe;
#[cfg(feature = "stream")]
mod stream;
#[cfg(feature = "async")]
mod task;

pub use either::{Either, EitherAdapter};
pub use identity::{Id, IdAdapter};
pub use list::{List, ListAdapter};
pub use maybe::{Maybe, MaybeAdapter};
#[cfg(feature = "stream")]
pub use stream::{LazyStream, Stream, StreamAdapter};
#[cfg(feature = "async")]
pub use task::{LocalTask, Task, TaskAdapter};

static_assertions::assert_impl_all!(List: crate::hkt::Witness, Send, Sync);
static_assertions::assert_impl_all!(Maybe: crate::hkt::Witness, Send, Sync);
static_assertions::assert_impl_all!(Either<std::rc::Rc<str>>: crate::hkt::Witness, Send, Sync);
static_assertions::assert_impl_all!(Id: crate::hkt::Witness, Send, Sync);
#[cfg(feature = "stream")]
static_assertions::assert_impl_all!(Stream: crate::hkt::Witness, Send, Sync);
#[cfg(feature = "async")]
static_assertions::assert_impl_all!(Task: crate::hkt::Witness, Send, Sync);
#[cfg(feature = "stream")]
static_assertions::assert_not_impl_any!(LazyStream<i32>: Send, Sync);
