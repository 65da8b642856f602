//! The `Task` family: [`LocalTask<T>`], a deferred asynchronous computation.
//!
//! Combinators build a new future and never poll anything themselves; the
//! caller's executor drives the result. `ap` joins both sides, so they make
//! progress concurrently, as the family's native `join` does. There is no
//! `zero` and no sequential iteration: a future has exactly one result, and
//! only after it is awaited.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};

use crate::hkt::{Capabilities, FunctionalAdapter, Higher, Kinded, Witness};

/// A boxed, single-threaded future producing a `T`.
///
/// # Examples
///
/// ```rust
/// use kindling::instances::LocalTask;
///
/// let task = LocalTask::new(async { 40 + 2 });
/// assert_eq!(futures::executor::block_on(task), 42);
/// ```
#[must_use = "tasks do nothing unless awaited"]
pub struct LocalTask<T> {
    future: LocalBoxFuture<'static, T>,
}

impl<T: 'static> LocalTask<T> {
    /// Boxes a future.
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = T> + 'static,
    {
        Self {
            future: future.boxed_local(),
        }
    }

    /// A task that is immediately ready with `value`.
    pub fn ready(value: T) -> Self {
        Self::new(future::ready(value))
    }
}

impl<T> Future for LocalTask<T> {
    type Output = T;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<T> {
        self.get_mut().future.as_mut().poll(context)
    }
}

impl<T> fmt::Debug for LocalTask<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LocalTask").finish_non_exhaustive()
    }
}

/// Witness of `LocalTask<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Task;

impl Witness for Task {
    type Of<T> = LocalTask<T>;
    type Adapter = TaskAdapter;
    const NAME: &'static str = "task";
}

/// Adapter of the `Task` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TaskAdapter;

impl Kinded for TaskAdapter {
    type Witness = Task;
}

impl FunctionalAdapter for TaskAdapter {
    const CAPABILITIES: Capabilities = Capabilities::MONAD;

    fn unit<T: 'static>(&self, value: T) -> Higher<Task, T> {
        Higher::widen(LocalTask::ready(value))
    }

    fn map<T, R, F>(&self, fa: Higher<Task, T>, function: F) -> Higher<Task, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(LocalTask::new(fa.narrow().map(function)))
    }

    fn flat_map<T, R, F>(&self, fa: Higher<Task, T>, mut function: F) -> Higher<Task, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Task, R> + 'static,
    {
        let chained = fa.narrow().then(move |value| function(value).narrow());
        Higher::widen(LocalTask::new(chained))
    }

    fn ap<T, R, F>(&self, ff: Higher<Task, F>, fa: Higher<Task, T>) -> Higher<Task, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        let joined = future::join(ff.narrow(), fa.narrow());
        Higher::widen(LocalTask::new(joined.map(|(mut function, value)| function(value))))
    }
}
