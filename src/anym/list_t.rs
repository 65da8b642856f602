//! `ListT` - many values inside one effect of any family.
//!
//! `ListT<W, T>` wraps an `AnyM<W, Vec<T>>`. `map` and `filter` work on the
//! inner lists without touching the effect. `flat_map` runs the `ListT` each
//! inner value produces, in order, and concatenates their lists, so the
//! effects of `W` sequence exactly as they do under `W`'s own `flat_map`: an
//! absent `Maybe` or a failed `Either` anywhere makes the whole result absent
//! or failed, and `Task`s run one after another.
//!
//! # Examples
//!
//! ```rust
//! use kindling::anym::{AnyM, ListT};
//! use kindling::instances::Maybe;
//!
//! let numbers = ListT::<Maybe, i32>::lift_vec(vec![1, 2, 3]);
//! let spread = numbers.flat_map(|n| ListT::lift_vec(vec![n, n * 10]));
//! assert_eq!(spread.run().unwrap(), Some(vec![1, 10, 2, 20, 3, 30]));
//!
//! let missing = ListT::<Maybe, i32>::lift(AnyM::of(None));
//! assert_eq!(missing.map(|n| n + 1).run().unwrap(), None);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::AnyM;
use crate::hkt::Witness;

/// A list of `T` inside one value of family `W`.
pub struct ListT<W: Witness, T> {
    run: AnyM<W, Vec<T>>,
}

impl<W: Witness, T: 'static> ListT<W, T> {
    /// Wraps a family value that already holds lists.
    pub const fn new(run: AnyM<W, Vec<T>>) -> Self {
        Self { run }
    }

    /// Lifts every element of `source` into a one-element list.
    pub fn lift(source: AnyM<W, T>) -> Self {
        Self::new(source.map(|value| vec![value]))
    }

    /// Lifts a plain list into `W` through the family's `unit`.
    pub fn lift_vec(values: Vec<T>) -> Self {
        Self::new(AnyM::unit(values))
    }

    /// A one-element list inside `W`'s `unit`.
    pub fn unit(value: T) -> Self {
        Self::lift_vec(vec![value])
    }

    /// An empty list inside `W`'s `unit`. The effect itself is not empty.
    pub fn empty() -> Self {
        Self::lift_vec(Vec::new())
    }

    /// Returns the wrapped family value.
    pub fn run(self) -> AnyM<W, Vec<T>> {
        self.run
    }

    /// Transforms every element of every inner list.
    pub fn map<R, F>(self, mut function: F) -> ListT<W, R>
    where
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        ListT::new(
            self.run
                .map(move |values: Vec<T>| values.into_iter().map(&mut function).collect()),
        )
    }

    /// Keeps the elements satisfying `predicate`. The effect is untouched.
    #[must_use]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Self::new(
            self.run
                .map(move |values: Vec<T>| values.into_iter().filter(&mut predicate).collect()),
        )
    }

    /// Replaces every element with the `ListT` `function` returns for it and
    /// concatenates the results, sequencing their effects left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::{AnyM, ListT};
    /// use kindling::instances::Maybe;
    ///
    /// let checked = ListT::<Maybe, i32>::lift_vec(vec![4, 0, 2]).flat_map(|n| {
    ///     ListT::lift(AnyM::of(if n == 0 { None } else { Some(12 / n) }))
    /// });
    /// assert_eq!(checked.run().unwrap(), None);
    /// ```
    pub fn flat_map<R, F>(self, function: F) -> ListT<W, R>
    where
        T: Clone,
        R: Clone + 'static,
        F: FnMut(T) -> ListT<W, R> + 'static,
    {
        let function = Rc::new(RefCell::new(function));
        ListT::new(self.run.flat_map(move |values: Vec<T>| {
            values
                .into_iter()
                .fold(AnyM::unit(Vec::new()), |collected, value| {
                    let function = Rc::clone(&function);
                    collected.flat_map(move |prefix: Vec<R>| {
                        let next = (*function.borrow_mut())(value.clone());
                        next.run.map(move |values| {
                            let mut joined = prefix.clone();
                            joined.extend(values);
                            joined
                        })
                    })
                })
        }))
    }

    /// Two-level comprehension: for every `a` and every `b` in `second(a)`,
    /// yields `yielder(a, b)`.
    pub fn for_each2<B, R, F2, Y>(self, mut second: F2, mut yielder: Y) -> ListT<W, R>
    where
        T: Clone,
        B: Clone + 'static,
        R: Clone + 'static,
        F2: FnMut(&T) -> ListT<W, B> + 'static,
        Y: FnMut(T, B) -> R + 'static,
    {
        self.flat_map(move |a| {
            let next = second(&a);
            next.map(move |b| (a.clone(), b))
        })
        .map(move |(a, b)| yielder(a, b))
    }

    /// Three-level comprehension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::ListT;
    /// use kindling::instances::List;
    ///
    /// let triples = ListT::<List, i32>::lift_vec(vec![10, 100]).for_each3(
    ///     |a| ListT::lift_vec(vec![*a, a + 1]),
    ///     |_, b| ListT::lift_vec(vec![*b]),
    ///     |a, b, c| a + b + c,
    /// );
    /// assert_eq!(triples.run().unwrap(), vec![vec![30, 32, 300, 302]]);
    /// ```
    pub fn for_each3<B, C, R, F2, F3, Y>(
        self,
        mut second: F2,
        mut third: F3,
        mut yielder: Y,
    ) -> ListT<W, R>
    where
        T: Clone,
        B: Clone + 'static,
        C: Clone + 'static,
        R: Clone + 'static,
        F2: FnMut(&T) -> ListT<W, B> + 'static,
        F3: FnMut(&T, &B) -> ListT<W, C> + 'static,
        Y: FnMut(T, B, C) -> R + 'static,
    {
        self.flat_map(move |a| {
            let next = second(&a);
            next.map(move |b| (a.clone(), b))
        })
        .flat_map(move |(a, b)| {
            let next = third(&a, &b);
            next.map(move |c| (a.clone(), b.clone(), c))
        })
        .map(move |(a, b, c)| yielder(a, b, c))
    }
}

impl<W: Witness, T: 'static> From<AnyM<W, Vec<T>>> for ListT<W, T> {
    fn from(run: AnyM<W, Vec<T>>) -> Self {
        Self::new(run)
    }
}

impl<W: Witness, T> Clone for ListT<W, T>
where
    W::Of<Vec<T>>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            run: self.run.clone(),
        }
    }
}

impl<W: Witness, T> PartialEq for ListT<W, T>
where
    W::Of<Vec<T>>: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.run == other.run
    }
}

impl<W: Witness, T> fmt::Debug for ListT<W, T>
where
    W::Of<Vec<T>>: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("ListT").field(&self.run).finish()
    }
}
