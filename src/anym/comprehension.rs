//! For-comprehensions over [`AnyM`].
//!
//! A comprehension binds variables one after another, each new source
//! computed from everything bound so far, and finally yields one value per
//! surviving combination:
//!
//! ```text
//! For::any_m(xs)                      // bind a
//!     .any_m(|(a,)| ys(a))            // bind b, for every a
//!     .filter(|(a, b)| keep(a, b))    // drop combinations
//!     .yield_with(|(a, b)| f(a, b))   // one result per combination
//! ```
//!
//! Bound values travel as a tuple. Every `.any_m` step is one nested
//! `flat_map` that appends the new value to the tuple, so the cardinalities
//! of the sources multiply and combinations come out in nested-loop order,
//! first-bound varying slowest. `.filter` is `MonadZero::filter` on the
//! tuple and may appear between any two steps.

use paste::paste;

use super::AnyM;
use crate::hkt::{Witness, ZeroAdapter};

/// A tuple of bound values.
pub trait Bound: Clone + 'static {
    /// Number of bound values.
    const ARITY: usize;
}

/// A tuple that can bind one more value.
pub trait Append<N>: Bound {
    /// The tuple with `N` appended.
    type Output: Bound;

    /// Appends `next`.
    fn append(self, next: N) -> Self::Output;
}

macro_rules! impl_bound {
    ($arity:literal => $($name:ident),+) => {
        impl<$($name: Clone + 'static),+> Bound for ($($name,)+) {
            const ARITY: usize = $arity;
        }
    };
}

macro_rules! impl_append {
    ($($name:ident),+ => $next:ident) => {
        paste! {
            impl<$($name,)+ $next> Append<$next> for ($($name,)+)
            where
                $($name: Clone + 'static,)+
                $next: Clone + 'static,
            {
                type Output = ($($name,)+ $next,);

                fn append(self, next: $next) -> Self::Output {
                    let ($([<$name:lower>],)+) = self;
                    ($([<$name:lower>],)+ next,)
                }
            }
        }
    };
}

impl_bound!(1 => A);
impl_bound!(2 => A, B);
impl_bound!(3 => A, B, C);
impl_bound!(4 => A, B, C, D);
impl_bound!(5 => A, B, C, D, E);
impl_bound!(6 => A, B, C, D, E, F);
impl_bound!(7 => A, B, C, D, E, F, G);
impl_bound!(8 => A, B, C, D, E, F, G, H);

impl_append!(A => B);
impl_append!(A, B => C);
impl_append!(A, B, C => D);
impl_append!(A, B, C, D => E);
impl_append!(A, B, C, D, E => F);
impl_append!(A, B, C, D, E, F => G);
impl_append!(A, B, C, D, E, F, G => H);

/// Entry point of the comprehension builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct For;

impl For {
    /// Binds the first variable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::{AnyM, For};
    /// use kindling::instances::List;
    ///
    /// let pairs = For::any_m(AnyM::<List, i32>::of(vec![1, 2]))
    ///     .any_m(|(a,)| AnyM::of((*a..*a + 2).collect()))
    ///     .yield_with(|(a, b)| (a, b));
    /// assert_eq!(pairs.unwrap(), vec![(1, 1), (1, 2), (2, 2), (2, 3)]);
    /// ```
    pub fn any_m<W: Witness, A: Clone + 'static>(source: AnyM<W, A>) -> Comprehension<W, (A,)> {
        Comprehension {
            bound: source.map(|value| (value,)),
        }
    }
}

/// A comprehension in progress, with the tuple `B` bound so far.
pub struct Comprehension<W: Witness, B> {
    bound: AnyM<W, B>,
}

impl<W: Witness, B: Bound> Comprehension<W, B> {
    /// Binds one more variable from a source computed from the bound ones.
    pub fn any_m<N, F>(self, mut source: F) -> Comprehension<W, B::Output>
    where
        B: Append<N>,
        N: 'static,
        F: FnMut(&B) -> AnyM<W, N> + 'static,
    {
        Comprehension {
            bound: self.bound.flat_map(move |bound| {
                source(&bound).map(move |next| bound.clone().append(next))
            }),
        }
    }

    /// Drops the combinations not satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        W::Adapter: ZeroAdapter,
        P: FnMut(&B) -> bool + 'static,
    {
        Self {
            bound: self.bound.filter(predicate),
        }
    }

    /// Maps every combination to a result and ends the comprehension.
    pub fn yield_with<R, F>(self, function: F) -> AnyM<W, R>
    where
        R: 'static,
        F: FnMut(B) -> R + 'static,
    {
        self.bound.map(function)
    }

    /// Ends the comprehension, keeping the bound tuples.
    pub fn into_any_m(self) -> AnyM<W, B> {
        self.bound
    }

    /// Number of variables bound so far.
    pub const fn depth(&self) -> usize {
        B::ARITY
    }
}

impl<W: Witness, T: Clone + 'static> AnyM<W, T> {
    /// Two-level comprehension: for every `a` in `self` and every `b` in
    /// `second(a)`, yields `yielder(a, b)`.
    pub fn for_each2<B, R, F2, Y>(self, mut second: F2, mut yielder: Y) -> AnyM<W, R>
    where
        B: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        Y: FnMut(T, B) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .yield_with(move |(a, b)| yielder(a, b))
    }

    /// Three-level comprehension.
    pub fn for_each3<B, C, R, F2, F3, Y>(
        self,
        mut second: F2,
        mut third: F3,
        mut yielder: Y,
    ) -> AnyM<W, R>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        F3: FnMut(&T, &B) -> AnyM<W, C> + 'static,
        Y: FnMut(T, B, C) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .any_m(move |(a, b)| third(a, b))
            .yield_with(move |(a, b, c)| yielder(a, b, c))
    }

    /// Four-level comprehension.
    pub fn for_each4<B, C, D, R, F2, F3, F4, Y>(
        self,
        mut second: F2,
        mut third: F3,
        mut fourth: F4,
        mut yielder: Y,
    ) -> AnyM<W, R>
    where
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        F3: FnMut(&T, &B) -> AnyM<W, C> + 'static,
        F4: FnMut(&T, &B, &C) -> AnyM<W, D> + 'static,
        Y: FnMut(T, B, C, D) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .any_m(move |(a, b)| third(a, b))
            .any_m(move |(a, b, c)| fourth(a, b, c))
            .yield_with(move |(a, b, c, d)| yielder(a, b, c, d))
    }

    /// [`for_each2`](Self::for_each2) keeping only the pairs that satisfy
    /// `filter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kindling::anym::AnyM;
    /// use kindling::instances::List;
    ///
    /// let result = AnyM::<List, i32>::of(vec![1, 2, 3]).for_each2_filtered(
    ///     |a| AnyM::of(vec![*a, a * 10]),
    ///     |a, b| a != b,
    ///     |a, b| a + b,
    /// );
    /// assert_eq!(result.unwrap(), vec![11, 22, 33]);
    /// ```
    pub fn for_each2_filtered<B, R, F2, P, Y>(
        self,
        mut second: F2,
        mut filter: P,
        mut yielder: Y,
    ) -> AnyM<W, R>
    where
        W::Adapter: ZeroAdapter,
        B: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        P: FnMut(&T, &B) -> bool + 'static,
        Y: FnMut(T, B) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .filter(move |(a, b)| filter(a, b))
            .yield_with(move |(a, b)| yielder(a, b))
    }

    /// [`for_each3`](Self::for_each3) keeping only the triples that satisfy
    /// `filter`.
    pub fn for_each3_filtered<B, C, R, F2, F3, P, Y>(
        self,
        mut second: F2,
        mut third: F3,
        mut filter: P,
        mut yielder: Y,
    ) -> AnyM<W, R>
    where
        W::Adapter: ZeroAdapter,
        B: Clone + 'static,
        C: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        F3: FnMut(&T, &B) -> AnyM<W, C> + 'static,
        P: FnMut(&T, &B, &C) -> bool + 'static,
        Y: FnMut(T, B, C) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .any_m(move |(a, b)| third(a, b))
            .filter(move |(a, b, c)| filter(a, b, c))
            .yield_with(move |(a, b, c)| yielder(a, b, c))
    }

    /// [`for_each4`](Self::for_each4) keeping only the combinations that
    /// satisfy `filter`.
    pub fn for_each4_filtered<B, C, D, R, F2, F3, F4, P, Y>(
        self,
        mut second: F2,
        mut third: F3,
        mut fourth: F4,
        mut filter: P,
        mut yielder: Y,
    ) -> AnyM<W, R>
    where
        W::Adapter: ZeroAdapter,
        B: Clone + 'static,
        C: Clone + 'static,
        D: Clone + 'static,
        R: 'static,
        F2: FnMut(&T) -> AnyM<W, B> + 'static,
        F3: FnMut(&T, &B) -> AnyM<W, C> + 'static,
        F4: FnMut(&T, &B, &C) -> AnyM<W, D> + 'static,
        P: FnMut(&T, &B, &C, &D) -> bool + 'static,
        Y: FnMut(T, B, C, D) -> R + 'static,
    {
        For::any_m(self)
            .any_m(move |(a,)| second(a))
            .any_m(move |(a, b)| third(a, b))
            .any_m(move |(a, b, c)| fourth(a, b, c))
            .filter(move |(a, b, c, d)| filter(a, b, c, d))
            .yield_with(move |(a, b, c, d)| yielder(a, b, c, d))
    }
}
