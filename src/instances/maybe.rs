//! The `Maybe` family: `Option<T>`.
//!
//! `zero` is `None`. `plus` keeps the first present value, so
//! `plus(Some(1), Some(2)) == Some(1)`.

use crate::hkt::{
    Backward, Capabilities, FunctionalAdapter, Higher, Kinded, Sequential, Witness, ZeroAdapter,
};

/// Witness of `Option<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Maybe;

impl Witness for Maybe {
    type Of<T> = Option<T>;
    type Adapter = MaybeAdapter;
    const NAME: &'static str = "maybe";
}

/// Adapter of the `Maybe` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaybeAdapter;

impl Kinded for MaybeAdapter {
    type Witness = Maybe;
}

impl FunctionalAdapter for MaybeAdapter {
    const CAPABILITIES: Capabilities = Capabilities::MONAD.with_zero().with_sequential();

    fn unit<T: 'static>(&self, value: T) -> Higher<Maybe, T> {
        Higher::widen(Some(value))
    }

    fn map<T, R, F>(&self, fa: Higher<Maybe, T>, function: F) -> Higher<Maybe, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(fa.narrow().map(function))
    }

    fn flat_map<T, R, F>(&self, fa: Higher<Maybe, T>, mut function: F) -> Higher<Maybe, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Maybe, R> + 'static,
    {
        Higher::widen(fa.narrow().and_then(|value| function(value).narrow()))
    }

    fn ap<T, R, F>(&self, ff: Higher<Maybe, F>, fa: Higher<Maybe, T>) -> Higher<Maybe, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        let pairs = ff.narrow().zip(fa.narrow());
        Higher::widen(pairs.map(|(mut function, value)| function(value)))
    }
}

impl ZeroAdapter for MaybeAdapter {
    fn zero<T: 'static>(&self) -> Higher<Maybe, T> {
        Higher::widen(None)
    }

    fn plus<T: 'static>(
        &self,
        left: Higher<Maybe, T>,
        right: Higher<Maybe, T>,
    ) -> Higher<Maybe, T> {
        Higher::widen(left.narrow().or(right.narrow()))
    }
}

impl Sequential for MaybeAdapter {
    type Elements<T: 'static> = std::option::IntoIter<T>;
    type Reversed<T: 'static> = std::option::IntoIter<T>;

    fn elements<T: 'static>(&self, fa: Higher<Maybe, T>) -> Self::Elements<T> {
        fa.narrow().into_iter()
    }

    // At most one element: forwards and backwards coincide.
    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<Maybe, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>> {
        Backward::Reversed(fa.narrow().into_iter())
    }
}
