//! The `Id` family: [`Identity<T>`], exactly one value and no effect.

use crate::hkt::{Backward, Capabilities, FunctionalAdapter, Higher, Kinded, Sequential, Witness};
use crate::typeclass::Identity;

/// Witness of `Identity<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Id;

impl Witness for Id {
    type Of<T> = Identity<T>;
    type Adapter = IdAdapter;
    const NAME: &'static str = "identity";
}

/// Adapter of the `Id` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdAdapter;

impl Kinded for IdAdapter {
    type Witness = Id;
}

impl FunctionalAdapter for IdAdapter {
    const CAPABILITIES: Capabilities = Capabilities::MONAD.with_sequential();

    fn unit<T: 'static>(&self, value: T) -> Higher<Id, T> {
        Higher::widen(Identity(value))
    }

    fn map<T, R, F>(&self, fa: Higher<Id, T>, function: F) -> Higher<Id, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(fa.narrow().map(function))
    }

    fn flat_map<T, R, F>(&self, fa: Higher<Id, T>, mut function: F) -> Higher<Id, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Id, R> + 'static,
    {
        function(fa.narrow().into_inner())
    }

    fn ap<T, R, F>(&self, ff: Higher<Id, F>, fa: Higher<Id, T>) -> Higher<Id, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        let mut function = ff.narrow().into_inner();
        Higher::widen(Identity(function(fa.narrow().into_inner())))
    }
}

impl Sequential for IdAdapter {
    type Elements<T: 'static> = std::iter::Once<T>;
    type Reversed<T: 'static> = std::iter::Once<T>;

    fn elements<T: 'static>(&self, fa: Higher<Id, T>) -> Self::Elements<T> {
        fa.narrow().into_iter()
    }

    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<Id, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>> {
        Backward::Reversed(fa.narrow().into_iter())
    }
}
