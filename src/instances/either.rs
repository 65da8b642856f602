//! The `Either<E>` family: `Result<T, E>`.
//!
//! Each error type is its own family, so `Either<String>` and `Either<io::Error>`
//! never mix. There is no `zero`: an empty `Result` would need an error value
//! out of thin air. `ap` reports the error of the function side first.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::hkt::{Backward, Capabilities, FunctionalAdapter, Higher, Kinded, Sequential, Witness};

/// Witness of `Result<_, E>`.
pub struct Either<E>(PhantomData<fn() -> E>);

/// Adapter of the `Either<E>` family.
pub struct EitherAdapter<E>(PhantomData<fn() -> E>);

// Manual impls: derives would demand the same traits from `E`.
macro_rules! impl_marker_traits {
    ($marker:ident, $name:literal) => {
        impl<E> Clone for $marker<E> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<E> Copy for $marker<E> {}

        impl<E> Default for $marker<E> {
            fn default() -> Self {
                Self(PhantomData)
            }
        }

        impl<E> PartialEq for $marker<E> {
            fn eq(&self, _: &Self) -> bool {
                true
            }
        }

        impl<E> Eq for $marker<E> {}

        impl<E> Hash for $marker<E> {
            fn hash<H: std::hash::Hasher>(&self, _: &mut H) {}
        }

        impl<E> fmt::Debug for $marker<E> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str($name)
            }
        }
    };
}

impl_marker_traits!(Either, "Either");
impl_marker_traits!(EitherAdapter, "EitherAdapter");

impl<E: 'static> Witness for Either<E> {
    type Of<T> = Result<T, E>;
    type Adapter = EitherAdapter<E>;
    const NAME: &'static str = "either";
}

impl<E: 'static> Kinded for EitherAdapter<E> {
    type Witness = Either<E>;
}

impl<E: 'static> FunctionalAdapter for EitherAdapter<E> {
    const CAPABILITIES: Capabilities = Capabilities::MONAD.with_sequential();

    fn unit<T: 'static>(&self, value: T) -> Higher<Either<E>, T> {
        Higher::widen(Ok(value))
    }

    fn map<T, R, F>(&self, fa: Higher<Either<E>, T>, function: F) -> Higher<Either<E>, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(fa.narrow().map(function))
    }

    fn flat_map<T, R, F>(&self, fa: Higher<Either<E>, T>, mut function: F) -> Higher<Either<E>, R>
    where
        T: 'static,
        R: 'static,
        F: FnMut(T) -> Higher<Either<E>, R> + 'static,
    {
        Higher::widen(fa.narrow().and_then(|value| function(value).narrow()))
    }

    fn ap<T, R, F>(
        &self,
        ff: Higher<Either<E>, F>,
        fa: Higher<Either<E>, T>,
    ) -> Higher<Either<E>, R>
    where
        T: Clone + 'static,
        R: 'static,
        F: FnMut(T) -> R + 'static,
    {
        Higher::widen(ff.narrow().and_then(|function| fa.narrow().map(function)))
    }
}

impl<E: 'static> Sequential for EitherAdapter<E> {
    type Elements<T: 'static> = std::result::IntoIter<T>;
    type Reversed<T: 'static> = std::result::IntoIter<T>;

    fn elements<T: 'static>(&self, fa: Higher<Either<E>, T>) -> Self::Elements<T> {
        fa.narrow().into_iter()
    }

    fn right_to_left<T: 'static>(
        &self,
        fa: Higher<Either<E>, T>,
    ) -> Backward<Self::Reversed<T>, Self::Elements<T>> {
        Backward::Reversed(fa.narrow().into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Text = Either<&'static str>;

    #[rstest]
    fn markers_are_equal_regardless_of_error_type_traits() {
        struct Opaque;
        assert_eq!(Either::<Opaque>::default(), Either::<Opaque>::default());
        let adapter = EitherAdapter::<Opaque>::default();
        assert_eq!(format!("{adapter:?}"), "EitherAdapter");
    }

    #[rstest]
    #[case(Ok(2), Err("f"), Err("f"))]
    #[case(Err("x"), Err("f"), Err("f"))]
    #[case(Err("x"), Ok(()), Err("x"))]
    #[case(Ok(2), Ok(()), Ok(4))]
    fn ap_error_precedence(
        #[case] value: Result<i32, &'static str>,
        #[case] function: Result<(), &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        let ff: Higher<Text, _> = Higher::widen(function.map(|()| |n: i32| n * 2));
        let result = EitherAdapter::<&'static str>::default().ap(ff, Higher::widen(value));
        assert_eq!(result.narrow(), expected);
    }

    #[rstest]
    fn flat_map_propagates_first_error() {
        let adapter = EitherAdapter::<&'static str>::default();
        let failed = Higher::widen(Err::<i32, _>("early"));
        let result = adapter.flat_map(failed, |n| Higher::widen(Ok(n + 1)));
        assert_eq!(result.narrow(), Err("early"));
    }
}
