//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `flat_map(unit(a), f) == f(a)`
//! - **Right Identity**: `flat_map(m, unit) == m`
//! - **Associativity**: `flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))`
//! - **Flatten**: `flatten(map(m, f)) == flat_map(m, f)`
//! - **ap Consistency**: `ap(mf, mx) == flat_map(mf, |f| map(mx, f))`

mod common;

use std::fmt::Debug;

use common::{Arbitrary, pick_function};
use kindling::typeclass::{Applicative, Functor, Instances, Monad};
use paste::paste;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn left_identity<W: Arbitrary>(value: i32) -> Result<(), TestCaseError>
where
    W::Observed<i32>: PartialEq + Debug,
{
    let monad = Instances::<W>::monad();
    let left = W::observe(monad.flat_map(monad.unit(value), W::first_arrow));
    let right = W::observe(W::first_arrow(value));
    prop_assert_eq!(left, right);
    Ok(())
}

fn right_identity<W: Arbitrary>(seed: W::Seed) -> Result<(), TestCaseError>
where
    W::Observed<i32>: PartialEq + Debug,
{
    let monad = Instances::<W>::monad();
    let left = W::observe(monad.flat_map(W::lift(seed.clone()), move |x| monad.unit(x)));
    let right = W::observe(W::lift(seed));
    prop_assert_eq!(left, right);
    Ok(())
}

fn associativity<W: Arbitrary>(seed: W::Seed) -> Result<(), TestCaseError>
where
    W::Observed<i32>: PartialEq + Debug,
{
    let monad = Instances::<W>::monad();
    let left = W::observe(monad.flat_map(
        monad.flat_map(W::lift(seed.clone()), W::first_arrow),
        W::second_arrow,
    ));
    let right = W::observe(monad.flat_map(W::lift(seed), move |x| {
        monad.flat_map(W::first_arrow(x), W::second_arrow)
    }));
    prop_assert_eq!(left, right);
    Ok(())
}

fn flatten_is_flat_map<W: Arbitrary>(seed: W::Seed) -> Result<(), TestCaseError>
where
    W::Observed<i32>: PartialEq + Debug,
{
    let monad = Instances::<W>::monad();
    let left = W::observe(monad.flatten(monad.map(W::lift(seed.clone()), W::first_arrow)));
    let right = W::observe(monad.flat_map(W::lift(seed), W::first_arrow));
    prop_assert_eq!(left, right);
    Ok(())
}

fn ap_agrees_with_flat_map<W: Arbitrary>(
    functions: W::Seed,
    values: W::Seed,
) -> Result<(), TestCaseError>
where
    W::Observed<i32>: PartialEq + Debug,
{
    let monad = Instances::<W>::monad();
    let lifted = || monad.map(W::lift(functions.clone()), pick_function);

    let left = W::observe(monad.ap(lifted(), W::lift(values.clone())));
    let right = W::observe(monad.flat_map(lifted(), move |function| {
        monad.map(W::lift(values.clone()), function)
    }));
    prop_assert_eq!(left, right);
    Ok(())
}

macro_rules! monad_laws {
    ($($family:ident => $witness:ty),+ $(,)?) => {
        paste! {
            $(
                proptest! {
                    #[test]
                    fn [<prop_ $family _left_identity>](value in -1000..1000_i32) {
                        left_identity::<$witness>(value)?;
                    }

                    #[test]
                    fn [<prop_ $family _right_identity>](seed in <$witness as Arbitrary>::seeds()) {
                        right_identity::<$witness>(seed)?;
                    }

                    #[test]
                    fn [<prop_ $family _associativity>](seed in <$witness as Arbitrary>::seeds()) {
                        associativity::<$witness>(seed)?;
                    }

                    #[test]
                    fn [<prop_ $family _flatten_is_flat_map>](seed in <$witness as Arbitrary>::seeds()) {
                        flatten_is_flat_map::<$witness>(seed)?;
                    }

                    #[test]
                    fn [<prop_ $family _ap_agrees_with_flat_map>](
                        functions in <$witness as Arbitrary>::seeds(),
                        values in <$witness as Arbitrary>::seeds(),
                    ) {
                        ap_agrees_with_flat_map::<$witness>(functions, values)?;
                    }
                }
            )+
        }
    };
}

monad_laws! {
    list => kindling::instances::List,
    maybe => kindling::instances::Maybe,
    either => kindling::instances::Either<String>,
    identity => kindling::instances::Id,
}

#[cfg(feature = "stream")]
monad_laws! {
    stream => kindling::instances::Stream,
}

#[cfg(feature = "async")]
monad_laws! {
    task => kindling::instances::Task,
}

