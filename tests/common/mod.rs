//! Generators and observers shared by the law suites.
//!
//! Every family gets a seed strategy, a way to lift a seed into a tagged
//! value, two Kleisli arrows with a visible effect, and an observer that
//! turns a tagged value into something comparable. Lazy and asynchronous
//! families are observed by running them.

#![allow(dead_code)]

use std::fmt::Debug;

use kindling::hkt::{Higher, Witness};
use kindling::instances::{Either, Id, List, Maybe};
use kindling::typeclass::Identity;
#[cfg(feature = "stream")]
use kindling::instances::{LazyStream, Stream};
#[cfg(feature = "async")]
use kindling::instances::{LocalTask, Task};
use proptest::prelude::*;

/// Upper bound on elements pulled from a lazy family when observing it.
pub const OBSERVE_LIMIT: usize = 256;

pub trait Observe: Witness {
    type Observed<T>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Self::Observed<T>;
}

pub trait Arbitrary: Observe {
    type Seed: Clone + Debug + 'static;

    fn seeds() -> BoxedStrategy<Self::Seed>;

    fn lift(seed: Self::Seed) -> Higher<Self, i32>;

    fn first_arrow(value: i32) -> Higher<Self, i32>;

    fn second_arrow(value: i32) -> Higher<Self, i32>;
}

fn small_vec() -> BoxedStrategy<Vec<i32>> {
    prop::collection::vec(-1000..1000_i32, 0..6).boxed()
}

impl Observe for List {
    type Observed<T> = Vec<T>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Vec<T> {
        value.narrow()
    }
}

impl Arbitrary for List {
    type Seed = Vec<i32>;

    fn seeds() -> BoxedStrategy<Vec<i32>> {
        small_vec()
    }

    fn lift(seed: Vec<i32>) -> Higher<Self, i32> {
        Higher::widen(seed)
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(vec![value, value.wrapping_mul(2)])
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        let images = if value % 3 == 0 {
            vec![]
        } else {
            vec![value.wrapping_sub(7)]
        };
        Higher::widen(images)
    }
}

impl Observe for Maybe {
    type Observed<T> = Option<T>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Option<T> {
        value.narrow()
    }
}

impl Arbitrary for Maybe {
    type Seed = Option<i32>;

    fn seeds() -> BoxedStrategy<Option<i32>> {
        prop::option::of(-1000..1000_i32).boxed()
    }

    fn lift(seed: Option<i32>) -> Higher<Self, i32> {
        Higher::widen(seed)
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen((value % 3 != 0).then_some(value.wrapping_add(1)))
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen((value % 2 == 0).then_some(value / 2))
    }
}

impl Observe for Either<String> {
    type Observed<T> = Result<T, String>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Result<T, String> {
        value.narrow()
    }
}

impl Arbitrary for Either<String> {
    type Seed = Result<i32, String>;

    fn seeds() -> BoxedStrategy<Result<i32, String>> {
        prop::result::maybe_ok(-1000..1000_i32, "[a-z]{1,4}").boxed()
    }

    fn lift(seed: Result<i32, String>) -> Higher<Self, i32> {
        Higher::widen(seed)
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        let checked = if value % 3 == 0 {
            Err(format!("{value} is a multiple of 3"))
        } else {
            Ok(value)
        };
        Higher::widen(checked)
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        let checked = if value < 0 {
            Err("negative".to_string())
        } else {
            Ok(value.wrapping_mul(3))
        };
        Higher::widen(checked)
    }
}

impl Observe for Id {
    type Observed<T> = Identity<T>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Identity<T> {
        value.narrow()
    }
}

impl Arbitrary for Id {
    type Seed = i32;

    fn seeds() -> BoxedStrategy<i32> {
        (-1000..1000_i32).boxed()
    }

    fn lift(seed: i32) -> Higher<Self, i32> {
        Higher::widen(Identity(seed))
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(Identity(value.wrapping_add(1)))
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(Identity(value.wrapping_mul(value)))
    }
}

#[cfg(feature = "stream")]
impl Observe for Stream {
    type Observed<T> = Vec<T>;

    fn observe<T: 'static>(value: Higher<Self, T>) -> Vec<T> {
        value.narrow().limit(OBSERVE_LIMIT).collect()
    }
}

#[cfg(feature = "stream")]
impl Arbitrary for Stream {
    type Seed = Vec<i32>;

    fn seeds() -> BoxedStrategy<Vec<i32>> {
        small_vec()
    }

    fn lift(seed: Vec<i32>) -> Higher<Self, i32> {
        Higher::widen(LazyStream::new(seed))
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(LazyStream::new(vec![value, value.wrapping_sub(1)]))
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        let count = (value.unsigned_abs() % 3) as usize;
        Higher::widen(LazyStream::iterate(value, |n| n.wrapping_add(1)).limit(count))
    }
}

#[cfg(feature = "async")]
impl Observe for Task {
    type Observed<T> = T;

    fn observe<T: 'static>(value: Higher<Self, T>) -> T {
        futures::executor::block_on(value.narrow())
    }
}

#[cfg(feature = "async")]
impl Arbitrary for Task {
    type Seed = i32;

    fn seeds() -> BoxedStrategy<i32> {
        (-1000..1000_i32).boxed()
    }

    fn lift(seed: i32) -> Higher<Self, i32> {
        Higher::widen(LocalTask::ready(seed))
    }

    fn first_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(LocalTask::new(async move { value.wrapping_add(1) }))
    }

    fn second_arrow(value: i32) -> Higher<Self, i32> {
        Higher::widen(LocalTask::new(async move { value.wrapping_mul(2) }))
    }
}

/// A handful of named functions, usable as values in `ap`.
pub fn pick_function(selector: i32) -> fn(i32) -> i32 {
    match selector.rem_euclid(3) {
        0 => |n| n.wrapping_add(1),
        1 => |n| n.wrapping_mul(2),
        _ => |n| n.wrapping_sub(5),
    }
}
