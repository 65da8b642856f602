//! Do-notation over [`AnyM`](crate::anym::AnyM).
//!
//! The [`for_m!`] macro writes a comprehension as a flat list of steps and
//! expands it into nested `flat_map` calls on `AnyM`. It works for every
//! family; `if` guards additionally need the family to have a `zero`.
//!
//! # Syntax
//!
//! ```text
//! for_m! {
//!     pattern <= source;        // Bind: source is an AnyM<W, _>
//!     let pattern = expression; // Pure let binding
//!     if condition;             // Guard: AnyM::empty() when false
//!     yield expression          // Final expression, lifted with AnyM::unit
//! }
//! ```
//!
//! # Supported Patterns
//!
//! - **Identifier pattern**: `x <= source;`
//! - **Tuple pattern**: `(a, b) <= source;`
//! - **Wildcard pattern**: `_ <= source;`
//! - **Let binding**: `let x = expression;` or any irrefutable pattern
//!
//! # Examples
//!
//! ```rust
//! use kindling::anym::AnyM;
//! use kindling::for_m;
//! use kindling::instances::List;
//!
//! let result = for_m! {
//!     a <= AnyM::<List, i32>::of(vec![1, 2]);
//!     b <= AnyM::of((a..a + 2).collect());
//!     yield (a, b)
//! };
//! assert_eq!(result.unwrap(), vec![(1, 1), (1, 2), (2, 2), (2, 3)]);
//! ```
//!
//! The family is taken from the first source; later sources and the
//! `yield` infer it.
//!
//! ```rust
//! use kindling::anym::AnyM;
//! use kindling::for_m;
//! use kindling::instances::Maybe;
//!
//! let lookup = |key: &str| AnyM::<Maybe, i32>::of(key.parse().ok());
//! let total = for_m! {
//!     a <= lookup("20");
//!     b <= lookup("22");
//!     if a < b;
//!     yield a + b
//! };
//! assert_eq!(total.unwrap(), Some(42));
//! ```
//!
//! # Expansion
//!
//! ```rust,ignore
//! source.flat_map(move |pattern| {
//!     /* expanded rest */
//! })
//! ```
//!
//! `yield expression` expands to `AnyM::unit(expression)` and a false guard
//! to `AnyM::empty()`.
//!
//! # Important Notes on Clone
//!
//! Every step is a `move` closure called once per element, so a bound value
//! that is not `Copy` cannot be moved into a later step. Clone it with a
//! `let` right before the step that consumes it:
//!
//! ```rust
//! use kindling::anym::AnyM;
//! use kindling::for_m;
//! use kindling::instances::List;
//!
//! let result = for_m! {
//!     name <= AnyM::<List, String>::of(vec!["a".into(), "b".into()]);
//!     n <= AnyM::of(vec![1, 2]);
//!     let name = name.clone();
//!     yield name + &n.to_string()
//! };
//! assert_eq!(result.unwrap(), vec!["a1", "a2", "b1", "b2"]);
//! ```

#![forbid(unsafe_code)]

/// Do-notation over [`AnyM`](crate::anym::AnyM).
///
/// Steps are `pattern <= source;`, `let pattern = expression;` and
/// `if condition;`, ending with `yield expression`. See [`crate::compose`].
///
/// # Examples
///
/// ```rust
/// use kindling::anym::AnyM;
/// use kindling::for_m;
/// use kindling::instances::Either;
///
/// let result = for_m! {
///     x <= AnyM::<Either<String>, i32>::of(Ok(1));
///     y <= AnyM::of(Err::<i32, String>("no y".to_string()));
///     yield x + y
/// };
/// assert_eq!(result.unwrap(), Err("no y".to_string()));
/// ```
#[macro_export]
macro_rules! for_m {
    // ==========================================================================
    // Terminal case: yield lifts the result with AnyM::unit
    // ==========================================================================

    (yield $result:expr) => {
        $crate::anym::AnyM::unit($result)
    };

    // ==========================================================================
    // Guard: if condition; rest
    // ==========================================================================

    (if $condition:expr ; $($rest:tt)+) => {{
        if $condition {
            $crate::for_m!($($rest)+)
        } else {
            $crate::anym::AnyM::empty()
        }
    }};

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:pat = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::for_m!($($rest)+)
    }};

    // ==========================================================================
    // Bind operation: pattern <= source; rest
    // ==========================================================================

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::anym::AnyM::flat_map($source, move |_| {
            $crate::for_m!($($rest)+)
        })
    };

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::anym::AnyM::flat_map($source, move |$pattern| {
            $crate::for_m!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::anym::AnyM::flat_map($source, move |($($pattern)*)| {
            $crate::for_m!($($rest)+)
        })
    };
}
