//! Comprehension syntax.
//!
//! This module provides the [`for_m!`] macro, which writes nested
//! `flat_map` chains over [`AnyM`](crate::anym::AnyM) as a flat,
//! declarative list of steps.
//!
//! # Overview
//!
//! | Step | Meaning |
//! |------|---------|
//! | `x <= source;` | bind every element of `source` |
//! | `let p = e;` | pure binding |
//! | `if cond;` | keep only combinations where `cond` holds (needs `zero`) |
//! | `yield e` | final value, lifted with `AnyM::unit` |
//!
//! The macro and the [`For`](crate::anym::For) builder produce the same
//! result for the same steps; the builder passes bound values as a tuple,
//! the macro as plain variables.
//!
//! # Examples
//!
//! ```
//! use kindling::anym::AnyM;
//! use kindling::for_m;
//! use kindling::instances::List;
//!
//! let triples = for_m! {
//!     a <= AnyM::<List, u32>::of((1..=10).collect());
//!     b <= AnyM::of((a..=10).collect());
//!     c <= AnyM::of((b..=10).collect());
//!     if a * a + b * b == c * c;
//!     yield (a, b, c)
//! };
//! assert_eq!(triples.unwrap(), vec![(3, 4, 5), (6, 8, 10)]);
//! ```
//!
//! # Laws
//!
//! A single bind followed by `yield` is `map`:
//!
//! ```text
//! for_m! { x <= m; yield f(x) } == m.map(f)
//! ```
//!
//! and binds nest like `flat_map`, so the monad laws of the family carry over
//! to the comprehension.

mod for_m_macro;

pub use crate::for_m;
