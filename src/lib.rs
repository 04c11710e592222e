//! # funlib: deterministic algorithm kernels in Rust
//!
//! **`funlib`** bundles four small, self-contained algorithm kernels: a linear congruential
//! pseudo-random generator, a from-first-principles scalar math library, a Levenshtein
//! edit-distance metric, and a suite of eleven sorting algorithms plus a reversal operation.
//! It is designed for teaching and demonstration: every routine is the textbook construction,
//! written out in full, with its quirks preserved and documented.
//!
//! ## Key Properties
//!
//! - **Deterministic**: the [`Lcg`][crate::rng::Lcg] generator replays the same sequence for
//!   the same seed. All other functions are pure.
//! - **Pure sorting**: every sort copies its input and returns a fresh non-decreasing
//!   permutation; the caller's sequence is never touched.
//! - **Exact where it matters**: factorial and integer power accumulate into big integers,
//!   so integer results never lose precision to rounding.
//! - **Fail-fast errors**: division by zero, negative `sqrt`/`factorial` inputs, and
//!   negative elements in counting/radix sort surface as [`Error`][crate::error::Error]
//!   values instead of panics or silent corruption.
//!
//! ## Quick Start
//!
//! ```rust
//! use funlib::math;
//! use funlib::rng::Lcg;
//! use funlib::similarity::levenshtein_distance;
//! use funlib::sort::merge_sort;
//!
//! let mut rng = Lcg::new(42);
//! let x = rng.next_float();
//! assert!((0.0..1.0).contains(&x));
//!
//! assert_eq!(math::power(2.0, 10), 1024.0);
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(merge_sort(&[3, 1, 2]), vec![1, 2, 3]);
//! ```
//!
//! ## Core Components
//!
//! - **[`rng`]**: the [`Lcg`][crate::rng::Lcg] generator and its seeding rules.
//! - **[`math`]**: arithmetic, Newton's-method square root, exact factorial, and
//!   Taylor-series sine/cosine.
//! - **[`similarity`]**: Levenshtein distance and a normalized similarity ratio.
//! - **[`sort`]**: the eleven sorts, the reversal operation, and their contracts.
//! - **[`error`]**: the shared error taxonomy.

pub mod error;
pub mod math;
pub mod rng;
pub mod similarity;
pub mod sort;

pub use error::{Error, Result};
