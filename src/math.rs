//! Scalar math kernel built from primitive arithmetic.
//!
//! Everything here is computed from first principles: `power` is a plain
//! multiplication loop, [`sqrt`] is Newton's method, [`factorial`] and
//! [`ipower`] accumulate into exact big integers, and [`sin`]/[`cos`] are
//! truncated Taylor series assembled from `power` and `factorial`.
//!
//! These are teaching routines, not production numerics: `power` is
//! O(exponent) on purpose, and the trigonometric series perform no range
//! reduction, so accuracy degrades for large `|x|` or few terms.

use log::trace;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, ToPrimitive};

use crate::error::{Error, Result};

/// Default convergence tolerance for [`sqrt`].
pub const SQRT_TOLERANCE: f64 = 1e-10;

/// Default number of Taylor terms for [`sin`] and [`cos`].
pub const TAYLOR_TERMS: u32 = 10;

/// Returns `a + b`.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`, or [`Error::DivisionByZero`] when `b == 0`.
pub fn divide(a: f64, b: f64) -> Result<f64> {
    if b == 0.0 {
        return Err(Error::DivisionByZero);
    }
    Ok(a / b)
}

/// Raises `base` to a non-negative integer `exponent` by repeated
/// multiplication.
///
/// Returns 1 for `exponent == 0`. Runs in O(exponent) time; this is the
/// straightforward loop, not fast exponentiation.
pub fn power(base: f64, exponent: u32) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Integer power with an exact accumulator.
///
/// Same multiplication loop as [`power`], but accumulating into a
/// [`BigInt`] so integer results never lose precision to rounding.
///
/// # Examples
///
/// ```rust
/// use funlib::math::ipower;
/// use num_bigint::BigInt;
///
/// assert_eq!(ipower(2, 10), BigInt::from(1024));
/// ```
pub fn ipower(base: i64, exponent: u32) -> BigInt {
    let mut result = BigInt::one();
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// Square root via Newton's method with the default tolerance of `1e-10`.
///
/// Fails with a domain error for negative input.
pub fn sqrt(x: f64) -> Result<f64> {
    sqrt_within(x, SQRT_TOLERANCE)
}

/// Square root via Newton's method with a caller-chosen tolerance.
///
/// Starts from `x` itself (or 1 when `x == 0`, which keeps the iteration
/// well-defined) and refines `guess = (guess + x/guess) / 2` until
/// `|guess^2 - x| <= tolerance`.
pub fn sqrt_within(x: f64, tolerance: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(Error::Domain(format!("sqrt of negative number {}", x)));
    }
    let mut guess = if x == 0.0 { 1.0 } else { x };
    let mut iterations = 0u32;
    while (guess * guess - x).abs() > tolerance {
        guess = (guess + x / guess) / 2.0;
        iterations += 1;
    }
    trace!("sqrt({}) converged in {} iterations", x, iterations);
    Ok(guess)
}

/// Factorial of `n` with an exact integer accumulator.
///
/// Fails with a domain error for negative `n`; returns 1 for `n` of 0
/// or 1. The [`BigUint`] result is exact for every `n`; converting to
/// `f64` stays lossless up to `n = 22` and rounds beyond that.
///
/// # Examples
///
/// ```rust
/// use funlib::math::factorial;
/// use num_bigint::BigUint;
///
/// assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
/// ```
pub fn factorial(n: i64) -> Result<BigUint> {
    if n < 0 {
        return Err(Error::Domain(format!("factorial of negative number {}", n)));
    }
    let mut result = BigUint::one();
    for i in 2..=n.max(1) as u64 {
        result *= i;
    }
    Ok(result)
}

/// Sine via a Taylor series truncated to [`TAYLOR_TERMS`] terms.
pub fn sin(x: f64) -> f64 {
    sin_terms(x, TAYLOR_TERMS)
}

/// Sine via a Taylor series truncated to `terms` terms.
///
/// Each term is `(-1)^n * x^(2n+1) / (2n+1)!`, assembled from [`power`]
/// and [`factorial`]. No range reduction is performed.
pub fn sin_terms(x: f64, terms: u32) -> f64 {
    let mut result = 0.0;
    for n in 0..terms {
        let numerator = power(x, 2 * n + 1);
        let denominator = big_to_f64(factorial(2 * n as i64 + 1));
        let term = numerator / denominator;
        result += if n % 2 == 1 { -term } else { term };
    }
    result
}

/// Cosine via a Taylor series truncated to [`TAYLOR_TERMS`] terms.
pub fn cos(x: f64) -> f64 {
    cos_terms(x, TAYLOR_TERMS)
}

/// Cosine via a Taylor series truncated to `terms` terms.
///
/// Each term is `(-1)^n * x^(2n) / (2n)!`.
pub fn cos_terms(x: f64, terms: u32) -> f64 {
    let mut result = 0.0;
    for n in 0..terms {
        let numerator = power(x, 2 * n);
        let denominator = big_to_f64(factorial(2 * n as i64));
        let term = numerator / denominator;
        result += if n % 2 == 1 { -term } else { term };
    }
    result
}

// The factorial argument here is always non-negative, and a BigUint always
// has a (possibly saturated) f64 image.
fn big_to_f64(value: Result<BigUint>) -> f64 {
    match value {
        Ok(big) => big.to_f64().unwrap_or(f64::INFINITY),
        Err(_) => unreachable!("factorial called with non-negative argument"),
    }
}
