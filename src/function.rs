//! Generic `min`, `max`, `abs` and integer `pow`.
//!
//! `min`/`max` come in three forms: pairwise, over a sized container
//! (`min_of`, `max_of`), and over an iterator range (`min_in`, `max_in`).
//! The container and range forms reject empty input with
//! [`Error::EmptyInput`] rather than returning a placeholder.
//!
//! # Ties and unordered values
//!
//! All forms compare with strict `<` / `>` only, so when several inputs are
//! equal the first one wins. For the same reason an unordered value (NaN)
//! never replaces the running extremum, and a NaN in the first position is
//! returned as-is.

use core::ops::{Mul, Neg};

use num_traits::{CheckedMul, CheckedNeg, Inv, One, PrimInt, Zero};

use crate::types::Error;

// ── min / max ──

/// The lesser of `a` and `b`; `a` when they compare equal or are unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// The greater of `a` and `b`; `a` when they compare equal or are unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Minimum element of a sized container (array, slice, `Vec`, …).
///
/// ```
/// use const_math::{min_of, Error};
///
/// assert_eq!(min_of(&[3, 1, 2]), Ok(1));
/// assert_eq!(min_of::<i32, [i32]>(&[]), Err(Error::EmptyInput));
/// ```
#[inline]
pub fn min_of<T, C>(container: &C) -> Result<T, Error>
where
    T: PartialOrd + Clone,
    C: AsRef<[T]> + ?Sized,
{
    min_in(container.as_ref().iter().cloned())
}

/// Maximum element of a sized container (array, slice, `Vec`, …).
#[inline]
pub fn max_of<T, C>(container: &C) -> Result<T, Error>
where
    T: PartialOrd + Clone,
    C: AsRef<[T]> + ?Sized,
{
    max_in(container.as_ref().iter().cloned())
}

/// Minimum element of a range.
///
/// Accepts anything iterable: a `Range`, an iterator adapter, or
/// `slice[begin..end].iter()` for a half-open index range.
pub fn min_in<I>(range: I) -> Result<I::Item, Error>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extremum_by(range, |candidate, current| candidate < current)
}

/// Maximum element of a range.
pub fn max_in<I>(range: I) -> Result<I::Item, Error>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    extremum_by(range, |candidate, current| candidate > current)
}

/// Single pass keeping the running extremum; `replaces` decides whether a
/// candidate takes over from the current best.
fn extremum_by<I, F>(range: I, mut replaces: F) -> Result<I::Item, Error>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let mut iter = range.into_iter();
    let mut best = iter.next().ok_or(Error::EmptyInput)?;
    for value in iter {
        if replaces(&value, &best) {
            best = value;
        }
    }
    Ok(best)
}

// ── abs ──

/// Magnitude of `x`: `-x` if `x < 0`, else `x`.
///
/// Follows the negation of `T` at its edges: for the minimum signed integer
/// this overflows (panics in debug builds, wraps in release). Use
/// [`checked_abs`] to get an error instead. `-0.0` and NaN are returned
/// unchanged since neither compares below zero.
#[inline]
pub fn abs<T>(x: T) -> T
where
    T: PartialOrd + Zero + Neg<Output = T>,
{
    if x < T::zero() {
        -x
    } else {
        x
    }
}

/// Like [`abs`], but reports [`Error::Overflow`] when `-x` is not
/// representable (e.g. `i32::MIN`).
#[inline]
pub fn checked_abs<T>(x: T) -> Result<T, Error>
where
    T: PartialOrd + Zero + CheckedNeg,
{
    if x < T::zero() {
        x.checked_neg().ok_or(Error::Overflow)
    } else {
        Ok(x)
    }
}

// ── pow ──

/// `base` raised to a non-negative integer `exponent`, by squaring.
///
/// `pow(b, 0)` is one for every `b`, including zero. Negative exponents are
/// rejected with [`Error::NegativeExponent`]; see [`powi`] for types with
/// a reciprocal. Exponent types are restricted to primitive integers.
///
/// Overflow of `T` behaves like its `*` operator; use [`checked_pow`] to get
/// an error instead.
///
/// ```
/// use const_math::{pow, Error};
///
/// assert_eq!(pow(2_u32, 10), Ok(1024));
/// assert_eq!(pow(0.5_f64, 3_u8), Ok(0.125));
/// assert_eq!(pow(2_i64, -1), Err(Error::NegativeExponent));
/// ```
pub fn pow<T, E>(base: T, exponent: E) -> Result<T, Error>
where
    T: Clone + One + Mul<Output = T>,
    E: PrimInt,
{
    if exponent < E::zero() {
        return Err(Error::NegativeExponent);
    }
    Ok(pow_by_squaring(base, exponent))
}

/// Like [`pow`], but reports [`Error::Overflow`] when any intermediate
/// product is not representable.
pub fn checked_pow<T, E>(base: T, exponent: E) -> Result<T, Error>
where
    T: Clone + One + CheckedMul,
    E: PrimInt,
{
    if exponent < E::zero() {
        return Err(Error::NegativeExponent);
    }
    try_pow_by_squaring(base, exponent, |a, b| a.checked_mul(b)).ok_or(Error::Overflow)
}

/// `base` raised to any integer `exponent`; negative exponents give
/// `1 / base^|exponent|`.
///
/// `T` must have a multiplicative inverse ([`Inv`]), so floats qualify and
/// primitive integers do not. A zero float base under a negative exponent
/// gives an infinity rather than failing.
///
/// ```compile_fail
/// // integers have no reciprocal
/// let _ = const_math::powi(0_i32, -1);
/// ```
pub fn powi<T, E>(base: T, exponent: E) -> T
where
    T: Clone + One + Mul<Output = T> + Inv<Output = T>,
    E: PrimInt,
{
    let magnitude = pow_by_squaring(base, exponent);
    if exponent < E::zero() {
        magnitude.inv()
    } else {
        magnitude
    }
}

/// `base^|exponent|` for an infallible product.
#[inline]
fn pow_by_squaring<T, E>(base: T, exponent: E) -> T
where
    T: Clone + One + Mul<Output = T>,
    E: PrimInt,
{
    let mut result = T::one();
    let mut base = base;
    let mut exponent = exponent;
    let two = E::one() + E::one();
    while !exponent.is_zero() {
        // remainder is -1 for odd negative exponents
        if !(exponent % two).is_zero() {
            result = result * base.clone();
        }
        exponent = exponent / two;
        if !exponent.is_zero() {
            base = base.clone() * base;
        }
    }
    result
}

/// `base^|exponent|` where each product may fail.
///
/// The base is only squared while bits remain, so a final unused square
/// cannot report a spurious overflow.
fn try_pow_by_squaring<T, E, F>(base: T, exponent: E, mut mul: F) -> Option<T>
where
    T: One,
    E: PrimInt,
    F: FnMut(&T, &T) -> Option<T>,
{
    let mut result = T::one();
    let mut base = base;
    let mut exponent = exponent;
    let two = E::one() + E::one();
    while !exponent.is_zero() {
        if !(exponent % two).is_zero() {
            result = mul(&result, &base)?;
        }
        exponent = exponent / two;
        if !exponent.is_zero() {
            base = mul(&base, &base)?;
        }
    }
    Some(result)
}
