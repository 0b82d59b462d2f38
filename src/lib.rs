//! High-precision mathematical constants and small generic numeric functions.
//!
//! This crate provides named constants (π, τ, e, √2, φ, γ, …) at a
//! caller-chosen float precision, and generic `min`, `max`, `abs` and
//! integer `pow` (exponentiation by squaring).
//!
//! ```
//! use const_math::{max_of, pi, pow, MathConst};
//!
//! let area = pi::<f64>() * pow(2.0_f64, 2_u32)?;
//! assert_eq!(area, 4.0 * f64::PI);
//! assert_eq!(max_of(&[3, 9, 4])?, 9);
//! # Ok::<(), const_math::Error>(())
//! ```
//!
//! # Features
//!
//! - `std` (default): links `std` through `num-traits`. Without it the crate
//!   is `#![no_std]`; nothing in it needs float intrinsics.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod constant;
pub mod function;
pub mod types;

pub use constant::{
    e, egamma, inv_pi, inv_sqrt_3, inv_sqrt_pi, ln_10, ln_2, log10_e, log2_e, phi, pi, sqrt_2,
    sqrt_3, tau, MathConst,
};
pub use function::{
    abs, checked_abs, checked_pow, max, max_in, max_of, min, min_in, min_of, pow, powi,
};
pub use types::Error;
