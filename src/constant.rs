//! Mathematical constants and the `MathConst` trait.
//!
//! Every constant is written once as a full-precision decimal literal and
//! instantiated per float type, so the compiler rounds it to nearest at the
//! target precision. The generic accessors (`pi::<T>()`, `e::<T>()`, …) are
//! `const fn` and can be used in `const` items:
//!
//! ```
//! use const_math::constant::{pi, MathConst};
//!
//! const HALF_TURN: f32 = pi::<f32>();
//! assert_eq!(HALF_TURN, core::f32::consts::PI);
//! assert_eq!(f64::TAU, 2.0 * f64::PI);
//! ```

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// Named constants available at a caller-chosen precision.
///
/// Implemented for `f32` and `f64`. Other numeric types (an extended
/// precision float, a fixed-point wrapper) opt in by implementing it; the
/// literals used for the built-in impls carry 78+ significant digits, enough
/// for any of them.
pub trait MathConst: Sized {
    /// π (circumference / diameter).
    const PI: Self;
    /// τ = 2π.
    const TAU: Self;
    /// 1/π.
    const INV_PI: Self;
    /// 1/√π.
    const INV_SQRT_PI: Self;

    /// e (base of the natural logarithm).
    const E: Self;
    /// log₂e.
    const LOG2_E: Self;
    /// log₁₀e.
    const LOG10_E: Self;
    /// ln 2.
    const LN_2: Self;
    /// ln 10.
    const LN_10: Self;

    /// √2.
    const SQRT_2: Self;
    /// √3.
    const SQRT_3: Self;
    /// 1/√3.
    const INV_SQRT_3: Self;

    /// γ, the Euler–Mascheroni constant.
    const EGAMMA: Self;
    /// φ = (1 + √5)/2, the golden ratio.
    const PHI: Self;
}

macro_rules! math_const_impl {
    ($($t:ty),*) => {$(
        impl MathConst for $t {
            const PI: $t = 3.14159265358979323846264338327950288419716939937510582097494459230781640628620899;
            const TAU: $t = 6.28318530717958647692528676655900576839433879875021164194988918461563281257241799;
            const INV_PI: $t = 0.318309886183790671537767526745028724068919291480912897495334688117470859573164;
            const INV_SQRT_PI: $t = 0.564189583547756286948079451560772585844050629329000826876428277587516887844419;

            const E: $t = 2.71828182845904523536028747135266249775724709369995957496696762772407663035354759;
            const LOG2_E: $t = 1.442695040888963407359924681001892137426645954152985934135449406931219160354371;
            const LOG10_E: $t = 0.434294481903251827651128918916605082294397005803666566114453655241094391594651;
            const LN_2: $t = 0.693147180559945309417232121458176568075500134360255254120680009493393621969694;
            const LN_10: $t = 2.302585092994045684017991454684364207601101488628772976033327900967572609677352;

            const SQRT_2: $t = 1.41421356237309504880168872420969807856967187537694807317667973799073247846210704;
            const SQRT_3: $t = 1.73205080756887729352744634150587236694280525381038062805580697945193301690880037;
            const INV_SQRT_3: $t = 0.577350269189625764509148780501957455647601751270126876018602326483977672437250;

            const EGAMMA: $t = 0.57721566490153286060651209008240243104215933593992359880576723488486772677766467;
            const PHI: $t = 1.61803398874989484820458683436563811772030917980576286213544862270526046281890245;
        }
    )*};
}

math_const_impl!(f32, f64);

macro_rules! const_accessor {
    ($(#[$doc:meta])* $name:ident => $konst:ident) => {
        $(#[$doc])*
        #[inline]
        pub const fn $name<T: MathConst>() -> T {
            T::$konst
        }
    };
}

const_accessor!(
    /// π at precision `T`.
    pi => PI
);
const_accessor!(
    /// τ = 2π at precision `T`.
    tau => TAU
);
const_accessor!(
    /// 1/π at precision `T`.
    inv_pi => INV_PI
);
const_accessor!(
    /// 1/√π at precision `T`.
    inv_sqrt_pi => INV_SQRT_PI
);
const_accessor!(
    /// e at precision `T`.
    e => E
);
const_accessor!(
    /// log₂e at precision `T`.
    log2_e => LOG2_E
);
const_accessor!(
    /// log₁₀e at precision `T`.
    log10_e => LOG10_E
);
const_accessor!(
    /// ln 2 at precision `T`.
    ln_2 => LN_2
);
const_accessor!(
    /// ln 10 at precision `T`.
    ln_10 => LN_10
);
const_accessor!(
    /// √2 at precision `T`.
    sqrt_2 => SQRT_2
);
const_accessor!(
    /// √3 at precision `T`.
    sqrt_3 => SQRT_3
);
const_accessor!(
    /// 1/√3 at precision `T`.
    inv_sqrt_3 => INV_SQRT_3
);
const_accessor!(
    /// Euler–Mascheroni γ at precision `T`.
    egamma => EGAMMA
);
const_accessor!(
    /// Golden ratio φ at precision `T`.
    phi => PHI
);

#[cfg(test)]
mod tests {
    use super::*;

    // ── f64 against the standard library (correctly rounded references) ──

    #[test]
    fn f64_matches_core_consts() {
        use core::f64::consts;

        assert_eq!(f64::PI, consts::PI);
        assert_eq!(f64::TAU, consts::TAU);
        assert_eq!(f64::INV_PI, consts::FRAC_1_PI);
        assert_eq!(f64::E, consts::E);
        assert_eq!(f64::LOG2_E, consts::LOG2_E);
        assert_eq!(f64::LOG10_E, consts::LOG10_E);
        assert_eq!(f64::LN_2, consts::LN_2);
        assert_eq!(f64::LN_10, consts::LN_10);
        assert_eq!(f64::SQRT_2, consts::SQRT_2);
        // 2/√π halved is exact in binary
        assert_eq!(f64::INV_SQRT_PI, consts::FRAC_2_SQRT_PI / 2.0);
    }

    #[test]
    fn f32_matches_core_consts() {
        use core::f32::consts;

        assert_eq!(f32::PI, consts::PI);
        assert_eq!(f32::TAU, consts::TAU);
        assert_eq!(f32::INV_PI, consts::FRAC_1_PI);
        assert_eq!(f32::E, consts::E);
        assert_eq!(f32::LOG2_E, consts::LOG2_E);
        assert_eq!(f32::LOG10_E, consts::LOG10_E);
        assert_eq!(f32::LN_2, consts::LN_2);
        assert_eq!(f32::LN_10, consts::LN_10);
        assert_eq!(f32::SQRT_2, consts::SQRT_2);
        assert_eq!(f32::INV_SQRT_PI, consts::FRAC_2_SQRT_PI / 2.0);
    }

    #[test]
    fn matches_float_const() {
        // Not imported: `FloatConst::PI()` and `MathConst::PI` share a namespace.
        assert_eq!(f64::PI, <f64 as num_traits::FloatConst>::PI());
        assert_eq!(f64::E, <f64 as num_traits::FloatConst>::E());
        assert_eq!(f32::LN_10, <f32 as num_traits::FloatConst>::LN_10());
        assert_eq!(f32::TAU, <f32 as num_traits::FloatConst>::TAU());
    }

    // ── constants without a core counterpart ──

    #[test]
    fn sqrt_3_is_correctly_rounded() {
        // IEEE 754 sqrt is correctly rounded
        assert_eq!(f64::SQRT_3, 3.0_f64.sqrt());
        assert_eq!(f32::SQRT_3, 3.0_f32.sqrt());
    }

    /// 45 significant digits, parsed with correct rounding at each precision.
    const REFERENCE_DIGITS: [(&str, f64, f32, &str); 4] = [
        // OEIS A002194
        ("SQRT_3", f64::SQRT_3, f32::SQRT_3, "1.73205080756887729352744634150587236694280525"),
        // OEIS A020760
        ("INV_SQRT_3", f64::INV_SQRT_3, f32::INV_SQRT_3, "0.577350269189625764509148780501957455647601751"),
        // OEIS A001622
        ("PHI", f64::PHI, f32::PHI, "1.61803398874989484820458683436563811772030918"),
        // OEIS A087197
        ("INV_SQRT_PI", f64::INV_SQRT_PI, f32::INV_SQRT_PI, "0.564189583547756286948079451560772585844050629"),
    ];

    #[test]
    fn reference_digits_round_to_nearest() {
        for (name, double, single, digits) in REFERENCE_DIGITS {
            let reference64: f64 = digits.parse().unwrap();
            let reference32: f32 = digits.parse().unwrap();
            assert_eq!(double, reference64, "{name} (f64)");
            assert_eq!(single, reference32, "{name} (f32)");
        }
    }

    #[test]
    fn phi_identity() {
        // φ² = φ + 1
        assert!((f64::PHI * f64::PHI - (f64::PHI + 1.0)).abs() < 2e-15);
        assert!((f32::PHI * f32::PHI - (f32::PHI + 1.0)).abs() < 1e-6);
    }

    #[test]
    fn egamma_reference_digits() {
        // 0.5772156649015328606065120900824024310422 (OEIS A001620)
        let reference: f64 = "0.5772156649015328606065120900824024310422".parse().unwrap();
        assert_eq!(f64::EGAMMA, reference);
        assert!((f64::EGAMMA - 0.577215664901533).abs() < 1e-15);

        let reference32: f32 = "0.5772156649015328606065120900824024310422".parse().unwrap();
        assert_eq!(f32::EGAMMA, reference32);
    }

    // ── generic accessors ──

    #[test]
    fn accessors_are_const() {
        const P: f64 = pi::<f64>();
        const G: f32 = phi::<f32>();
        assert_eq!(P, f64::PI);
        assert_eq!(G, f32::PHI);
    }

    #[test]
    fn accessors_forward_to_trait() {
        fn all<T: MathConst + PartialEq + core::fmt::Debug + Copy>() {
            assert_eq!(pi::<T>(), T::PI);
            assert_eq!(tau::<T>(), T::TAU);
            assert_eq!(inv_pi::<T>(), T::INV_PI);
            assert_eq!(inv_sqrt_pi::<T>(), T::INV_SQRT_PI);
            assert_eq!(e::<T>(), T::E);
            assert_eq!(log2_e::<T>(), T::LOG2_E);
            assert_eq!(log10_e::<T>(), T::LOG10_E);
            assert_eq!(ln_2::<T>(), T::LN_2);
            assert_eq!(ln_10::<T>(), T::LN_10);
            assert_eq!(sqrt_2::<T>(), T::SQRT_2);
            assert_eq!(sqrt_3::<T>(), T::SQRT_3);
            assert_eq!(inv_sqrt_3::<T>(), T::INV_SQRT_3);
            assert_eq!(egamma::<T>(), T::EGAMMA);
            assert_eq!(phi::<T>(), T::PHI);
        }
        all::<f32>();
        all::<f64>();
    }
}
