//! Trigonometric functions
//!
//! Sine is a Maclaurin series through x^9 after reducing the argument into
//! (-π, π]; cosine and tangent are derived from it. The inverse functions share
//! one arctangent series run on the half-angle substitute
//! `y = x / (1 + sqrt(1 + x²))`, which keeps `|y| <= tan(π/8)`.

use crate::exp::exp;
use crate::float::{fabs, fmod, sqrt};
use crate::{PI, TAU};

const HALF_PI: f32 = PI / 2.0;

/// Below this magnitude the cosine is treated as a pole of the tangent.
const TAN_POLE_EPSILON: f32 = 0.0001;

/// Sine of `x` radians.
///
/// The argument is reduced with the exact [`fmod`], so any finite input lands
/// in (-π, π]. Infinite or NaN input gives NaN.
///
/// # Test Cases
/// - sin(0) = 0
/// - sin(π/2) ≈ 1
pub fn sin(x: f32) -> f32 {
    let mut x = fmod(x, TAU);
    if x < 0.0 {
        x += TAU;
    }
    if x > PI {
        x -= TAU;
    }

    let x2 = x * x;
    let mut result = x;
    let mut term = x;

    term = term * x2 / (2.0 * 3.0);
    result -= term;
    term = term * x2 / (4.0 * 5.0);
    result += term;
    term = term * x2 / (6.0 * 7.0);
    result -= term;
    term = term * x2 / (8.0 * 9.0);
    result += term;

    result
}

/// Cosine of `x` radians, as `sin(x + π/2)`.
pub fn cos(x: f32) -> f32 {
    sin(x + HALF_PI)
}

/// Tangent of `x` radians; 0.0 where the cosine vanishes.
pub fn tan(x: f32) -> f32 {
    let c = cos(x);
    if fabs(c) < TAN_POLE_EPSILON {
        return 0.0;
    }
    sin(x) / c
}

/// Arctangent in (-π/2, π/2).
///
/// Arguments above 1 in magnitude use `atan(|x|) = π/2 - atan(1/|x|)` and get
/// their sign back afterwards, so `atan(-x) == -atan(x)` everywhere.
///
/// # Test Cases
/// - atan(0) = 0
/// - atan(1) ≈ π/4
/// - atan(-2) ≈ -1.1071
pub fn atan(x: f32) -> f32 {
    let abs_x = fabs(x);
    if abs_x > 1.0 {
        let result = HALF_PI - atan(1.0 / abs_x);
        return if x < 0.0 { -result } else { result };
    }

    let y = abs_x / (1.0 + sqrt(1.0 + abs_x * abs_x));
    let y2 = y * y;
    let mut result = y;
    let mut term = y;

    term *= y2;
    result -= term / 3.0;
    term *= y2;
    result += term / 5.0;
    term *= y2;
    result -= term / 7.0;
    term *= y2;
    result += term / 9.0;

    result *= 2.0;
    if x < 0.0 {
        -result
    } else {
        result
    }
}

/// Angle of the point `(x, y)` in (-π, π].
///
/// The origin maps to 0.0.
pub fn atan2(y: f32, x: f32) -> f32 {
    if x > 0.0 {
        atan(y / x)
    } else if x < 0.0 && y >= 0.0 {
        atan(y / x) + PI
    } else if x < 0.0 {
        atan(y / x) - PI
    } else if y > 0.0 {
        HALF_PI
    } else if y < 0.0 {
        -HALF_PI
    } else {
        0.0
    }
}

/// Arcsine in [-π/2, π/2]; 0.0 outside the domain [-1, 1].
///
/// # Test Cases
/// - asin(0) = 0
/// - asin(1) ≈ π/2
/// - asin(2) = 0
pub fn asin(x: f32) -> f32 {
    if !(-1.0..=1.0).contains(&x) {
        return 0.0;
    }
    atan2(x, sqrt(1.0 - x * x))
}

/// Hyperbolic cosine, `(e^x + e^-x) / 2`.
pub fn cosh(x: f32) -> f32 {
    (exp(x) + exp(-x)) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float::fabs;
    use crate::ieee::{FLOAT_MAX, INF, NAN, NEG_INF};

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        fabs(a - b) <= eps
    }

    #[test]
    fn test_sin() {
        assert_eq!(sin(0.0), 0.0);
        assert!(approx(sin(HALF_PI), 1.0, 0.01));
        assert!(approx(sin(-HALF_PI), -1.0, 0.01));
        assert!(approx(sin(PI / 6.0), 0.5, 0.001));
        assert!(approx(sin(PI / 6.0 + 10.0 * TAU), 0.5, 0.01));
    }

    #[test]
    fn test_large_arguments_stay_bounded() {
        for x in [1.0e8, 1.0e10, 3.0e10, -3.0e10, 1.0e30, -FLOAT_MAX] {
            let s = sin(x);
            let c = cos(x);
            assert!(fabs(s) <= 1.01, "sin({}) = {}", x, s);
            assert!(fabs(c) <= 1.01, "cos({}) = {}", x, c);
            assert!(!tan(x).is_nan(), "tan({}) is NaN", x);
        }
        assert!(approx(sin(-3.0e10), -sin(3.0e10), 1e-5));
    }

    #[test]
    fn test_non_finite_arguments() {
        assert!(sin(INF).is_nan());
        assert!(cos(NEG_INF).is_nan());
        assert!(sin(NAN).is_nan());
    }

    #[test]
    fn test_cos() {
        assert!(approx(cos(0.0), 1.0, 0.01));
        assert!(approx(cos(PI), -1.0, 0.01));
        assert!(approx(cos(PI / 3.0), 0.5, 0.01));
    }

    #[test]
    fn test_tan() {
        assert!(approx(tan(0.0), 0.0, 0.01));
        assert!(approx(tan(PI / 4.0), 1.0, 0.01));
        assert!(approx(tan(-PI / 4.0), -1.0, 0.01));
    }

    #[test]
    fn test_atan() {
        assert!(approx(atan(0.0), 0.0, 0.01));
        assert!(approx(atan(1.0), PI / 4.0, 0.01));
        assert!(approx(atan(2.0), 1.107_148_7, 0.001));
        assert!(approx(atan(-2.0), -1.107_148_7, 0.001));
        assert!(approx(atan(-0.5), -0.463_647_6, 0.001));
        assert!(approx(atan(1000.0), HALF_PI, 0.01));
    }

    #[test]
    fn test_atan2_quadrants() {
        assert!(approx(atan2(1.0, 1.0), PI / 4.0, 0.01));
        assert!(approx(atan2(1.0, -1.0), 3.0 * PI / 4.0, 0.01));
        assert!(approx(atan2(-1.0, -1.0), -3.0 * PI / 4.0, 0.01));
        assert!(approx(atan2(-1.0, 1.0), -PI / 4.0, 0.01));
        assert_eq!(atan2(1.0, 0.0), HALF_PI);
        assert_eq!(atan2(-1.0, 0.0), -HALF_PI);
        assert_eq!(atan2(0.0, 0.0), 0.0);
        assert!(approx(atan2(0.0, -1.0), PI, 0.01));
    }

    #[test]
    fn test_asin() {
        assert!(approx(asin(0.0), 0.0, 0.01));
        assert!(approx(asin(1.0), HALF_PI, 0.01));
        assert!(approx(asin(-1.0), -HALF_PI, 0.01));
        assert!(approx(asin(0.5), PI / 6.0, 0.01));
        assert_eq!(asin(1.5), 0.0);
        assert_eq!(asin(-2.0), 0.0);
    }

    #[test]
    fn test_cosh() {
        assert!(approx(cosh(0.0), 1.0, 0.01));
        assert!(approx(cosh(1.0), 1.543_080_6, 0.001));
        assert!(approx(cosh(-1.0), cosh(1.0), 1e-6));
    }
}
