//! Exponential and logarithmic functions
//!
//! `exp` sums its Maclaurin series directly (no range reduction), so inputs are
//! clamped to keep the series finite. `ln` normalizes its argument into
//! [0.5, 1] and runs the `atanh` series in `(x - 1) / (x + 1)`.

use crate::float::{fabs, floor};
use crate::ieee::{is_infinite, FLOAT_MAX};
use crate::{LN_10, LN_2};

/// Maximum number of series terms summed by [`exp`].
const EXP_MAX_TERMS: i32 = 20;
/// Series terms below this magnitude stop the summation.
const EXP_TOLERANCE: f32 = 0.000_001;
/// Below this input `exp` returns 0.0.
const EXP_UNDERFLOW: f32 = -10.0;
/// Above this input `exp` saturates to the largest finite float.
const EXP_OVERFLOW: f32 = 88.0;
/// 2^24. Every float of this magnitude is an even integer.
const EVEN_THRESHOLD: f32 = 16_777_216.0;
/// Odd-power terms summed by [`ln`] after the leading `y`.
const LN_TERMS: i32 = 10;

/// `e^x`.
///
/// # Test Cases
/// - exp(0) = 1
/// - exp(1) ≈ 2.71828
/// - exp(-11) = 0
/// - exp(89) = f32::MAX
pub fn exp(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }
    if x < EXP_UNDERFLOW {
        return 0.0;
    }
    if x > EXP_OVERFLOW {
        return FLOAT_MAX;
    }

    let mut result = 1.0;
    let mut term = 1.0;

    for i in 1..=EXP_MAX_TERMS {
        term *= x / i as f32;
        result += term;
        if fabs(term) < EXP_TOLERANCE {
            break;
        }
    }

    result
}

/// `2^x`, as `exp(x * ln 2)`.
pub fn exp2(x: f32) -> f32 {
    exp(x * LN_2)
}

/// Natural logarithm.
///
/// Non-positive input returns `-f32::MAX` instead of NaN or -infinity. `+inf`
/// returns `+inf`.
///
/// # Test Cases
/// - ln(1) = 0
/// - ln(e) ≈ 1
/// - ln(0) = -f32::MAX
pub fn ln(x: f32) -> f32 {
    if x <= 0.0 {
        return -FLOAT_MAX;
    }
    if x == 1.0 {
        return 0.0;
    }
    if is_infinite(x) {
        return x;
    }

    let mut x = x;
    let mut exponent: i32 = 0;
    while x < 0.5 {
        x *= 2.0;
        exponent -= 1;
    }
    while x > 1.0 {
        x *= 0.5;
        exponent += 1;
    }

    let y = (x - 1.0) / (x + 1.0);
    let y2 = y * y;
    let mut series = y;
    let mut term = y;

    for i in 1..=LN_TERMS {
        term *= y2;
        series += term / (2 * i + 1) as f32;
    }

    2.0 * series + exponent as f32 * LN_2
}

/// Base-2 logarithm.
pub fn log2(x: f32) -> f32 {
    ln(x) / LN_2
}

/// Base-10 logarithm.
pub fn log10(x: f32) -> f32 {
    ln(x) / LN_10
}

/// `x^y` for real results only.
///
/// - `y == 0` gives 1.0 (including `0^0`)
/// - `x == 0` gives 0.0
/// - a negative base with a fractional exponent gives 0.0
/// - a negative base with an odd integer exponent gives a negative result
///
/// # Test Cases
/// - pow(2, 10) ≈ 1024
/// - pow(-2, 3) ≈ -8
/// - pow(-2, 0.5) = 0
pub fn pow(x: f32, y: f32) -> f32 {
    if y == 0.0 {
        return 1.0;
    }
    if x == 0.0 {
        return 0.0;
    }
    if x < 0.0 && y != floor(y) {
        return 0.0;
    }

    let negative = x < 0.0 && is_odd_integer(y);
    let result = exp(y * ln(fabs(x)));
    if negative {
        -result
    } else {
        result
    }
}

/// Parity of an integral `y`. Past 2^24 the last mantissa bit has a place
/// value of 2 or more, so the value is even.
fn is_odd_integer(y: f32) -> bool {
    fabs(y) < EVEN_THRESHOLD && (y as i32) & 1 != 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ieee::INF;
    use crate::E;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        fabs(a - b) <= eps
    }

    #[test]
    fn test_exp() {
        assert_eq!(exp(0.0), 1.0);
        assert!(approx(exp(1.0), 2.718_28, 0.01));
        assert!(approx(exp(-1.0), 0.367_879, 0.001));
        assert!(approx(exp(2.0), 7.389_056, 0.01));
        assert_eq!(exp(-11.0), 0.0);
        assert_eq!(exp(89.0), f32::MAX);
    }

    #[test]
    fn test_exp2() {
        assert!(approx(exp2(0.0), 1.0, 0.01));
        assert!(approx(exp2(1.0), 2.0, 0.01));
        assert!(approx(exp2(3.0), 8.0, 0.01));
    }

    #[test]
    fn test_ln() {
        assert_eq!(ln(1.0), 0.0);
        assert!(approx(ln(E), 1.0, 0.01));
        assert!(approx(ln(2.0), LN_2, 1e-5));
        assert!(approx(ln(0.1), -2.302_585, 0.001));
        assert_eq!(ln(0.0), -f32::MAX);
        assert_eq!(ln(-3.0), -f32::MAX);
        assert_eq!(ln(INF), INF);
    }

    #[test]
    fn test_log2_log10() {
        assert!(approx(log2(1.0), 0.0, 0.01));
        assert!(approx(log2(2.0), 1.0, 0.01));
        assert!(approx(log2(8.0), 3.0, 0.01));
        assert!(approx(log10(1.0), 0.0, 0.01));
        assert!(approx(log10(10.0), 1.0, 0.01));
        assert!(approx(log10(100.0), 2.0, 0.01));
    }

    #[test]
    fn test_pow() {
        assert!(approx(pow(2.0, 3.0), 8.0, 0.01));
        assert!(approx(pow(3.0, 2.0), 9.0, 0.01));
        assert!(approx(pow(2.0, 10.0), 1024.0, 1.0));
        assert!(approx(pow(4.0, 0.5), 2.0, 0.01));
        assert!(approx(pow(-2.0, 3.0), -8.0, 0.01));
        assert!(approx(pow(-2.0, 2.0), 4.0, 0.01));
        assert_eq!(pow(5.0, 0.0), 1.0);
        assert_eq!(pow(0.0, 0.0), 1.0);
        assert_eq!(pow(0.0, 3.0), 0.0);
        assert_eq!(pow(-2.0, 0.5), 0.0);
    }

    #[test]
    fn test_pow_large_exponents() {
        assert_eq!(pow(-1.0, 4.0e9), 1.0);
        assert_eq!(pow(-1.0, 16_777_215.0), -1.0);
        assert_eq!(pow(-1.0, 16_777_216.0), 1.0);
        assert_eq!(pow(-2.0, -3.0e9), 0.0);
        assert_eq!(pow(-0.5, 3.0e9), 0.0);
        assert_eq!(pow(-1.5, 2.5e9), FLOAT_MAX);
    }
}
