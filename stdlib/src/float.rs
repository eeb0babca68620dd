//! Floating-point helpers for the numcore stdlib
//!
//! Rounding, arithmetic helpers and the square root, written without any f32
//! intrinsic. Rounding is built on the truncating `as i32` cast for values
//! below 2^23; every float at or above that magnitude is already an integer and
//! is returned as is, along with NaN and the infinities.

use crate::ieee::{
    from_bits, is_finite, is_nan, to_bits, EXPONENT_SATURATED, EXPONENT_SHIFT, MANTISSA_MASK,
    NAN, SIGN_MASK,
};
use crate::PI;

/// 2^23. Floats of this magnitude have no fractional bits.
const INTEGRAL_THRESHOLD: f32 = 8_388_608.0;

/// Implicit leading mantissa bit of a normal float.
const IMPLICIT_BIT: u32 = 1 << EXPONENT_SHIFT;

/// Magic seed for the inverse square root bit trick.
const INV_SQRT_MAGIC: u32 = 0x5F37_59DF;

/// Absolute value of a float.
#[inline]
pub fn fabs(x: f32) -> f32 {
    if x < 0.0 { -x } else { x }
}

#[inline]
pub fn fmin(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

#[inline]
pub fn fmax(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Clamp a value between min and max.
///
/// # Test Cases
/// - fclamp(5.5, 0.0, 10.0) = 5.5
/// - fclamp(-1.0, 0.0, 10.0) = 0.0
pub fn fclamp(x: f32, min_val: f32, max_val: f32) -> f32 {
    if x < min_val {
        min_val
    } else if x > max_val {
        max_val
    } else {
        x
    }
}

/// -1.0, 0.0 or 1.0 by sign. NaN maps to 0.0.
pub fn fsign(x: f32) -> f32 {
    if x < 0.0 {
        -1.0
    } else if x > 0.0 {
        1.0
    } else {
        0.0
    }
}

/// True when `x` has no fractional bits to drop: `|x| >= 2^23`, infinite or NaN.
#[inline]
fn is_integral_magnitude(x: f32) -> bool {
    !(fabs(x) < INTEGRAL_THRESHOLD)
}

/// Drop the fractional part (round toward zero).
#[inline]
pub fn trunc(x: f32) -> f32 {
    if is_integral_magnitude(x) {
        return x;
    }
    x as i32 as f32
}

/// Largest integer not greater than `x`.
///
/// # Test Cases
/// - floor(3.7) = 3.0
/// - floor(-3.1) = -4.0
pub fn floor(x: f32) -> f32 {
    if is_integral_magnitude(x) {
        return x;
    }
    let i = x as i32;
    if x < i as f32 {
        (i - 1) as f32
    } else {
        i as f32
    }
}

/// Smallest integer not less than `x`.
///
/// # Test Cases
/// - ceil(3.2) = 4.0
/// - ceil(-3.9) = -3.0
pub fn ceil(x: f32) -> f32 {
    if is_integral_magnitude(x) {
        return x;
    }
    let i = x as i32;
    if x > i as f32 {
        (i + 1) as f32
    } else {
        i as f32
    }
}

/// Round to nearest, halves away from zero.
///
/// # Test Cases
/// - round(3.5) = 4.0
/// - round(3.4) = 3.0
/// - round(-3.5) = -4.0
pub fn round(x: f32) -> f32 {
    if x >= 0.0 {
        floor(x + 0.5)
    } else {
        ceil(x - 0.5)
    }
}

/// Truncated remainder of `x / y`, taking the sign of `x`.
///
/// This is C `fmod`, not a floored modulo: `fmod(-5.5, 2.0) == -1.5`. The
/// result is exact for any quotient size: the mantissas are aligned and
/// reduced by shift-and-subtract, one exponent step at a time.
///
/// Returns 0.0 when `y == 0.0`, NaN when `x` is infinite or either operand is
/// NaN, and `x` when `y` is infinite.
pub fn fmod(x: f32, y: f32) -> f32 {
    if y == 0.0 {
        return 0.0;
    }
    if !is_finite(x) || is_nan(y) {
        return NAN;
    }

    let ux = to_bits(x);
    let uy = to_bits(y);
    let sign = ux & SIGN_MASK;
    let ax = ux & !SIGN_MASK;
    let ay = uy & !SIGN_MASK;
    if ax <= ay {
        return if ax == ay { from_bits(sign) } else { x };
    }

    let (mut mx, mut ex) = unpack_magnitude(ax);
    let (my, ey) = unpack_magnitude(ay);

    while ex > ey {
        if mx >= my {
            mx -= my;
            if mx == 0 {
                return from_bits(sign);
            }
        }
        mx <<= 1;
        ex -= 1;
    }
    if mx >= my {
        mx -= my;
        if mx == 0 {
            return from_bits(sign);
        }
    }

    while mx & IMPLICIT_BIT == 0 {
        mx <<= 1;
        ex -= 1;
    }
    let bits = if ex > 0 {
        ((ex as u32) << EXPONENT_SHIFT) | (mx & MANTISSA_MASK)
    } else {
        mx >> (1 - ex) as u32
    };
    from_bits(sign | bits)
}

/// Split a positive finite bit pattern into a mantissa with the implicit bit
/// at position 23 and its biased exponent. Subnormals are normalized, which
/// drives the exponent to zero or below.
fn unpack_magnitude(bits: u32) -> (u32, i32) {
    let mut exponent = (bits >> EXPONENT_SHIFT) as i32;
    let mut mantissa = bits & MANTISSA_MASK;
    if exponent == 0 {
        exponent = 1;
        while mantissa & IMPLICIT_BIT == 0 {
            mantissa <<= 1;
            exponent -= 1;
        }
    } else {
        debug_assert!(exponent < EXPONENT_SATURATED as i32);
        mantissa |= IMPLICIT_BIT;
    }
    (mantissa, exponent)
}

/// Linear interpolation between two values.
///
/// # Test Cases
/// - lerp(0.0, 10.0, 0.0) = 0.0
/// - lerp(0.0, 10.0, 0.5) = 5.0
/// - lerp(0.0, 10.0, 1.0) = 10.0
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// 0.0 below the edge, 1.0 at or above it.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Approximate `1 / sqrt(x)` for `x > 0`.
///
/// Halving the exponent through the integer view of the float and subtracting
/// from a magic constant lands within a few percent; two Newton-Raphson steps
/// `y = y * (1.5 - 0.5 * x * y * y)` bring that to about 1e-5.
pub fn inv_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = from_bits(INV_SQRT_MAGIC.wrapping_sub(to_bits(x) >> 1));
    y = y * (1.5 - half * y * y);
    y = y * (1.5 - half * y * y);
    y
}

/// Square root via [`inv_sqrt`].
///
/// Zero and negative inputs return 0.0 rather than NaN. Infinity and NaN are
/// passed through unchanged.
///
/// # Test Cases
/// - sqrt(4.0) ≈ 2.0
/// - sqrt(9.0) ≈ 3.0
/// - sqrt(-5.0) = 0.0
pub fn sqrt(x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if !is_finite(x) {
        return x;
    }
    x * inv_sqrt(x)
}
