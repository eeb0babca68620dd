//! Integer arithmetic helpers for the numcore stdlib
//!
//! 32-bit signed helpers. Float counterparts live in `float.rs` under the
//! `f`-prefixed names.

/// Absolute value. `abs(i32::MIN)` wraps to `i32::MIN`.
///
/// # Test Cases
/// - abs(-5) = 5
/// - abs(5) = 5
#[inline]
pub fn abs(x: i32) -> i32 {
    if x < 0 {
        x.wrapping_neg()
    } else {
        x
    }
}

/// Smaller of two values.
#[inline]
pub fn min(a: i32, b: i32) -> i32 {
    if a < b { a } else { b }
}

/// Larger of two values.
#[inline]
pub fn max(a: i32, b: i32) -> i32 {
    if a > b { a } else { b }
}

/// Clamp `x` into `[min_val, max_val]`. The lower bound wins if the bounds cross.
///
/// # Test Cases
/// - clamp(5, 0, 10) = 5
/// - clamp(-5, 0, 10) = 0
/// - clamp(15, 0, 10) = 10
pub fn clamp(x: i32, min_val: i32, max_val: i32) -> i32 {
    if x < min_val {
        min_val
    } else if x > max_val {
        max_val
    } else {
        x
    }
}

/// -1, 0 or 1 by sign.
pub fn sign(x: i32) -> i32 {
    if x < 0 {
        -1
    } else if x > 0 {
        1
    } else {
        0
    }
}

#[inline]
pub fn is_even(x: i32) -> bool {
    x & 1 == 0
}

#[inline]
pub fn is_odd(x: i32) -> bool {
    x & 1 != 0
}

/// True for 1, 2, 4, 8, ...; zero and negatives are never powers of two.
///
/// # Test Cases
/// - is_power_of_two(1024) = true
/// - is_power_of_two(0) = false
/// - is_power_of_two(6) = false
pub fn is_power_of_two(x: i32) -> bool {
    x > 0 && (x & (x - 1)) == 0
}

/// `2^exp` as an i32.
///
/// Negative exponents give 0; exponents of 31 and above saturate to `i32::MAX`
/// instead of overflowing into the sign bit.
///
/// # Test Cases
/// - pow2(0) = 1
/// - pow2(10) = 1024
/// - pow2(-1) = 0
/// - pow2(31) = 2147483647
pub fn pow2(exp: i32) -> i32 {
    if exp < 0 {
        return 0;
    }
    if exp >= 31 {
        return i32::MAX;
    }
    1 << exp
}
