//! IEEE-754 single-precision bit utilities
//!
//! A float is never converted here, only reinterpreted: the 32 bits are read as
//! `1 sign | 8 exponent | 23 mantissa`. An exponent field of `0xFF` marks
//! infinity (mantissa 0) or NaN (mantissa non-zero).

pub const SIGN_MASK: u32 = 0x8000_0000;
pub const EXPONENT_MASK: u32 = 0x7F80_0000;
pub const MANTISSA_MASK: u32 = 0x007F_FFFF;
pub const EXPONENT_SHIFT: u32 = 23;
/// Exponent field value shared by infinities and NaNs.
pub const EXPONENT_SATURATED: u32 = 0xFF;

/// Quiet NaN with an empty payload.
pub const QUIET_NAN_BITS: u32 = 0x7FC0_0000;
pub const INF_BITS: u32 = 0x7F80_0000;
pub const NEG_INF_BITS: u32 = 0xFF80_0000;
/// Largest finite value, `0x7F7FFFFF`.
pub const FLOAT_MAX_BITS: u32 = 0x7F7F_FFFF;

/// Positive infinity.
pub const INF: f32 = f32::from_bits(INF_BITS);
/// Negative infinity.
pub const NEG_INF: f32 = f32::from_bits(NEG_INF_BITS);
/// Not-a-number (quiet, `0x7FC00000`).
pub const NAN: f32 = f32::from_bits(QUIET_NAN_BITS);
/// Largest finite f32, used as the saturation sentinel by `exp` and `ln`.
pub const FLOAT_MAX: f32 = f32::from_bits(FLOAT_MAX_BITS);

/// Reinterpret a float as its raw bit pattern.
#[inline]
pub fn to_bits(x: f32) -> u32 {
    x.to_bits()
}

/// Reinterpret a raw bit pattern as a float.
#[inline]
pub fn from_bits(bits: u32) -> f32 {
    f32::from_bits(bits)
}

/// The biased 8-bit exponent field.
#[inline]
pub fn exponent_field(x: f32) -> u32 {
    (to_bits(x) & EXPONENT_MASK) >> EXPONENT_SHIFT
}

/// The 23-bit mantissa field (without the implicit leading one).
#[inline]
pub fn mantissa_field(x: f32) -> u32 {
    to_bits(x) & MANTISSA_MASK
}

/// True when the sign bit is set, including for `-0.0` and negative NaNs.
#[inline]
pub fn sign_bit(x: f32) -> bool {
    to_bits(x) & SIGN_MASK != 0
}

/// True unless the value is an infinity or a NaN.
///
/// # Test Cases
/// - is_finite(1.0) = true
/// - is_finite(INF) = false
/// - is_finite(NAN) = false
pub fn is_finite(x: f32) -> bool {
    exponent_field(x) != EXPONENT_SATURATED
}

/// True for any NaN, quiet or signalling.
pub fn is_nan(x: f32) -> bool {
    exponent_field(x) == EXPONENT_SATURATED && mantissa_field(x) != 0
}

/// True for positive or negative infinity.
pub fn is_infinite(x: f32) -> bool {
    exponent_field(x) == EXPONENT_SATURATED && mantissa_field(x) == 0
}
