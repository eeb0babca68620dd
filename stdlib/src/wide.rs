//! Wide-integer intrinsics
//!
//! 64-bit multiply, logical shift and division built from 32-bit operations and a
//! binary long division loop. Nothing in here may lower to a compiler support
//! call (`__muldi3`, `__divdi3`, `__aulldiv`, ...), so 64-bit `/` and `%` are
//! never used.
//!
//! Behavioural contracts:
//! - multiplication wraps modulo 2^64
//! - logical shifts of 64 or more bits produce 0
//! - division by zero yields quotient 0 and the dividend as remainder

/// A 64-bit value viewed as two 32-bit machine words.
///
/// `value = hi * 2^32 + lo`, read as signed or unsigned by the operation using it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordPair {
    pub lo: u32,
    pub hi: u32,
}

impl WordPair {
    /// Split a 64-bit value into its low and high words.
    #[inline]
    pub const fn split(value: u64) -> Self {
        Self {
            lo: value as u32,
            hi: (value >> 32) as u32,
        }
    }

    /// Reassemble the 64-bit value.
    #[inline]
    pub const fn join(self) -> u64 {
        ((self.hi as u64) << 32) | self.lo as u64
    }

    pub const fn fits_u32(self) -> bool {
        self.hi == 0
    }
}

/// Multiply two 64-bit integers, wrapping on overflow.
///
/// Schoolbook multiplication over 32-bit words: `lo*lo` is the only product that
/// needs its full 64-bit width; the cross products only contribute to the high
/// word and `hi*hi` falls entirely outside the result.
///
/// # Test Cases
/// - multiply64(3, 4) = 12
/// - multiply64(-3, 4) = -12
/// - multiply64(i64::MAX, 2) = -2
pub fn multiply64(a: i64, b: i64) -> i64 {
    let a = WordPair::split(a as u64);
    let b = WordPair::split(b as u64);

    let lo_lo = (a.lo as u64) * (b.lo as u64);
    let cross = a.hi.wrapping_mul(b.lo).wrapping_add(a.lo.wrapping_mul(b.hi));

    WordPair {
        lo: lo_lo as u32,
        hi: ((lo_lo >> 32) as u32).wrapping_add(cross),
    }
    .join() as i64
}

/// Logical (zero-filling) right shift of a 64-bit value.
///
/// Shift counts of 64 and above return 0 rather than being masked the way
/// hardware shift instructions mask them.
///
/// # Test Cases
/// - shift_right_logical64(0x8000_0000_0000_0000, 63) = 1
/// - shift_right_logical64(u64::MAX, 32) = 0xFFFF_FFFF
/// - shift_right_logical64(u64::MAX, 64) = 0
pub fn shift_right_logical64(value: u64, shift: u32) -> u64 {
    let words = WordPair::split(value);

    match shift {
        0 => value,
        1..=31 => WordPair {
            lo: (words.lo >> shift) | (words.hi << (32 - shift)),
            hi: words.hi >> shift,
        }
        .join(),
        32..=63 => WordPair {
            lo: words.hi >> (shift - 32),
            hi: 0,
        }
        .join(),
        _ => 0,
    }
}

/// Unsigned 64-bit division returning `(quotient, remainder)`.
///
/// Division by zero returns `(0, a)`. When both operands fit in 32 bits the
/// native 32-bit divide is used; otherwise the divisor is aligned under the
/// dividend's top bit (via leading-zero counts) and a restoring long division
/// walks back down, one quotient bit per step, at most 64 steps.
pub fn udivmod64(a: u64, b: u64) -> (u64, u64) {
    if b == 0 {
        return (0, a);
    }
    if a < b {
        return (0, a);
    }

    let wa = WordPair::split(a);
    let wb = WordPair::split(b);
    if wa.fits_u32() && wb.fits_u32() {
        return ((wa.lo / wb.lo) as u64, (wa.lo % wb.lo) as u64);
    }

    // a >= b, so the divisor never has fewer leading zeros than the dividend
    let align = b.leading_zeros() - a.leading_zeros();
    let mut divisor = b << align;
    let mut remainder = a;
    let mut quotient: u64 = 0;

    let mut bit = align as i32;
    while bit >= 0 {
        if remainder >= divisor {
            remainder -= divisor;
            quotient |= 1u64 << bit;
        }
        divisor >>= 1;
        bit -= 1;
    }

    (quotient, remainder)
}

/// Signed 64-bit division truncating toward zero, returning `(quotient, remainder)`.
///
/// The remainder carries the sign of `a`; the quotient is negative when exactly
/// one operand is. `b == 0` returns `(0, a)`. `i64::MIN / -1` wraps to
/// `(i64::MIN, 0)`.
///
/// # Test Cases
/// - divmod64(7, 2) = (3, 1)
/// - divmod64(-7, 2) = (-3, -1)
/// - divmod64(7, -2) = (-3, 1)
/// - divmod64(7, 0) = (0, 7)
pub fn divmod64(a: i64, b: i64) -> (i64, i64) {
    if b == 0 {
        return (0, a);
    }

    let ua = a.unsigned_abs();
    let ub = b.unsigned_abs();

    if ub <= 1 {
        return (multiply64(a, b), 0);
    }
    if ua < ub {
        return (0, a);
    }

    let (quotient, remainder) = udivmod64(ua, ub);

    let quotient = if (a < 0) != (b < 0) {
        quotient.wrapping_neg()
    } else {
        quotient
    };
    let remainder = if a < 0 {
        remainder.wrapping_neg()
    } else {
        remainder
    };

    (quotient as i64, remainder as i64)
}

/// Wrapping 64-bit addition.
#[inline]
pub fn add64(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Wrapping 64-bit subtraction.
#[inline]
pub fn sub64(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Quotient of `a / b`; 0 when `b == 0`.
///
/// # Test Cases
/// - div64(86_400_000, 1000) = 86_400
/// - div64(-9, 4) = -2
/// - div64(5, 0) = 0
pub fn div64(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    divmod64(a, b).0
}

/// Remainder of `a / b` with the sign of `a`; 0 when `b == 0`.
///
/// Unlike [`divmod64`], which hands back the dividend on a zero divisor, this
/// helper reports 0 so callers computing offsets never see a spurious value.
pub fn mod64(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    divmod64(a, b).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_pair() {
        let w = WordPair::split(0x1234_5678_9ABC_DEF0);
        assert_eq!(w.lo, 0x9ABC_DEF0);
        assert_eq!(w.hi, 0x1234_5678);
        assert_eq!(w.join(), 0x1234_5678_9ABC_DEF0);
        assert!(WordPair::split(u32::MAX as u64).fits_u32());
    }

    #[test]
    fn test_multiply64() {
        assert_eq!(multiply64(3, 4), 12);
        assert_eq!(multiply64(-3, 4), -12);
        assert_eq!(multiply64(-3, -4), 12);
        assert_eq!(multiply64(0x1_0000_0000, 0x1_0000_0000), 0);
        assert_eq!(multiply64(i64::MAX, 2), -2);
        assert_eq!(multiply64(i64::MIN, -1), i64::MIN);
        assert_eq!(
            multiply64(0x1234_5678_9ABC, 0xDEF0_1234),
            0x1234_5678_9ABCi64.wrapping_mul(0xDEF0_1234)
        );
    }

    #[test]
    fn test_shift_right_logical64() {
        assert_eq!(shift_right_logical64(0x8000_0000_0000_0000, 63), 1);
        assert_eq!(shift_right_logical64(0xF000_0000_0000_000F, 4), 0x0F00_0000_0000_0000);
        assert_eq!(shift_right_logical64(0x0000_0001_0000_0000, 1), 0x8000_0000);
        assert_eq!(shift_right_logical64(u64::MAX, 32), 0xFFFF_FFFF);
        assert_eq!(shift_right_logical64(u64::MAX, 0), u64::MAX);
        assert_eq!(shift_right_logical64(u64::MAX, 64), 0);
        assert_eq!(shift_right_logical64(u64::MAX, 200), 0);
    }

    #[test]
    fn test_divmod64_fast_paths() {
        assert_eq!(divmod64(7, 0), (0, 7));
        assert_eq!(divmod64(-7, 0), (0, -7));
        assert_eq!(divmod64(7, 1), (7, 0));
        assert_eq!(divmod64(7, -1), (-7, 0));
        assert_eq!(divmod64(i64::MIN, -1), (i64::MIN, 0));
        assert_eq!(divmod64(3, 10), (0, 3));
        assert_eq!(divmod64(-3, 10), (0, -3));
        assert_eq!(divmod64(100, 7), (14, 2));
    }

    #[test]
    fn test_divmod64_signs() {
        assert_eq!(divmod64(7, 2), (3, 1));
        assert_eq!(divmod64(-7, 2), (-3, -1));
        assert_eq!(divmod64(7, -2), (-3, 1));
        assert_eq!(divmod64(-7, -2), (3, -1));
    }

    #[test]
    fn test_divmod64_long_division() {
        let a: i64 = 0x7FFF_FFFF_FFFF_FFFF;
        let b: i64 = 0x1_0000_0001;
        assert_eq!(divmod64(a, b), (a / b, a % b));

        let a: i64 = -1_700_000_000_000_123;
        let b: i64 = 86_400_000;
        assert_eq!(divmod64(a, b), (a / b, a % b));

        assert_eq!(divmod64(i64::MIN, 3), (i64::MIN / 3, i64::MIN % 3));
        assert_eq!(divmod64(i64::MIN, i64::MAX), (-1, -1));
    }

    #[test]
    fn test_udivmod64() {
        assert_eq!(udivmod64(u64::MAX, 1), (u64::MAX, 0));
        assert_eq!(udivmod64(u64::MAX, 10), (u64::MAX / 10, u64::MAX % 10));
        assert_eq!(udivmod64(u64::MAX, u64::MAX), (1, 0));
        assert_eq!(udivmod64(5, 0), (0, 5));
    }

    #[test]
    fn test_div64_mod64() {
        assert_eq!(div64(86_400_000, 1000), 86_400);
        assert_eq!(div64(-9, 4), -2);
        assert_eq!(div64(5, 0), 0);
        assert_eq!(mod64(-9, 4), -1);
        assert_eq!(mod64(9, -4), 1);
        assert_eq!(mod64(5, 0), 0);
    }

    #[test]
    fn test_add_sub64() {
        assert_eq!(add64(i64::MAX, 1), i64::MIN);
        assert_eq!(sub64(i64::MIN, 1), i64::MAX);
        assert_eq!(add64(40, 2), 42);
    }
}
