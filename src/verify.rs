//! Wide-integer self check
//!
//! Samples random operands and compares the hand-built intrinsics with native
//! 64-bit arithmetic. Operands are drawn from several shapes because uniform
//! 64-bit values almost never hit the 32-bit fast paths or the edge values.

use numcore_stdlib::{divmod64, multiply64, shift_right_logical64};
use serde::Serialize;

use crate::runtime::{EntropySource, SecureRandom};

const EDGES: [i64; 7] = [0, 1, -1, 2, -2, i64::MIN, i64::MAX];

/// One operand pair where an intrinsic disagreed with native arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub operation: &'static str,
    pub a: i64,
    pub b: i64,
    pub expected: (i64, i64),
    pub actual: (i64, i64),
}

/// Outcome of a [`verify_wide`] run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VerifyReport {
    pub samples: u64,
    pub checks: u64,
    pub failures: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    fn check(&mut self, operation: &'static str, a: i64, b: i64, expected: (i64, i64), actual: (i64, i64)) {
        self.checks += 1;
        if expected != actual {
            tracing::warn!(operation, a, b, ?expected, ?actual, "Intrinsic mismatch");
            self.failures.push(Mismatch {
                operation,
                a,
                b,
                expected,
                actual,
            });
        }
    }
}

fn operand<S: EntropySource>(rng: &SecureRandom<S>) -> i64 {
    match rng.random_range(0, 4) {
        0 => rng.random_i64(),
        1 => rng.random_i32() as i64,
        2 => rng.random_range64(-1000, 1000),
        _ => EDGES[rng.random_range(0, EDGES.len() as i32) as usize],
    }
}

/// Check multiply, logical shift and signed division on `samples` operand pairs.
pub fn verify_wide<S: EntropySource>(rng: &SecureRandom<S>, samples: u64) -> VerifyReport {
    let mut report = VerifyReport {
        samples,
        ..Default::default()
    };

    for _ in 0..samples {
        let a = operand(rng);
        let b = operand(rng);

        report.check("multiply64", a, b, (a.wrapping_mul(b), 0), (multiply64(a, b), 0));

        let shift = rng.random_range(0, 80) as u32;
        let native = if shift >= 64 { 0 } else { (a as u64) >> shift };
        report.check(
            "shift_right_logical64",
            a,
            shift as i64,
            (native as i64, 0),
            (shift_right_logical64(a as u64, shift) as i64, 0),
        );

        let expected = if b == 0 {
            (0, a)
        } else {
            (a.wrapping_div(b), a.wrapping_rem(b))
        };
        let (q, r) = divmod64(a, b);
        report.check("divmod64", a, b, expected, (q, r));

        if b != 0 {
            let rebuilt = q.wrapping_mul(b).wrapping_add(r);
            report.check("divmod64_identity", a, b, (a, 0), (rebuilt, 0));
            let sign_ok = r == 0 || (r < 0) == (a < 0);
            report.check("divmod64_sign", a, b, (1, 0), (sign_ok as i64, 0));
        }
    }

    tracing::info!(
        samples = report.samples,
        checks = report.checks,
        failures = report.failures.len(),
        "Wide-integer verification finished"
    );
    report
}
