//! Random source registrations
//!
//! Every entry shares one generator. Draws go through the total API, so an
//! entropy failure produces the zero-fill values rather than a dispatch error.

use std::sync::Arc;

use super::{bool_reg, f32_reg, fn_ids, i32_reg, reg_i32, ArgKind, FnCategory, FnSignature, FunctionRegistry};
use crate::runtime::entropy::EntropySource;
use crate::runtime::random::SecureRandom;

pub(super) fn register_random<S: EntropySource + 'static>(
    registry: &mut FunctionRegistry,
    rng: Arc<SecureRandom<S>>,
) {
    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM,
        FnSignature::new(
            "random",
            "Random 32-bit signed integer (any value).",
            &[],
            &[ArgKind::I32],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![i32_reg(r.random_i32())])),
    );

    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM64,
        FnSignature::new(
            "random64",
            "Random 64-bit signed integer (any value).",
            &[],
            &[ArgKind::I64],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![r.random_i64() as u64])),
    );

    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM_FLOAT,
        FnSignature::new(
            "random_float",
            "Uniform float in [0, 1) on a 2^-24 grid.",
            &[],
            &[ArgKind::F32],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![f32_reg(r.random_float())])),
    );

    // start, end -> value in [start, end), or start when start >= end
    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM_RANGE,
        FnSignature::new(
            "random_range",
            "Integer in [start, end); start when start >= end. Args: start, end.",
            &[ArgKind::I32, ArgKind::I32],
            &[ArgKind::I32],
            FnCategory::Random,
        ),
        Arc::new(move |args: &[u64]| {
            Ok(vec![i32_reg(
                r.random_range(reg_i32(args[0]), reg_i32(args[1])),
            )])
        }),
    );

    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM_RANGE64,
        FnSignature::new(
            "random_range64",
            "64-bit integer in [start, end); start when start >= end. Args: start, end.",
            &[ArgKind::I64, ArgKind::I64],
            &[ArgKind::I64],
            FnCategory::Random,
        ),
        Arc::new(move |args: &[u64]| {
            Ok(vec![r.random_range64(args[0] as i64, args[1] as i64) as u64])
        }),
    );

    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM_BOOL,
        FnSignature::new(
            "random_bool",
            "Low bit of one random byte.",
            &[],
            &[ArgKind::Bool],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![bool_reg(r.random_bool())])),
    );

    let r = Arc::clone(&rng);
    registry.register_with_id(
        fn_ids::RANDOM_U32,
        FnSignature::new(
            "random_u32",
            "Random 32-bit unsigned integer.",
            &[],
            &[ArgKind::U32],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![r.random_u32() as u64])),
    );

    registry.register_with_id(
        fn_ids::RANDOM_U64,
        FnSignature::new(
            "random_u64",
            "Random 64-bit unsigned integer.",
            &[],
            &[ArgKind::U64],
            FnCategory::Random,
        ),
        Arc::new(move |_: &[u64]| Ok(vec![rng.random_u64()])),
    );
}
