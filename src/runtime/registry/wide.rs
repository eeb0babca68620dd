//! Wide-integer registrations

use std::sync::Arc;

use numcore_stdlib::wide;

use super::{fn_ids, ArgKind, FnCategory, FnSignature, FunctionRegistry};

const I64_PAIR: &[ArgKind] = &[ArgKind::I64, ArgKind::I64];

pub(super) fn register_wide(registry: &mut FunctionRegistry) {
    register_binary_i64(
        registry,
        fn_ids::MULTIPLY64,
        "multiply64",
        "Multiply two 64-bit integers, wrapping on overflow. Args: a, b.",
        wide::multiply64,
    );

    // value, shift -> value >> shift (0 when shift >= 64)
    registry.register_with_id(
        fn_ids::SHIFT_RIGHT_LOGICAL64,
        FnSignature::new(
            "shift_right_logical64",
            "Logical right shift; shifts of 64 or more give 0. Args: value, shift.",
            &[ArgKind::U64, ArgKind::U32],
            &[ArgKind::U64],
            FnCategory::Wide,
        ),
        Arc::new(|args: &[u64]| {
            Ok(vec![wide::shift_right_logical64(args[0], args[1] as u32)])
        }),
    );

    // a, b -> quotient, remainder
    registry.register_with_id(
        fn_ids::DIVMOD64,
        FnSignature::new(
            "divmod64",
            "Signed division truncating toward zero; b = 0 gives (0, a). Args: a, b. Returns quotient, remainder.",
            I64_PAIR,
            I64_PAIR,
            FnCategory::Wide,
        ),
        Arc::new(|args: &[u64]| {
            let (q, r) = wide::divmod64(args[0] as i64, args[1] as i64);
            Ok(vec![q as u64, r as u64])
        }),
    );

    registry.register_with_id(
        fn_ids::UDIVMOD64,
        FnSignature::new(
            "udivmod64",
            "Unsigned binary long division; b = 0 gives (0, a). Args: a, b. Returns quotient, remainder.",
            &[ArgKind::U64, ArgKind::U64],
            &[ArgKind::U64, ArgKind::U64],
            FnCategory::Wide,
        ),
        Arc::new(|args: &[u64]| {
            let (q, r) = wide::udivmod64(args[0], args[1]);
            Ok(vec![q, r])
        }),
    );

    register_binary_i64(
        registry,
        fn_ids::ADD64,
        "add64",
        "Wrapping 64-bit addition. Args: a, b.",
        wide::add64,
    );
    register_binary_i64(
        registry,
        fn_ids::SUB64,
        "sub64",
        "Wrapping 64-bit subtraction. Args: a, b.",
        wide::sub64,
    );
    register_binary_i64(
        registry,
        fn_ids::DIV64,
        "div64",
        "Signed 64-bit quotient; 0 when b = 0. Args: a, b.",
        wide::div64,
    );
    register_binary_i64(
        registry,
        fn_ids::MOD64,
        "mod64",
        "Signed 64-bit remainder; 0 when b = 0. Args: a, b.",
        wide::mod64,
    );
}

fn register_binary_i64(
    registry: &mut FunctionRegistry,
    id: u32,
    name: &str,
    description: &str,
    f: fn(i64, i64) -> i64,
) {
    registry.register_with_id(
        id,
        FnSignature::new(name, description, I64_PAIR, &[ArgKind::I64], FnCategory::Wide),
        Arc::new(move |args: &[u64]| Ok(vec![f(args[0] as i64, args[1] as i64) as u64])),
    );
}
