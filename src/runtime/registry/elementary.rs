//! Elementary function, bit utility and constant registrations
//!
//! Most entries are thin adapters from a stdlib function pointer to the
//! register convention, so they are declared as tables.

use std::sync::Arc;

use numcore_stdlib as stdlib;

use super::{
    bool_reg, f32_reg, fn_ids, i32_reg, reg_f32, reg_i32, ArgKind, FnCategory, FnSignature,
    FunctionRegistry,
};

use ArgKind::{Bool, F32, I32, U32};

type UnaryF32 = (u32, &'static str, &'static str, FnCategory, fn(f32) -> f32);
type BinaryF32 = (u32, &'static str, &'static str, FnCategory, fn(f32, f32) -> f32);

const UNARY_F32: &[UnaryF32] = &[
    (fn_ids::FABS, "fabs", "Absolute value of a float.", FnCategory::Arithmetic, stdlib::fabs),
    (fn_ids::FSIGN, "fsign", "-1, 0 or 1 by sign of a float.", FnCategory::Arithmetic, stdlib::fsign),
    (fn_ids::SQRT, "sqrt", "Square root; 0 for x <= 0.", FnCategory::Arithmetic, stdlib::sqrt),
    (fn_ids::INV_SQRT, "inv_sqrt", "Approximate 1/sqrt(x) for x > 0.", FnCategory::Arithmetic, stdlib::inv_sqrt),
    (fn_ids::FLOOR, "floor", "Round toward negative infinity.", FnCategory::Rounding, stdlib::floor),
    (fn_ids::CEIL, "ceil", "Round toward positive infinity.", FnCategory::Rounding, stdlib::ceil),
    (fn_ids::TRUNC, "trunc", "Round toward zero.", FnCategory::Rounding, stdlib::trunc),
    (fn_ids::ROUND, "round", "Round half away from zero.", FnCategory::Rounding, stdlib::round),
    (fn_ids::SIN, "sin", "Sine of x radians.", FnCategory::Trig, stdlib::sin),
    (fn_ids::COS, "cos", "Cosine of x radians.", FnCategory::Trig, stdlib::cos),
    (fn_ids::TAN, "tan", "Tangent of x radians; 0 near a pole.", FnCategory::Trig, stdlib::tan),
    (fn_ids::ATAN, "atan", "Arctangent in (-pi/2, pi/2).", FnCategory::Trig, stdlib::atan),
    (fn_ids::ASIN, "asin", "Arcsine; 0 outside [-1, 1].", FnCategory::Trig, stdlib::asin),
    (fn_ids::COSH, "cosh", "Hyperbolic cosine.", FnCategory::Trig, stdlib::cosh),
    (fn_ids::EXP, "exp", "e^x; 0 below -10, float max above 88.", FnCategory::ExpLog, stdlib::exp),
    (fn_ids::EXP2, "exp2", "2^x.", FnCategory::ExpLog, stdlib::exp2),
    (fn_ids::LN, "ln", "Natural logarithm; -float max for x <= 0.", FnCategory::ExpLog, stdlib::ln),
    (fn_ids::LOG2, "log2", "Base-2 logarithm.", FnCategory::ExpLog, stdlib::log2),
    (fn_ids::LOG10, "log10", "Base-10 logarithm.", FnCategory::ExpLog, stdlib::log10),
    (fn_ids::DEG_TO_RAD, "deg_to_rad", "Degrees to radians.", FnCategory::Utility, stdlib::deg_to_rad),
    (fn_ids::RAD_TO_DEG, "rad_to_deg", "Radians to degrees.", FnCategory::Utility, stdlib::rad_to_deg),
];

const BINARY_F32: &[BinaryF32] = &[
    (fn_ids::FMIN, "fmin", "Smaller of two floats.", FnCategory::Arithmetic, stdlib::fmin),
    (fn_ids::FMAX, "fmax", "Larger of two floats.", FnCategory::Arithmetic, stdlib::fmax),
    (fn_ids::ATAN2, "atan2", "Angle of (x, y) in (-pi, pi]. Args: y, x.", FnCategory::Trig, stdlib::atan2),
    (fn_ids::POW, "pow", "x^y for real results; 0 for a negative base with fractional y.", FnCategory::ExpLog, stdlib::pow),
    (fn_ids::FMOD, "fmod", "Truncated remainder with the sign of x; 0 when y = 0.", FnCategory::Utility, stdlib::fmod),
    (fn_ids::STEP, "step", "0 when x < edge, else 1. Args: edge, x.", FnCategory::Utility, stdlib::step),
];

const CONSTANTS: &[(u32, &str, &str, f32)] = &[
    (fn_ids::PI, "pi", "Pi.", stdlib::PI),
    (fn_ids::E, "e", "Euler's number.", stdlib::E),
    (fn_ids::TAU, "tau", "2 * pi.", stdlib::TAU),
    (fn_ids::SQRT_2, "sqrt_2", "Square root of 2.", stdlib::SQRT_2),
    (fn_ids::INF, "inf", "Positive infinity.", stdlib::INF),
    (fn_ids::NEG_INF, "neg_inf", "Negative infinity.", stdlib::NEG_INF),
    (fn_ids::NAN, "nan", "Quiet NaN (0x7FC00000).", stdlib::NAN),
    (fn_ids::FLOAT_MAX, "float_max", "Largest finite f32.", stdlib::FLOAT_MAX),
    (fn_ids::LN_2, "ln_2", "Natural logarithm of 2.", stdlib::LN_2),
    (fn_ids::LN_10, "ln_10", "Natural logarithm of 10.", stdlib::LN_10),
];

pub(super) fn register_elementary(registry: &mut FunctionRegistry) {
    for &(id, name, description, category, f) in UNARY_F32 {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[F32], &[F32], category),
            Arc::new(move |args: &[u64]| Ok(vec![f32_reg(f(reg_f32(args[0])))])),
        );
    }

    for &(id, name, description, category, f) in BINARY_F32 {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[F32, F32], &[F32], category),
            Arc::new(move |args: &[u64]| {
                Ok(vec![f32_reg(f(reg_f32(args[0]), reg_f32(args[1])))])
            }),
        );
    }

    for &(id, name, description, value) in CONSTANTS {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[], &[F32], FnCategory::Constant),
            Arc::new(move |_: &[u64]| Ok(vec![f32_reg(value)])),
        );
    }

    register_ternary_f32(registry);
    register_integer(registry);
    register_bits(registry);
}

fn register_ternary_f32(registry: &mut FunctionRegistry) {
    registry.register_with_id(
        fn_ids::FCLAMP,
        FnSignature::new(
            "fclamp",
            "Clamp a float into [min, max]. Args: x, min, max.",
            &[F32, F32, F32],
            &[F32],
            FnCategory::Arithmetic,
        ),
        Arc::new(|args: &[u64]| {
            Ok(vec![f32_reg(stdlib::fclamp(
                reg_f32(args[0]),
                reg_f32(args[1]),
                reg_f32(args[2]),
            ))])
        }),
    );

    registry.register_with_id(
        fn_ids::LERP,
        FnSignature::new(
            "lerp",
            "Linear interpolation a + (b - a) * t. Args: a, b, t.",
            &[F32, F32, F32],
            &[F32],
            FnCategory::Utility,
        ),
        Arc::new(|args: &[u64]| {
            Ok(vec![f32_reg(stdlib::lerp(
                reg_f32(args[0]),
                reg_f32(args[1]),
                reg_f32(args[2]),
            ))])
        }),
    );
}

fn register_integer(registry: &mut FunctionRegistry) {
    let unary: [(u32, &str, &str, fn(i32) -> i32); 3] = [
        (fn_ids::ABS, "abs", "Absolute value; abs(i32::MIN) wraps.", stdlib::abs),
        (fn_ids::SIGN, "sign", "-1, 0 or 1 by sign.", stdlib::sign),
        (fn_ids::POW2, "pow2", "2^exp; 0 for exp < 0, i32::MAX for exp >= 31.", stdlib::pow2),
    ];
    for (id, name, description, f) in unary {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[I32], &[I32], FnCategory::Arithmetic),
            Arc::new(move |args: &[u64]| Ok(vec![i32_reg(f(reg_i32(args[0])))])),
        );
    }

    let binary: [(u32, &str, &str, fn(i32, i32) -> i32); 2] = [
        (fn_ids::MIN, "min", "Smaller of two integers.", stdlib::min),
        (fn_ids::MAX, "max", "Larger of two integers.", stdlib::max),
    ];
    for (id, name, description, f) in binary {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[I32, I32], &[I32], FnCategory::Arithmetic),
            Arc::new(move |args: &[u64]| {
                Ok(vec![i32_reg(f(reg_i32(args[0]), reg_i32(args[1])))])
            }),
        );
    }

    registry.register_with_id(
        fn_ids::CLAMP,
        FnSignature::new(
            "clamp",
            "Clamp an integer into [min, max]. Args: x, min, max.",
            &[I32, I32, I32],
            &[I32],
            FnCategory::Arithmetic,
        ),
        Arc::new(|args: &[u64]| {
            Ok(vec![i32_reg(stdlib::clamp(
                reg_i32(args[0]),
                reg_i32(args[1]),
                reg_i32(args[2]),
            ))])
        }),
    );

    let predicates: [(u32, &str, &str, fn(i32) -> bool); 3] = [
        (fn_ids::IS_EVEN, "is_even", "Low bit clear.", stdlib::is_even),
        (fn_ids::IS_ODD, "is_odd", "Low bit set.", stdlib::is_odd),
        (fn_ids::IS_POWER_OF_TWO, "is_power_of_two", "x > 0 and a single bit set.", stdlib::is_power_of_two),
    ];
    for (id, name, description, f) in predicates {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[I32], &[Bool], FnCategory::Arithmetic),
            Arc::new(move |args: &[u64]| Ok(vec![bool_reg(f(reg_i32(args[0])))])),
        );
    }
}

fn register_bits(registry: &mut FunctionRegistry) {
    registry.register_with_id(
        fn_ids::TO_BITS,
        FnSignature::new(
            "to_bits",
            "Raw IEEE-754 bit pattern of a float.",
            &[F32],
            &[U32],
            FnCategory::Bits,
        ),
        Arc::new(|args: &[u64]| Ok(vec![stdlib::to_bits(reg_f32(args[0])) as u64])),
    );

    registry.register_with_id(
        fn_ids::FROM_BITS,
        FnSignature::new(
            "from_bits",
            "Float with the given IEEE-754 bit pattern.",
            &[U32],
            &[F32],
            FnCategory::Bits,
        ),
        Arc::new(|args: &[u64]| Ok(vec![f32_reg(stdlib::from_bits(args[0] as u32))])),
    );

    let fields: [(u32, &str, &str, fn(f32) -> u32); 2] = [
        (fn_ids::EXPONENT_FIELD, "exponent_field", "Biased 8-bit exponent field.", stdlib::exponent_field),
        (fn_ids::MANTISSA_FIELD, "mantissa_field", "23-bit mantissa field.", stdlib::mantissa_field),
    ];
    for (id, name, description, f) in fields {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[F32], &[U32], FnCategory::Bits),
            Arc::new(move |args: &[u64]| Ok(vec![f(reg_f32(args[0])) as u64])),
        );
    }

    let predicates: [(u32, &str, &str, fn(f32) -> bool); 4] = [
        (fn_ids::IS_FINITE, "is_finite", "Exponent field is not 0xFF.", stdlib::is_finite),
        (fn_ids::IS_NAN, "is_nan", "Exponent 0xFF with a non-zero mantissa.", stdlib::is_nan),
        (fn_ids::IS_INFINITE, "is_infinite", "Exponent 0xFF with a zero mantissa.", stdlib::is_infinite),
        (fn_ids::SIGN_BIT, "sign_bit", "Sign bit set (true for -0.0).", stdlib::sign_bit),
    ];
    for (id, name, description, f) in predicates {
        registry.register_with_id(
            id,
            FnSignature::new(name, description, &[F32], &[Bool], FnCategory::Bits),
            Arc::new(move |args: &[u64]| Ok(vec![bool_reg(f(reg_f32(args[0])))])),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    fn call_f32(registry: &FunctionRegistry, name: &str, args: &[f32]) -> f32 {
        let regs: Vec<u64> = args.iter().map(|&x| f32_reg(x)).collect();
        reg_f32(registry.call_by_name(name, &regs).unwrap()[0])
    }

    #[test]
    fn test_float_functions() {
        let registry = FunctionRegistry::new();
        assert!((call_f32(&registry, "sqrt", &[9.0]) - 3.0).abs() < 0.01);
        assert_eq!(call_f32(&registry, "sqrt", &[-5.0]), 0.0);
        assert_eq!(call_f32(&registry, "round", &[-3.5]), -4.0);
        assert!((call_f32(&registry, "pow", &[2.0, 10.0]) - 1024.0).abs() <= 1.0);
        assert_eq!(call_f32(&registry, "fmod", &[5.0, 0.0]), 0.0);
        assert_eq!(call_f32(&registry, "lerp", &[0.0, 10.0, 0.5]), 5.0);
    }

    #[test]
    fn test_constants() {
        let registry = FunctionRegistry::new();
        assert_eq!(call_f32(&registry, "pi", &[]), numcore_stdlib::PI);
        assert_eq!(call_f32(&registry, "inf", &[]), f32::INFINITY);
        let nan = registry.call_by_name("nan", &[]).unwrap()[0];
        assert_eq!(nan, 0x7FC0_0000);
    }

    #[test]
    fn test_integer_and_bits() {
        let registry = FunctionRegistry::new();
        assert_eq!(
            registry.call_by_name("is_power_of_two", &[1024]).unwrap(),
            vec![1]
        );
        assert_eq!(
            registry.call_by_name("abs", &[i32_reg(-5)]).unwrap(),
            vec![5]
        );
        assert_eq!(
            registry.call_by_name("pow2", &[i32_reg(31)]).unwrap(),
            vec![i32::MAX as u64]
        );
        assert_eq!(
            registry.call_by_name("to_bits", &[f32_reg(1.0)]).unwrap(),
            vec![0x3F80_0000]
        );
        assert_eq!(
            registry.call_by_name("is_nan", &[0x7FC0_0000]).unwrap(),
            vec![1]
        );
    }
}
