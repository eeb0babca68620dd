//! Function Registry
//!
//! Every public numeric operation is registered here under a stable id and a
//! snake_case name so the surrounding runtime, and the CLI, can dispatch by
//! either.
//!
//! # Architecture
//!
//! ```text
//! CLI / runtime:   call "divmod64" ["-7", "2"]
//!                          |
//!                          v
//! Registry:        "divmod64" -> ID 3, args [I64, I64]
//!                          |
//!                          v
//! Dispatch:        registry.call(3, &[regs]) -> [quotient, remainder]
//! ```
//!
//! Values travel as raw `u64` registers: an `f32` as its bit pattern in the low
//! 32 bits, signed integers sign-extended, booleans as 0 or 1.
//!
//! # Categories
//!
//! | Category | ID Range | Description |
//! |----------|----------|-------------|
//! | Wide | 1-19 | 64-bit multiply, shift, division |
//! | Bits | 20-39 | IEEE-754 reinterpretation and classification |
//! | Arithmetic | 40-59 | abs/min/max/clamp/sign, parity, sqrt |
//! | Rounding | 60-69 | floor, ceil, trunc, round |
//! | Trig | 70-89 | sin, cos, tan and inverses |
//! | ExpLog | 90-109 | exp, ln, log, pow |
//! | Utility | 110-129 | fmod, lerp, step, angle conversion |
//! | Constant | 130-139 | PI, E, INF, ... |
//! | Random | 140-159 | secure random draws |

mod elementary;
mod random;
mod wide;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use super::entropy::{EntropySource, SystemEntropy};
use super::random::SecureRandom;

// =============================================================================
// Error Types
// =============================================================================

/// Error type for registry dispatch.
///
/// The numeric functions themselves are total; only lookup and argument
/// decoding can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallError {
    #[error("Function {0} not found")]
    NotFound(u32),

    #[error("Unknown function: {0}")]
    UnknownName(String),

    #[error("Expected {expected} arguments, got {got}")]
    InvalidArgCount { expected: usize, got: usize },

    #[error("Invalid {kind} argument: {text:?}")]
    InvalidArgument { kind: ArgKind, text: String },
}

/// Result type for registry operations.
pub type CallResult<T> = Result<T, CallError>;

// =============================================================================
// Argument Kinds and Values
// =============================================================================

/// How a register is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    F32,
    I32,
    I64,
    U32,
    U64,
    Bool,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::F32 => write!(f, "f32"),
            ArgKind::I32 => write!(f, "i32"),
            ArgKind::I64 => write!(f, "i64"),
            ArgKind::U32 => write!(f, "u32"),
            ArgKind::U64 => write!(f, "u64"),
            ArgKind::Bool => write!(f, "bool"),
        }
    }
}

/// A decoded return register.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Float(f32),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

impl Value {
    /// Text form with `precision` digits after the decimal point for floats.
    ///
    /// Non-finite floats print as `inf`, `-inf` and `NaN`.
    pub fn render(&self, precision: usize) -> String {
        match self {
            Value::Float(x) if x.is_finite() => format!("{:.*}", precision, x),
            Value::Float(x) => x.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Bool(b) => b.to_string(),
        }
    }
}

fn parse_integer(text: &str) -> Option<i128> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(&hex.replace('_', ""), 16).ok()?,
        None => digits.replace('_', "").parse::<i128>().ok()?,
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Encode CLI text as a register of the given kind.
///
/// Integers accept decimal, a leading `-` and `0x` hex. Signed kinds also
/// accept the full unsigned range of their width, reinterpreted, so
/// `0xFFFFFFFFFFFFFFFF` is `-1` as an `i64`.
pub fn encode_arg(kind: ArgKind, text: &str) -> CallResult<u64> {
    let invalid = || CallError::InvalidArgument {
        kind,
        text: text.to_string(),
    };
    let text = text.trim();

    match kind {
        ArgKind::F32 => text
            .parse::<f32>()
            .map(|x| x.to_bits() as u64)
            .map_err(|_| invalid()),
        ArgKind::Bool => match text {
            "true" | "1" => Ok(1),
            "false" | "0" => Ok(0),
            _ => Err(invalid()),
        },
        ArgKind::I32 => {
            let v = parse_integer(text).ok_or_else(invalid)?;
            if v < i32::MIN as i128 || v > u32::MAX as i128 {
                return Err(invalid());
            }
            Ok(v as i32 as i64 as u64)
        }
        ArgKind::I64 => {
            let v = parse_integer(text).ok_or_else(invalid)?;
            if v < i64::MIN as i128 || v > u64::MAX as i128 {
                return Err(invalid());
            }
            Ok(v as i64 as u64)
        }
        ArgKind::U32 => {
            let v = parse_integer(text).ok_or_else(invalid)?;
            if !(0..=u32::MAX as i128).contains(&v) {
                return Err(invalid());
            }
            Ok(v as u64)
        }
        ArgKind::U64 => {
            let v = parse_integer(text).ok_or_else(invalid)?;
            if !(0..=u64::MAX as i128).contains(&v) {
                return Err(invalid());
            }
            Ok(v as u64)
        }
    }
}

/// Decode a return register.
pub fn decode_ret(kind: ArgKind, reg: u64) -> Value {
    match kind {
        ArgKind::F32 => Value::Float(f32::from_bits(reg as u32)),
        ArgKind::I32 => Value::Int(reg as u32 as i32 as i64),
        ArgKind::I64 => Value::Int(reg as i64),
        ArgKind::U32 => Value::Uint(reg as u32 as u64),
        ArgKind::U64 => Value::Uint(reg),
        ArgKind::Bool => Value::Bool(reg != 0),
    }
}

// Register packing used by the registration modules.

#[inline]
pub(crate) fn f32_reg(x: f32) -> u64 {
    x.to_bits() as u64
}

#[inline]
pub(crate) fn reg_f32(reg: u64) -> f32 {
    f32::from_bits(reg as u32)
}

#[inline]
pub(crate) fn i32_reg(x: i32) -> u64 {
    x as i64 as u64
}

#[inline]
pub(crate) fn reg_i32(reg: u64) -> i32 {
    reg as u32 as i32
}

#[inline]
pub(crate) fn bool_reg(b: bool) -> u64 {
    b as u64
}

// =============================================================================
// Function Category
// =============================================================================

/// Category of a registered function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FnCategory {
    Wide,
    Bits,
    Arithmetic,
    Rounding,
    Trig,
    ExpLog,
    Utility,
    Constant,
    Random,
}

impl FnCategory {
    pub const ALL: [FnCategory; 9] = [
        FnCategory::Wide,
        FnCategory::Bits,
        FnCategory::Arithmetic,
        FnCategory::Rounding,
        FnCategory::Trig,
        FnCategory::ExpLog,
        FnCategory::Utility,
        FnCategory::Constant,
        FnCategory::Random,
    ];
}

impl fmt::Display for FnCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FnCategory::Wide => write!(f, "wide"),
            FnCategory::Bits => write!(f, "bits"),
            FnCategory::Arithmetic => write!(f, "arithmetic"),
            FnCategory::Rounding => write!(f, "rounding"),
            FnCategory::Trig => write!(f, "trig"),
            FnCategory::ExpLog => write!(f, "explog"),
            FnCategory::Utility => write!(f, "utility"),
            FnCategory::Constant => write!(f, "constant"),
            FnCategory::Random => write!(f, "random"),
        }
    }
}

impl std::str::FromStr for FnCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FnCategory::ALL
            .into_iter()
            .find(|c| c.to_string() == s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

// =============================================================================
// Function Types
// =============================================================================

/// Function body: argument registers in, result registers out.
///
/// Results are a `Vec` because `divmod64` returns two registers.
pub type MathFn = Arc<dyn Fn(&[u64]) -> CallResult<Vec<u64>> + Send + Sync>;

/// Function signature metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FnSignature {
    pub name: String,
    pub description: String,
    pub args: Vec<ArgKind>,
    pub returns: Vec<ArgKind>,
    pub category: FnCategory,
}

impl FnSignature {
    pub fn new(
        name: &str,
        description: &str,
        args: &[ArgKind],
        returns: &[ArgKind],
        category: FnCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            args: args.to_vec(),
            returns: returns.to_vec(),
            category,
        }
    }
}

/// A registered function.
///
/// The callable is only reachable through [`FunctionRegistry::call`] and
/// [`FunctionRegistry::call_by_name`], which check the argument count first.
pub struct FnEntry {
    pub id: u32,
    pub signature: FnSignature,
    func: MathFn,
}

impl fmt::Debug for FnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEntry")
            .field("id", &self.id)
            .field("signature", &self.signature)
            .finish()
    }
}

// =============================================================================
// Function Registry
// =============================================================================

pub struct FunctionRegistry {
    by_id: HashMap<u32, FnEntry>,
    by_name: HashMap<String, u32>,
}

impl FunctionRegistry {
    /// Registry with every built-in, random functions backed by OS entropy.
    pub fn new() -> Self {
        Self::with_random(Arc::new(SecureRandom::<SystemEntropy>::system()))
    }

    /// Registry with every built-in, random functions backed by `rng`.
    pub fn with_random<S: EntropySource + 'static>(rng: Arc<SecureRandom<S>>) -> Self {
        let mut registry = Self {
            by_id: HashMap::new(),
            by_name: HashMap::new(),
        };
        wide::register_wide(&mut registry);
        elementary::register_elementary(&mut registry);
        random::register_random(&mut registry, rng);
        tracing::debug!(functions = registry.len(), "Function registry built");
        registry
    }

    /// Register a function under a fixed id, replacing any previous entry.
    pub fn register_with_id(&mut self, id: u32, signature: FnSignature, func: MathFn) {
        if let Some(old) = self.by_id.remove(&id) {
            self.by_name.remove(&old.signature.name);
        }
        self.by_name.insert(signature.name.clone(), id);
        self.by_id.insert(
            id,
            FnEntry {
                id,
                signature,
                func,
            },
        );
    }

    pub fn get(&self, id: u32) -> Option<&FnEntry> {
        self.by_id.get(&id)
    }

    pub fn get_id(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&FnEntry> {
        self.by_name.get(name).and_then(|id| self.by_id.get(id))
    }

    /// Call a function by id.
    pub fn call(&self, id: u32, args: &[u64]) -> CallResult<Vec<u64>> {
        let entry = self.get(id).ok_or(CallError::NotFound(id))?;
        Self::dispatch(entry, args)
    }

    /// Call a function by name.
    pub fn call_by_name(&self, name: &str, args: &[u64]) -> CallResult<Vec<u64>> {
        let entry = self
            .get_by_name(name)
            .ok_or_else(|| CallError::UnknownName(name.to_string()))?;
        Self::dispatch(entry, args)
    }

    fn dispatch(entry: &FnEntry, args: &[u64]) -> CallResult<Vec<u64>> {
        let expected = entry.signature.args.len();
        if args.len() != expected {
            return Err(CallError::InvalidArgCount {
                expected,
                got: args.len(),
            });
        }
        tracing::trace!(name = %entry.signature.name, ?args, "dispatch");
        (entry.func)(args)
    }

    /// All entries, ordered by id.
    pub fn list(&self) -> Vec<&FnEntry> {
        let mut entries: Vec<_> = self.by_id.values().collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    /// Entries in one category, ordered by id.
    pub fn list_by_category(&self, category: FnCategory) -> Vec<&FnEntry> {
        let mut entries: Vec<_> = self
            .by_id
            .values()
            .filter(|e| e.signature.category == category)
            .collect();
        entries.sort_by_key(|e| e.id);
        entries
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Function IDs
// =============================================================================

/// Predefined function IDs (stable across releases)
pub mod fn_ids {
    // Wide (1-19)
    pub const MULTIPLY64: u32 = 1;
    pub const SHIFT_RIGHT_LOGICAL64: u32 = 2;
    pub const DIVMOD64: u32 = 3;
    pub const UDIVMOD64: u32 = 4;
    pub const ADD64: u32 = 5;
    pub const SUB64: u32 = 6;
    pub const DIV64: u32 = 7;
    pub const MOD64: u32 = 8;

    // Bits (20-39)
    pub const TO_BITS: u32 = 20;
    pub const FROM_BITS: u32 = 21;
    pub const IS_FINITE: u32 = 22;
    pub const IS_NAN: u32 = 23;
    pub const IS_INFINITE: u32 = 24;
    pub const EXPONENT_FIELD: u32 = 25;
    pub const MANTISSA_FIELD: u32 = 26;
    pub const SIGN_BIT: u32 = 27;

    // Arithmetic (40-59)
    pub const ABS: u32 = 40;
    pub const MIN: u32 = 41;
    pub const MAX: u32 = 42;
    pub const CLAMP: u32 = 43;
    pub const SIGN: u32 = 44;
    pub const IS_EVEN: u32 = 45;
    pub const IS_ODD: u32 = 46;
    pub const IS_POWER_OF_TWO: u32 = 47;
    pub const POW2: u32 = 48;
    pub const FABS: u32 = 49;
    pub const FMIN: u32 = 50;
    pub const FMAX: u32 = 51;
    pub const FCLAMP: u32 = 52;
    pub const FSIGN: u32 = 53;
    pub const SQRT: u32 = 54;
    pub const INV_SQRT: u32 = 55;

    // Rounding (60-69)
    pub const FLOOR: u32 = 60;
    pub const CEIL: u32 = 61;
    pub const TRUNC: u32 = 62;
    pub const ROUND: u32 = 63;

    // Trig (70-89)
    pub const SIN: u32 = 70;
    pub const COS: u32 = 71;
    pub const TAN: u32 = 72;
    pub const ATAN: u32 = 73;
    pub const ATAN2: u32 = 74;
    pub const ASIN: u32 = 75;
    pub const COSH: u32 = 76;

    // ExpLog (90-109)
    pub const EXP: u32 = 90;
    pub const EXP2: u32 = 91;
    pub const LN: u32 = 92;
    pub const LOG2: u32 = 93;
    pub const LOG10: u32 = 94;
    pub const POW: u32 = 95;

    // Utility (110-129)
    pub const FMOD: u32 = 110;
    pub const LERP: u32 = 111;
    pub const STEP: u32 = 112;
    pub const DEG_TO_RAD: u32 = 113;
    pub const RAD_TO_DEG: u32 = 114;

    // Constant (130-139)
    pub const PI: u32 = 130;
    pub const E: u32 = 131;
    pub const TAU: u32 = 132;
    pub const SQRT_2: u32 = 133;
    pub const INF: u32 = 134;
    pub const NEG_INF: u32 = 135;
    pub const NAN: u32 = 136;
    pub const FLOAT_MAX: u32 = 137;
    pub const LN_2: u32 = 138;
    pub const LN_10: u32 = 139;

    // Random (140-159)
    pub const RANDOM: u32 = 140;
    pub const RANDOM64: u32 = 141;
    pub const RANDOM_FLOAT: u32 = 142;
    pub const RANDOM_RANGE: u32 = 143;
    pub const RANDOM_RANGE64: u32 = 144;
    pub const RANDOM_BOOL: u32 = 145;
    pub const RANDOM_U32: u32 = 146;
    pub const RANDOM_U64: u32 = 147;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_integers() {
        assert_eq!(encode_arg(ArgKind::I64, "-7").unwrap(), (-7i64) as u64);
        assert_eq!(encode_arg(ArgKind::I64, "0xFFFFFFFFFFFFFFFF").unwrap(), u64::MAX);
        assert_eq!(encode_arg(ArgKind::I32, "-1").unwrap(), u64::MAX);
        assert_eq!(encode_arg(ArgKind::U32, "0x10").unwrap(), 16);
        assert_eq!(encode_arg(ArgKind::U64, "1_000").unwrap(), 1000);
        assert!(encode_arg(ArgKind::U32, "-1").is_err());
        assert!(encode_arg(ArgKind::I32, "0x1_0000_0000").is_err());
        assert!(encode_arg(ArgKind::I64, "twelve").is_err());
    }

    #[test]
    fn test_encode_float_and_bool() {
        assert_eq!(encode_arg(ArgKind::F32, "1.5").unwrap(), 1.5f32.to_bits() as u64);
        assert_eq!(encode_arg(ArgKind::F32, "inf").unwrap(), f32::INFINITY.to_bits() as u64);
        assert_eq!(encode_arg(ArgKind::Bool, "true").unwrap(), 1);
        assert!(matches!(
            encode_arg(ArgKind::Bool, "yes"),
            Err(CallError::InvalidArgument { kind: ArgKind::Bool, .. })
        ));
    }

    #[test]
    fn test_decode_ret() {
        assert_eq!(decode_ret(ArgKind::I32, i32_reg(-5)), Value::Int(-5));
        assert_eq!(decode_ret(ArgKind::F32, f32_reg(2.5)), Value::Float(2.5));
        assert_eq!(decode_ret(ArgKind::U32, u64::MAX), Value::Uint(u32::MAX as u64));
        assert_eq!(decode_ret(ArgKind::Bool, 1), Value::Bool(true));
    }

    #[test]
    fn test_render() {
        assert_eq!(Value::Float(2.0).render(3), "2.000");
        assert_eq!(Value::Float(f32::NEG_INFINITY).render(3), "-inf");
        assert_eq!(Value::Int(-4).render(3), "-4");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("trig".parse::<FnCategory>().unwrap(), FnCategory::Trig);
        assert_eq!("ExpLog".parse::<FnCategory>().unwrap(), FnCategory::ExpLog);
        assert!("crypto".parse::<FnCategory>().is_err());
    }

    #[test]
    fn test_registry_lookup_and_errors() {
        let registry = FunctionRegistry::new();
        assert_eq!(registry.get_id("sqrt"), Some(fn_ids::SQRT));
        assert!(registry.get(9999).is_none());
        assert_eq!(registry.call(9999, &[]), Err(CallError::NotFound(9999)));
        assert_eq!(
            registry.call_by_name("nope", &[]),
            Err(CallError::UnknownName("nope".to_string()))
        );
        assert_eq!(
            registry.call(fn_ids::SQRT, &[]),
            Err(CallError::InvalidArgCount {
                expected: 1,
                got: 0
            })
        );
    }

    #[test]
    fn test_ids_match_categories() {
        let registry = FunctionRegistry::new();
        for entry in registry.list() {
            let range = match entry.signature.category {
                FnCategory::Wide => 1..20,
                FnCategory::Bits => 20..40,
                FnCategory::Arithmetic => 40..60,
                FnCategory::Rounding => 60..70,
                FnCategory::Trig => 70..90,
                FnCategory::ExpLog => 90..110,
                FnCategory::Utility => 110..130,
                FnCategory::Constant => 130..140,
                FnCategory::Random => 140..160,
            };
            assert!(range.contains(&entry.id), "{} has id {}", entry.signature.name, entry.id);
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = FunctionRegistry::new();
        let before = registry.len();
        registry.register_with_id(
            fn_ids::PI,
            FnSignature::new("half_pi", "PI / 2", &[], &[ArgKind::F32], FnCategory::Constant),
            Arc::new(|_: &[u64]| Ok(vec![f32_reg(numcore_stdlib::PI / 2.0)])),
        );
        assert_eq!(registry.len(), before);
        assert!(registry.get_by_name("pi").is_none());
        assert_eq!(registry.get_id("half_pi"), Some(fn_ids::PI));
    }
}
