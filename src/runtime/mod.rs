//! Runtime module
//!
//! Contains the secure random source, its entropy providers, and the function
//! registry that exposes every numeric operation by id and name.
//!
//! # Random
//!
//! [`SecureRandom`] turns bytes from an [`EntropySource`] into typed values:
//! - [`SystemEntropy`]: OS CSPRNG through `ring`
//! - [`SeededEntropy`]: reproducible ChaCha20 stream
//!
//! # Registry
//!
//! [`FunctionRegistry`] maps stable ids (see [`fn_ids`]) and snake_case names to
//! register-convention adapters over the stdlib functions.

pub mod entropy;
pub mod random;
pub mod registry;

pub use entropy::{entropy_from_config, EntropyError, EntropySource, SeededEntropy, SystemEntropy};
pub use random::{
    random, random64, random_bool, random_choice, random_float, random_range, random_range64,
    system_random, SecureRandom,
};
pub use registry::{
    decode_ret, encode_arg, fn_ids, ArgKind, CallError, CallResult, FnCategory, FnEntry,
    FnSignature, FunctionRegistry, MathFn, Value,
};
