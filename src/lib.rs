//! Numcore - Freestanding Numeric Runtime Core
//!
//! The numeric substrate a runtime needs when it does not link a C runtime or a
//! math library, plus the pieces that make it usable from the rest of a
//! program.
//!
//! # Features
//!
//! - **Wide-integer intrinsics**: 64-bit multiply, logical shift and signed
//!   division with defined wraparound, over-wide shift and divide-by-zero results
//! - **IEEE-754 bit utilities**: bit-exact reinterpretation and classification
//! - **Elementary functions**: sqrt, trig, exp/log, rounding and helpers on `f32`
//! - **Secure random source**: OS entropy turned into typed, ranged values
//! - **Function registry**: every operation addressable by stable id and name
//!
//! # Example
//!
//! ```rust
//! use numcore::stdlib::{divmod64, round, sqrt};
//! use numcore::runtime::SecureRandom;
//!
//! assert_eq!(divmod64(-7, 2), (-3, -1));
//! assert_eq!(divmod64(42, 0), (0, 42));
//! assert_eq!(round(-3.5), -4.0);
//! assert!((sqrt(9.0) - 3.0).abs() < 0.01);
//!
//! let rng = SecureRandom::seeded(7);
//! let v = rng.random_range(10, 20);
//! assert!((10..20).contains(&v));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   numcore CLI   │  call / list / random / verify / config
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Registry     │  id/name -> register adapters
//! └────────┬────────┘
//!          │
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐  ┌──────────┐
//! │ Random │  │  stdlib  │  no_std, zero dependencies
//! └───┬────┘  └──────────┘
//!     │
//!     ▼
//! ┌─────────────────┐
//! │ Entropy source  │  ring SystemRandom / ChaCha20
//! └─────────────────┘
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod runtime;
pub mod verify;

/// The freestanding numeric substrate.
pub use numcore_stdlib as stdlib;

pub use config::{ConfigError, ConfigResult, NumcoreConfig};
pub use runtime::{
    fn_ids, CallError, EntropyError, EntropySource, FnCategory, FunctionRegistry, SecureRandom,
    SeededEntropy, SystemEntropy,
};
pub use verify::{verify_wide, Mismatch, VerifyReport};
