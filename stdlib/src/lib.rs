//! Numcore Standard Library - Freestanding Numeric Substrate
//!
//! This crate holds the numeric primitives a runtime needs when it cannot link a
//! C runtime or a math library: 64-bit integer intrinsics and a single-precision
//! elementary function library.
//!
//! # Design Philosophy
//!
//! 1. **No hidden support calls** - No native 64-bit `/` or `%`, no `f32` intrinsics
//! 2. **Total functions** - Domain violations return documented sentinels, never panic
//! 3. **Bit-exact reinterpretation** - IEEE-754 fields are read through `to_bits`, not casts
//!
//! # Layers
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ trig / exp        series + range reduce  │
//! ├──────────────────────────────────────────┤
//! │ float / math      rounding, arithmetic   │
//! ├──────────────────────────────────────────┤
//! │ ieee              f32 bit patterns       │
//! │ wide              64-bit intrinsics      │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Accuracy targets are those of a compact runtime, not of a correctly rounded libm:
//! roughly 1e-3 to 1e-4 relative error for `sqrt`, and around 1e-4 absolute
//! for the trigonometric series near the origin.

#![cfg_attr(not(test), no_std)]

pub mod exp;
pub mod float;
pub mod ieee;
pub mod math;
pub mod trig;
pub mod wide;

// Re-export commonly used functions
pub use exp::*;
pub use float::*;
pub use ieee::*;
pub use math::*;
pub use trig::*;
pub use wide::*;

/// Pi (π ≈ 3.14159).
pub const PI: f32 = 3.141_592_7;
/// Euler's number (e ≈ 2.71828).
pub const E: f32 = 2.718_281_7;
/// Tau (τ = 2π ≈ 6.28318).
pub const TAU: f32 = 6.283_185_5;
/// Square root of 2 (√2 ≈ 1.41421).
pub const SQRT_2: f32 = 1.414_213_5;
/// Natural logarithm of 2.
pub const LN_2: f32 = 0.693_147_2;
/// Natural logarithm of 10.
pub const LN_10: f32 = 2.302_585;
