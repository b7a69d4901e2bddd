// ============================================================================
// Numeric Module
// Precision-bounded decimal arithmetic for vector coordinates
// ============================================================================
//
// This module provides:
// - Precision: significant-digit rounding context with checked operations
// - ToScalar: conversion of numeric-like input into Decimal
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - Coordinates are rust_decimal::Decimal, never raw f64
// - Every operation result is rounded to the working precision
// - All arithmetic returns Result (no panics)

mod errors;
mod precision;
mod scalar;

pub use errors::{NumericError, NumericResult};
pub use precision::Precision;
pub use scalar::ToScalar;
