//! Purpose: Library crate behind the `arith` CLI.
//! Exports: `core` (arithmetic operations, errors) plus root re-exports of the operations.
//! Role: Pure functions shared by the binary and tests.
//! Invariants: Operations are stateless; arithmetic runs in f64 and never panics.
pub mod core;

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::ops::{
    DivisionByZero, GREETING, Number, add, divide, greeting, multiply, quotient_text, subtract,
};
