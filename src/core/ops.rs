//! Purpose: The arithmetic API: greeting plus add, subtract, multiply, divide.
//! Exports: `greeting`, `add`, `subtract`, `multiply`, `divide`, `quotient_text`, `DivisionByZero`, `Number`.
//! Role: Pure, stateless functions used by the CLI and by library callers.
//! Invariants: Operands of any primitive numeric type are widened to f64 before the operation.
//! Invariants: A zero divisor yields `Err(DivisionByZero)`.
//! Invariants: Functions never panic on numeric input.
use std::fmt;

use tracing::debug;

pub const GREETING: &str = "Hello, World!";

/// Returned by [`divide`] when the divisor is zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DivisionByZero;

impl DivisionByZero {
    /// Text shown in place of a quotient when the divisor is zero.
    pub const SENTINEL: &'static str = "Error: Division by zero";
}

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("division by zero")
    }
}

impl std::error::Error for DivisionByZero {}

pub fn greeting() -> &'static str {
    GREETING
}

/// Primitive numeric types accepted by the operations.
///
/// Every operand is widened to `f64`, so results never overflow or panic:
/// out-of-range results saturate to infinity and integers beyond 2^53 lose
/// precision.
pub trait Number: Copy + fmt::Debug {
    fn to_f64(self) -> f64;
}

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Number for $ty {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

pub fn add<T: Number>(a: T, b: T) -> f64 {
    debug!(a = ?a, b = ?b, "add");
    a.to_f64() + b.to_f64()
}

pub fn subtract<T: Number>(a: T, b: T) -> f64 {
    debug!(a = ?a, b = ?b, "subtract");
    a.to_f64() - b.to_f64()
}

pub fn multiply<T: Number>(a: T, b: T) -> f64 {
    debug!(a = ?a, b = ?b, "multiply");
    a.to_f64() * b.to_f64()
}

/// Divide `a` by `b` as real numbers, so `divide(3, 10)` is `Ok(0.3)`.
///
/// Both `0.0` and `-0.0` count as a zero divisor.
pub fn divide<T: Number>(a: T, b: T) -> Result<f64, DivisionByZero> {
    let (a, b) = (a.to_f64(), b.to_f64());
    if b == 0.0 {
        debug!(a, "divide by zero rejected");
        return Err(DivisionByZero);
    }
    debug!(a, b, "divide");
    Ok(a / b)
}

/// Render a quotient the way the demo prints it: the number, or the sentinel text.
pub fn quotient_text(result: &Result<f64, DivisionByZero>) -> String {
    match result {
        Ok(value) => value.to_string(),
        Err(_) => DivisionByZero::SENTINEL.to_string(),
    }
}
