//! Purpose: Build the fixed demonstration output printed by bare `arith`.
//! Exports: `demo_lines`.
//! Role: Pure line builder so the demo text is testable without a process.
//! Invariants: Line order and labels are stable; labels and values are joined by one space.
use arith::{add, divide, greeting, multiply, quotient_text, subtract};

pub(crate) fn demo_lines() -> Vec<String> {
    vec![
        greeting().to_string(),
        format!("Add 5 + 3= {}", add(5, 3)),
        format!("Subtract 5 - 3= {}", subtract(5, 3)),
        format!("Multiply 5 * 3= {}", multiply(5, 3)),
        format!("Divide 5 / 3= {}", quotient_text(&divide(5, 3))),
        format!("Divide 5 / 0= {}", quotient_text(&divide(5, 0))),
    ]
}
