// Core modules: arithmetic operations and error modeling.
pub mod error;
pub mod ops;
