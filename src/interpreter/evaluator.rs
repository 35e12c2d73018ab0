/// Binary operator evaluation logic.
///
/// Handles the execution of the four arithmetic operators, including string
/// concatenation through `+` and the division-by-zero check.
pub mod binary;

/// Core evaluation logic and interpreter state.
///
/// Contains the main execution engine, the interpreter owning the
/// environment, and error propagation.
pub mod core;

/// Evaluation of the named math functions.
///
/// The single-argument functions, `pow` and `triangleArea`, with their
/// domain checks.
pub mod function;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;
