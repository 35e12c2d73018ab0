/// The single-argument math functions and `pow`.
///
/// Applies `sin`, `cos`, `tan`, `sqrt`, `log` and `abs` to a numeric
/// argument, enforcing the domain restrictions of `sqrt` and `log`, and
/// performs real exponentiation for `pow`.
pub mod math;

/// The `triangleArea` function.
///
/// Validates the three side lengths and computes the area using Heron's
/// formula.
pub mod triangle;
