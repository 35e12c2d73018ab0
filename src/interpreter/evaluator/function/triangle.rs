use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Computes the area of a triangle from its three side lengths.
///
/// Each side must be strictly positive, and each pair of sides must sum to
/// strictly more than the third (checked for all three permutations). The
/// two violations produce distinct errors so the user learns whether a side
/// was non-positive or the sides cannot form a triangle at all.
///
/// The area is computed with Heron's formula: with semi-perimeter
/// `p = (a + b + c) / 2`, the area is `sqrt(p(p-a)(p-b)(p-c))`.
///
/// # Parameters
/// - `a`: First side length.
/// - `b`: Second side length.
/// - `c`: Third side length.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The triangle's area.
///
/// # Errors
/// - `NonPositiveSide` if any side is zero or negative.
/// - `TriangleInequality` if the side lengths cannot form a triangle.
///
/// # Example
/// ```
/// use minicalc::interpreter::evaluator::function::triangle::area;
///
/// let result = area(3.0, 4.0, 5.0, 1).unwrap();
/// assert!((result - 6.0).abs() < 1e-12);
///
/// assert!(area(1.0, 1.0, 5.0, 1).is_err());
/// ```
pub fn area(a: f64, b: f64, c: f64, line: usize) -> EvalResult<f64> {
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(RuntimeError::NonPositiveSide { line });
    }

    if a + b <= c || a + c <= b || b + c <= a {
        return Err(RuntimeError::TriangleInequality { line });
    }

    let p = (a + b + c) / 2.0;
    Ok((p * (p - a) * (p - b) * (p - c)).sqrt())
}
