use crate::{ast::MathFunction, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Applies a single-argument math function to a numeric argument.
///
/// The trigonometric functions operate directly on the numeric value in
/// radians, with no unit conversion. `sqrt` rejects negative input and `log`
/// (the natural logarithm) rejects non-positive input; `abs` has no domain
/// restriction.
///
/// # Parameters
/// - `function`: The function to apply.
/// - `argument`: The evaluated numeric argument.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The computed result.
///
/// # Errors
/// - `NegativeSqrt` for `sqrt` of a negative number.
/// - `NonPositiveLog` for `log` of zero or a negative number.
///
/// # Example
/// ```
/// use minicalc::{ast::MathFunction, interpreter::evaluator::function::math::apply};
///
/// let root = apply(MathFunction::Sqrt, 16.0, 1).unwrap();
/// assert_eq!(root, 4.0);
///
/// assert!(apply(MathFunction::Sqrt, -1.0, 1).is_err());
/// assert!(apply(MathFunction::Log, 0.0, 1).is_err());
/// ```
pub fn apply(function: MathFunction, argument: f64, line: usize) -> EvalResult<f64> {
    match function {
        MathFunction::Sin => Ok(argument.sin()),
        MathFunction::Cos => Ok(argument.cos()),
        MathFunction::Tan => Ok(argument.tan()),
        MathFunction::Sqrt => {
            if argument < 0.0 {
                return Err(RuntimeError::NegativeSqrt { line });
            }
            Ok(argument.sqrt())
        },
        MathFunction::Log => {
            if argument <= 0.0 {
                return Err(RuntimeError::NonPositiveLog { line });
            }
            Ok(argument.ln())
        },
        MathFunction::Abs => Ok(argument.abs()),
    }
}

/// Standard real exponentiation for `pow(base, exponent)`.
///
/// No domain restriction is applied.
#[must_use]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}
