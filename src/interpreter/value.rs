use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Tolerance used when collapsing numeric values to clean textual forms.
///
/// A number within this distance of zero prints as `0`; a number within this
/// distance of its nearest integer prints as that integer with no fractional
/// suffix.
pub const DISPLAY_EPSILON: f64 = 1e-14;

/// Represents a runtime value in the interpreter.
///
/// These are the only two types that exist at runtime. Full precision is
/// retained internally; only the display form is canonicalized: numbers
/// within [`DISPLAY_EPSILON`] of zero print as `0`, numbers within
/// [`DISPLAY_EPSILON`] of their nearest integer print as that integer with
/// no fractional suffix, and all other numbers use default decimal
/// rendering. Text prints verbatim. The canonical form is used both when
/// printing a value and when concatenating one into a string.
///
/// # Example
/// ```
/// use minicalc::interpreter::value::Value;
///
/// assert_eq!(Value::Number(4.000000000000001).to_string(), "4");
/// assert_eq!(Value::Number(-1.0e-15).to_string(), "0");
/// assert_eq!(Value::Number(2.5).to_string(), "2.5");
/// assert_eq!(Value::Text("hi".to_string()).to_string(), "hi");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A text value, produced by string literals and concatenation.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `lexeme`: The operator or function lexeme requiring the number,
    ///   recorded on the error for diagnostics.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is a number.
    /// - `Err(RuntimeError::ExpectedNumber)`: If the value is text.
    ///
    /// # Example
    /// ```
    /// use minicalc::interpreter::value::Value;
    ///
    /// let x = Value::Number(10.0);
    /// let n = x.as_number("+", 42).unwrap();
    ///
    /// assert_eq!(n, 10.0);
    /// ```
    pub fn as_number(&self, lexeme: &str, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(_) => Err(RuntimeError::ExpectedNumber { lexeme: lexeme.to_string(),
                                                                line }),
        }
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`Text`].
    ///
    /// [`Text`]: Value::Text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => {
                if n.abs() < DISPLAY_EPSILON {
                    write!(f, "0")
                } else if (n - n.round()).abs() < DISPLAY_EPSILON {
                    write!(f, "{}", n.round())
                } else {
                    write!(f, "{n}")
                }
            },
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
