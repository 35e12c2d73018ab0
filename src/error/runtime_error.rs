#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can be raised during evaluation.
///
/// The first runtime error stops execution of the current chunk. Every
/// variant records the source line; [`RuntimeError::lexeme`] recovers the
/// offending lexeme for the extra line on the diagnostic channel.
pub enum RuntimeError {
    /// Referenced or assigned a variable that was never declared.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand of an arithmetic operator or math function was not numeric.
    ExpectedNumber {
        /// The lexeme of the operator or function that rejected the operand.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Attempted division with a zero right operand.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called `sqrt` with a negative argument.
    NegativeSqrt {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called `log` with a non-positive argument.
    NonPositiveLog {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called `triangleArea` with a side length that is not strictly
    /// positive.
    NonPositiveSide {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called `triangleArea` with side lengths that violate the triangle
    /// inequality.
    TriangleInequality {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operation required a value, but the expression produced none
    /// (a variable declared without an initializer holds no value).
    MissingValue {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the offending lexeme, when the error has one.
    ///
    /// The front-end quotes this on an additional diagnostic line after the
    /// error message itself.
    ///
    /// ## Example
    /// ```
    /// use minicalc::error::RuntimeError;
    ///
    /// let error = RuntimeError::UndefinedVariable { name: "x".to_string(),
    ///                                               line: 1, };
    ///
    /// assert_eq!(error.lexeme(), Some("x"));
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> Option<&str> {
        match self {
            Self::UndefinedVariable { name, .. } => Some(name),
            Self::ExpectedNumber { lexeme, .. } => Some(lexeme),
            Self::DivisionByZero { .. } => Some("/"),
            Self::NegativeSqrt { .. } => Some("sqrt"),
            Self::NonPositiveLog { .. } => Some("log"),
            Self::NonPositiveSide { .. } | Self::TriangleInequality { .. } => Some("triangleArea"),
            Self::MissingValue { .. } => None,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "[line {line}] Runtime error: Undefined variable '{name}'.")
            },
            Self::ExpectedNumber { line, .. } => {
                write!(f, "[line {line}] Runtime error: Operands must be numbers.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "[line {line}] Runtime error: Division by zero.")
            },
            Self::NegativeSqrt { line } => write!(f,
                                                  "[line {line}] Runtime error: Cannot take the square root of a negative number."),
            Self::NonPositiveLog { line } => write!(f,
                                                    "[line {line}] Runtime error: Logarithm argument must be positive."),
            Self::NonPositiveSide { line } => write!(f,
                                                     "[line {line}] Runtime error: Triangle side lengths must be positive."),
            Self::TriangleInequality { line } => write!(f,
                                                        "[line {line}] Runtime error: Side lengths violate the triangle inequality (any two sides must sum to more than the third)."),
            Self::MissingValue { line } => {
                write!(f, "[line {line}] Runtime error: Value missing.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
