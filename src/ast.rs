use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all types of expressions, from literals and variables to
/// named math-function calls, arithmetic, grouping and assignment. Each
/// variant models a distinct syntactic construct and carries the source line
/// it was parsed from for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A binary operation (addition, subtraction, multiplication, division).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A literal value (number or string).
    Literal {
        /// The constant value.
        value: Value,
        /// Line number in the source code.
        line:  usize,
    },
    /// A unary operation (negation).
    Unary {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Assignment of a new value to an existing variable.
    Assign {
        /// Name of the variable being assigned.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call to a single-argument math function (e.g. `sin(x)`).
    MathCall {
        /// The function being applied.
        function: MathFunction,
        /// The argument expression.
        argument: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Exponentiation via `pow(base, exponent)`.
    Power {
        /// The base expression.
        base:     Box<Self>,
        /// The exponent expression.
        exponent: Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Triangle area from three side lengths via `triangleArea(a, b, c)`.
    TriangleArea {
        /// First side length.
        a:    Box<Self>,
        /// Second side length.
        b:    Box<Self>,
        /// Third side length.
        c:    Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minicalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name: "x".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Binary { line, .. }
            | Self::Grouping { line, .. }
            | Self::Literal { line, .. }
            | Self::Unary { line, .. }
            | Self::Variable { line, .. }
            | Self::Assign { line, .. }
            | Self::MathCall { line, .. }
            | Self::Power { line, .. }
            | Self::TriangleArea { line, .. } => *line,
        }
    }
}

/// Represents a top-level statement.
///
/// Statements are the units parsed from a submitted chunk of source text and
/// executed in order by the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result, which is printed.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A `print` statement.
    Print {
        /// The expression whose value is printed.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A variable declaration using `int` or `double`.
    VarDeclaration {
        /// The name of the variable.
        name:        String,
        /// The declared type keyword. Syntactic only; it carries no runtime
        /// enforcement.
        ty:          DeclaredType,
        /// The optional initializer expression.
        initializer: Option<Expr>,
        /// Line number in the source code.
        line:        usize,
    },
}

/// The type keyword a variable was declared with.
///
/// The keyword is recorded in the AST but has no effect on evaluation; all
/// numbers are double-precision floats at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Declared with `int`.
    Int,
    /// Declared with `double`.
    Double,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`), doubling as string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the source lexeme of the operator.
    #[must_use]
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// A named single-argument math function.
///
/// These are keywords of the language, not user-definable names.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Sine, operating on radians.
    Sin,
    /// Cosine, operating on radians.
    Cos,
    /// Tangent, operating on radians.
    Tan,
    /// Square root; rejects negative arguments.
    Sqrt,
    /// Natural logarithm; rejects non-positive arguments.
    Log,
    /// Absolute value.
    Abs,
}

impl MathFunction {
    /// Returns the source lexeme of the function keyword.
    #[must_use]
    pub const fn lexeme(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Abs => "abs",
        }
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}
