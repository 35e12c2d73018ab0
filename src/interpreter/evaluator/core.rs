use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::function::{math, triangle},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes statements against a persistent environment.
///
/// One interpreter instance owns one [`Environment`]. The environment lives
/// as long as the instance does, so state established by one submitted chunk
/// is visible to later ones. The instance is single-threaded, private and
/// unsynchronized; a host exposing it to concurrent callers must add its own
/// mutual exclusion, or construct one instance per logical session.
pub struct Interpreter {
    environment: Environment,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new interpreter with a fresh environment holding only the
    /// math constants `PI` and `E`.
    #[must_use]
    pub fn new() -> Self {
        Self { environment: Environment::new(), }
    }

    /// Executes a sequence of statements in order, left to right.
    ///
    /// Lines printed by print statements and expression statements are
    /// appended to `output` as they are produced. The first runtime error
    /// stops processing of the remaining statements; environment mutations
    /// and output lines produced before the failure remain in effect, there
    /// is no rollback.
    ///
    /// # Parameters
    /// - `statements`: Statements of one chunk.
    /// - `output`: Sink for printed lines, in statement order.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by a statement.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
    /// };
    ///
    /// let (tokens, _) = scan("int x = 10; x + 5;");
    /// let (statements, errors) = parse(&tokens);
    /// assert!(errors.is_empty());
    ///
    /// let mut interpreter = Interpreter::new();
    /// let mut output = Vec::new();
    ///
    /// interpreter.interpret(&statements, &mut output).unwrap();
    /// assert_eq!(output, vec!["15".to_string()]);
    /// ```
    pub fn interpret(&mut self,
                     statements: &[Statement],
                     output: &mut Vec<String>)
                     -> EvalResult<()> {
        for statement in statements {
            self.execute(statement, output)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// - An expression statement evaluates its expression and prints the
    ///   canonical form of the value it produces. A variable declared
    ///   without an initializer produces no value, and then no line is
    ///   printed.
    /// - A print statement evaluates its expression and prints the value; an
    ///   empty value is a `MissingValue` error here, since the language has
    ///   no textual form for "no value".
    /// - A declaration evaluates its optional initializer and installs or
    ///   overwrites the binding immediately.
    fn execute(&mut self, statement: &Statement, output: &mut Vec<String>) -> EvalResult<()> {
        match statement {
            Statement::Expression { expr, .. } => {
                if let Some(value) = self.eval(expr)? {
                    output.push(value.to_string());
                }
                Ok(())
            },
            Statement::Print { expr, line } => {
                let value = self.expect_value(expr, *line)?;
                output.push(value.to_string());
                Ok(())
            },
            Statement::VarDeclaration { name, initializer, .. } => {
                let value = match initializer {
                    Some(expr) => self.eval(expr)?,
                    None => None,
                };
                self.environment.define(name, value);
                Ok(())
            },
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, grouping,
    /// variables, unary and binary operations, assignment and the named math
    /// functions.
    ///
    /// `None` is produced only by reading a variable that was declared
    /// without an initializer; grouping and assignment pass such emptiness
    /// through, every other operation rejects it with `MissingValue`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for an
    /// empty binding.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Literal { value, .. } => Ok(Some(value.clone())),
            Expr::Grouping { expr, .. } => self.eval(expr),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::Assign { name, value, line } => self.eval_assign(name, value, *line),
            Expr::Unary { op, expr, line } => {
                let value = self.expect_value(expr, *line)?;
                Ok(Some(Self::eval_unary(*op, &value, *line)?))
            },
            Expr::Binary { left,
                           op,
                           right,
                           line, } => {
                let lhs = self.expect_value(left, *line)?;
                let rhs = self.expect_value(right, *line)?;
                Ok(Some(Self::eval_binary(*op, &lhs, &rhs, *line)?))
            },
            Expr::MathCall { function,
                             argument,
                             line, } => {
                let argument = self.expect_value(argument, *line)?
                                   .as_number(function.lexeme(), *line)?;
                Ok(Some(Value::Number(math::apply(*function, argument, *line)?)))
            },
            Expr::Power { base, exponent, line } => {
                let base = self.expect_value(base, *line)?.as_number("pow", *line)?;
                let exponent = self.expect_value(exponent, *line)?
                                   .as_number("pow", *line)?;
                Ok(Some(Value::Number(math::power(base, exponent))))
            },
            Expr::TriangleArea { a, b, c, line } => {
                let a = self.expect_value(a, *line)?
                            .as_number("triangleArea", *line)?;
                let b = self.expect_value(b, *line)?
                            .as_number("triangleArea", *line)?;
                let c = self.expect_value(c, *line)?
                            .as_number("triangleArea", *line)?;
                Ok(Some(Value::Number(triangle::area(a, b, c, *line)?)))
            },
        }
    }

    /// Looks up a variable by name.
    ///
    /// If the name is not bound in the environment, an `UndefinedVariable`
    /// error is returned. A bound but empty slot yields `None`.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The variable's value, if it holds one.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Option<Value>> {
        match self.environment.get(name) {
            Some(slot) => Ok(slot.clone()),
            None => Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                          line }),
        }
    }

    /// Evaluates an assignment expression.
    ///
    /// The value expression is evaluated first, then stored under the target
    /// name. The name must already be bound; assignment to an undeclared
    /// name is an undefined-variable error, never an implicit declaration.
    /// The assigned value is also the value of the whole expression, so
    /// assignments chain (`a = b = 5`) and echo when used as expression
    /// statements.
    ///
    /// # Parameters
    /// - `name`: The target variable name.
    /// - `value`: The value expression.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The assigned value.
    fn eval_assign(&mut self, name: &str, value: &Expr, line: usize) -> EvalResult<Option<Value>> {
        let value = self.eval(value)?;

        if !self.environment.assign(name, value.clone()) {
            return Err(RuntimeError::UndefinedVariable { name: name.to_string(),
                                                         line });
        }

        Ok(value)
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operand positions require actual values: evaluating an empty binding
    /// there reports a `MissingValue` error. This helper centralizes that
    /// behavior so unary, binary and function-call logic stay simple.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The evaluated `Value`.
    fn expect_value(&mut self, expr: &Expr, line: usize) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue { line })
    }
}
