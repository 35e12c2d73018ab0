use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operator applied to a value.
    ///
    /// Negation requires a numeric operand.
    ///
    /// # Parameters
    /// - `op`: The unary operator.
    /// - `value`: The operand value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed value.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let value = Value::Number(5.0);
    ///
    /// let result = Interpreter::eval_unary(UnaryOperator::Negate, &value, 1);
    /// assert_eq!(result.unwrap(), Value::Number(-5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number("-", line)?)),
        }
    }
}
