use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a binary operation between two values.
    ///
    /// Addition doubles as concatenation: if either operand is text, both
    /// are rendered in their canonical textual form and joined. The other
    /// operators require numeric operands. Division checks the right
    /// operand for zero so that no infinite or not-a-number result is ever
    /// produced.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use minicalc::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let left = Value::Number(3.0);
    /// let right = Value::Number(4.0);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Number(7.0));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        if op == BinaryOperator::Add {
            return Self::eval_add(left, right, line);
        }

        let lhs = left.as_number(op.lexeme(), line)?;
        let rhs = right.as_number(op.lexeme(), line)?;

        match op {
            BinaryOperator::Sub => Ok(Value::Number(lhs - rhs)),
            BinaryOperator::Mul => Ok(Value::Number(lhs * rhs)),
            BinaryOperator::Div if rhs == 0.0 => Err(RuntimeError::DivisionByZero { line }),
            BinaryOperator::Div => Ok(Value::Number(lhs / rhs)),
            BinaryOperator::Add => unreachable!(),
        }
    }

    /// Evaluates `+`, which adds numbers and concatenates text.
    ///
    /// Concatenation applies whenever either operand is text; the numeric
    /// operand, if any, contributes its canonical textual form, so
    /// `"x = " + 10` yields `x = 10`.
    fn eval_add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if left.is_text() || right.is_text() {
            return Ok(Value::Text(format!("{left}{right}")));
        }

        let sum = left.as_number("+", line)? + right.as_number("+", line)?;
        Ok(Value::Number(sum))
    }
}
