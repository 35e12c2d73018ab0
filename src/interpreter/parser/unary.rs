use std::iter::Peekable;

use crate::{
    ast::{Expr, MathFunction, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_argument_separator, expect_closing_paren, expect_opening_paren},
        },
        value::Value,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Unary operators are
/// right-associative, so an input like `--x` is parsed as `-(-x)`.
///
/// If no unary operator is present, the function delegates to
/// [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | call
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Unary`] or a call-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::Unary { op:   UnaryOperator::Negate,
                         expr: Box::new(expr),
                         line, })
    } else {
        parse_call(tokens)
    }
}

/// Parses the three named call shapes of the language.
///
/// - a single-argument math function: `sin`, `cos`, `tan`, `sqrt`, `log` or
///   `abs`, parenthesized with exactly one expression argument,
/// - `pow`, parenthesized with exactly two comma-separated arguments,
/// - `triangleArea`, parenthesized with exactly three comma-separated
///   arguments.
///
/// Anything else falls through to [`parse_primary`].
///
/// Grammar:
/// ```text
///     call := MATH_FN "(" expression ")"
///           | "pow" "(" expression "," expression ")"
///           | "triangleArea" "(" expression "," expression "," expression ")"
///           | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at a possible call keyword.
///
/// # Returns
/// The parsed call expression, or a primary expression.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Sin
              | Token::Cos
              | Token::Tan
              | Token::Sqrt
              | Token::Log
              | Token::Abs,
              _)) => parse_math_call(tokens),
        Some((Token::Pow, _)) => parse_power(tokens),
        Some((Token::TriangleArea, _)) => parse_triangle_area(tokens),
        _ => parse_primary(tokens),
    }
}

/// Parses a single-argument math function call such as `sqrt(16)`.
///
/// The function keyword has already been recognized by the caller; this
/// consumes it, then requires `(`, one expression argument and `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the function keyword.
///
/// # Returns
/// An [`Expr::MathCall`] node.
///
/// # Errors
/// Returns a `ParseError` if the parentheses are missing or the argument
/// fails to parse.
fn parse_math_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let line = *line;
    let function = match token {
        Token::Sin => MathFunction::Sin,
        Token::Cos => MathFunction::Cos,
        Token::Tan => MathFunction::Tan,
        Token::Sqrt => MathFunction::Sqrt,
        Token::Log => MathFunction::Log,
        Token::Abs => MathFunction::Abs,
        _ => unreachable!(),
    };

    expect_opening_paren(tokens, function.lexeme(), line)?;
    let argument = parse_expression(tokens)?;
    expect_closing_paren(tokens, "function arguments", line)?;

    Ok(Expr::MathCall { function,
                        argument: Box::new(argument),
                        line })
}

/// Parses a `pow(base, exponent)` call.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `pow` keyword.
///
/// # Returns
/// An [`Expr::Power`] node.
///
/// # Errors
/// Returns a `ParseError` if the parentheses or the argument separator are
/// missing, or an argument fails to parse.
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    expect_opening_paren(tokens, "pow", line)?;
    let base = parse_expression(tokens)?;
    expect_argument_separator(tokens, line)?;
    let exponent = parse_expression(tokens)?;
    expect_closing_paren(tokens, "function arguments", line)?;

    Ok(Expr::Power { base: Box::new(base),
                     exponent: Box::new(exponent),
                     line })
}

/// Parses a `triangleArea(a, b, c)` call.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `triangleArea` keyword.
///
/// # Returns
/// An [`Expr::TriangleArea`] node.
///
/// # Errors
/// Returns a `ParseError` if the parentheses or an argument separator are
/// missing, or an argument fails to parse.
fn parse_triangle_area<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    expect_opening_paren(tokens, "triangleArea", line)?;
    let a = parse_expression(tokens)?;
    expect_argument_separator(tokens, line)?;
    let b = parse_expression(tokens)?;
    expect_argument_separator(tokens, line)?;
    let c = parse_expression(tokens)?;
    expect_closing_paren(tokens, "function arguments", line)?;

    Ok(Expr::TriangleArea { a: Box::new(a),
                            b: Box::new(b),
                            c: Box::new(c),
                            line })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER | STRING | IDENTIFIER | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::Identifier(_), _) => {
            let (token, line) = tokens.next().unwrap();
            let name = if let Token::Identifier(name) = token {
                name.clone()
            } else {
                unreachable!()
            };
            Ok(Expr::Variable { name, line: *line })
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (token, line) => Err(ParseError::ExpectedExpression { found: token.to_string(),
                                                              line:  *line, }),
    }
}

/// Parses a numeric or string literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a literal.
///
/// # Returns
/// An [`Expr::Literal`] containing the decoded value.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let value = match token {
        Token::Number(n) => Value::Number(*n),
        Token::Str(s) => Value::Text(s.clone()),
        _ => unreachable!(),
    };

    Ok(Expr::Literal { value,
                       line: *line })
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// An [`Expr::Grouping`] wrapping the inner expression.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = tokens.next().unwrap();
    let line = *line;

    let expr = parse_expression(tokens)?;
    expect_closing_paren(tokens, "expression", line)?;

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line })
}
