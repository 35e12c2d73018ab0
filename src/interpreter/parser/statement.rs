use std::iter::Peekable;

use crate::{
    ast::{DeclaredType, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect_semicolon, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable declaration starting with `int` or `double`,
/// - a `print` statement,
/// - an expression used as a statement.
///
/// Every statement must end in `;`; the parser performs no automatic
/// insertion.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Int, line)) => {
            let line = *line;
            tokens.next();
            parse_var_declaration(tokens, DeclaredType::Int, line)
        },
        Some((Token::Double, line)) => {
            let line = *line;
            tokens.next();
            parse_var_declaration(tokens, DeclaredType::Double, line)
        },
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();
            parse_print_statement(tokens, line)
        },
        _ => parse_expression_statement(tokens),
    }
}

/// Parses the remainder of a variable declaration.
///
/// A declaration has the form `int <identifier> (= <expression>)? ;` or the
/// same with `double`. The type keyword has already been consumed by the
/// caller; it is recorded in the AST but carries no runtime enforcement.
/// The initializer is optional; without one the variable is declared with an
/// empty value.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the type keyword.
/// - `ty`: The declared type keyword.
/// - `line`: Line number of the type keyword.
///
/// # Returns
/// A [`Statement::VarDeclaration`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the variable name is missing,
/// - the initializer expression is malformed,
/// - the terminating `;` is missing.
fn parse_var_declaration<'a, I>(tokens: &mut Peekable<I>,
                                ty: DeclaredType,
                                line: usize)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = parse_identifier(tokens, line)?;

    let initializer = if let Some((Token::Equals, _)) = tokens.peek() {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect_semicolon(tokens, "variable declaration", line)?;

    Ok(Statement::VarDeclaration { name,
                                   ty,
                                   initializer,
                                   line })
}

/// Parses the remainder of a `print` statement.
///
/// The `print` keyword has already been consumed; what follows is a full
/// expression and the terminating `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `print`.
/// - `line`: Line number of the `print` keyword.
///
/// # Returns
/// A [`Statement::Print`] node.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or the `;` is
/// missing.
fn parse_print_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, "value", line)?;

    Ok(Statement::Print { expr, line })
}

/// Parses a bare expression statement.
///
/// Any statement that starts with neither a declaration keyword nor `print`
/// is a full expression terminated by `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
///
/// # Returns
/// A [`Statement::Expression`] node.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or the `;` is
/// missing.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;
    expect_semicolon(tokens, "expression", line)?;

    Ok(Statement::Expression { expr, line })
}
