use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `line`: Line number to report when the input ends here.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              line: usize)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), _)) => Ok(name.clone()),
        Some((token, l)) => Err(ParseError::ExpectedVariableName { found: token.to_string(),
                                                                   line:  *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Requires the statement terminator `;`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `;`.
/// - `after`: What the terminator was expected after, for the diagnostic.
/// - `line`: Line number to report when the input ends here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `;` or the input ends.
pub(in crate::interpreter::parser) fn expect_semicolon<'a, I>(tokens: &mut Peekable<I>,
                                                              after: &'static str,
                                                              line: usize)
                                                              -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Semicolon, _)) => Ok(()),
        Some((token, l)) => Err(ParseError::ExpectedSemicolon { after,
                                                                found: token.to_string(),
                                                                line: *l }),
        None => Err(ParseError::ExpectedSemicolon { after,
                                                    found: "end".to_string(),
                                                    line }),
    }
}

/// Requires the `(` that opens a function's argument list.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `(`.
/// - `function`: The function keyword being called, for the diagnostic.
/// - `line`: Line number to report when the input ends here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `(` or the input ends.
pub(in crate::interpreter::parser) fn expect_opening_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  function: &str,
                                                                  line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::LParen, _)) => Ok(()),
        Some((token, l)) => Err(ParseError::ExpectedOpeningParen { function: function.to_string(),
                                                                   found:    token.to_string(),
                                                                   line:     *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Requires a closing `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `)`.
/// - `after`: What the parenthesis was expected after, for the diagnostic.
/// - `line`: Line number to report when the input ends here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `)` or the input ends.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>,
                                                                  after: &'static str,
                                                                  line: usize)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(()),
        Some((token, l)) => Err(ParseError::ExpectedClosingParen { after,
                                                                   found: token.to_string(),
                                                                   line: *l }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Requires the `,` that separates function arguments.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expected `,`.
/// - `line`: Line number to report when the input ends here.
///
/// # Errors
/// Returns a `ParseError` if the next token is not `,` or the input ends.
pub(in crate::interpreter::parser) fn expect_argument_separator<'a, I>(tokens: &mut Peekable<I>,
                                                                       line: usize)
                                                                       -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Comma, _)) => Ok(()),
        Some((token, l)) => Err(ParseError::ExpectedArgumentSeparator { found: token.to_string(),
                                                                        line:  *l, }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
