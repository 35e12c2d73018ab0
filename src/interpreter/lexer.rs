use logos::Logos;

use crate::error::ScanDiagnostic;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. A trailing dot with
    /// no following digit is not consumed as part of the number.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens. No escape processing; the content between the
    /// quotes is taken verbatim and may span newlines.
    #[regex(r#""[^"]*""#, parse_string)]
    Str(String),
    /// `int`
    #[token("int")]
    Int,
    /// `double`
    #[token("double")]
    Double,
    /// `print`
    #[token("print")]
    Print,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `sqrt`
    #[token("sqrt")]
    Sqrt,
    /// `pow`
    #[token("pow")]
    Pow,
    /// `log`
    #[token("log")]
    Log,
    /// `abs`
    #[token("abs")]
    Abs,
    /// `triangleArea`
    #[token("triangleArea")]
    TriangleArea,
    /// Identifier tokens; variable names such as `x` or `radius`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Extracts the content of a string literal, stripping the surrounding
/// quotes.
///
/// Newlines inside the literal advance the line counter, so tokens after a
/// multi-line string still report accurate lines.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The literal content, taken verbatim.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let newlines = slice.chars().filter(|&c| c == '\n').count();
    lex.extras.line += newlines;
    slice[1..slice.len() - 1].to_string()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Int => write!(f, "int"),
            Self::Double => write!(f, "double"),
            Self::Print => write!(f, "print"),
            Self::Sin => write!(f, "sin"),
            Self::Cos => write!(f, "cos"),
            Self::Tan => write!(f, "tan"),
            Self::Sqrt => write!(f, "sqrt"),
            Self::Pow => write!(f, "pow"),
            Self::Log => write!(f, "log"),
            Self::Abs => write!(f, "abs"),
            Self::TriangleArea => write!(f, "triangleArea"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Comma => write!(f, ","),
            Self::Dot => write!(f, "."),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Semicolon => write!(f, ";"),
            Self::Equals => write!(f, "="),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Converts one chunk of source text into an ordered token sequence.
///
/// Scanning is a single left-to-right pass and never fails fatally. Each
/// token is paired with the line it was scanned on. Problems are returned as
/// [`ScanDiagnostic`]s alongside the tokens:
///
/// - an unterminated string halts scanning of the chunk immediately; the
///   remaining text is not tokenized,
/// - an unrecognized ASCII character is skipped and scanning continues,
/// - characters above the ASCII range are skipped with a warning-level
///   diagnostic.
///
/// # Parameters
/// - `source`: The chunk of source text to tokenize.
///
/// # Returns
/// The `(token, line)` pairs followed by the diagnostics collected along the
/// way.
///
/// # Example
/// ```
/// use minicalc::interpreter::lexer::{Token, scan};
///
/// let (tokens, diagnostics) = scan("1 + 2;");
///
/// assert!(diagnostics.is_empty());
/// assert_eq!(tokens,
///            vec![(Token::Number(1.0), 1),
///                 (Token::Plus, 1),
///                 (Token::Number(2.0), 1),
///                 (Token::Semicolon, 1),]);
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<(Token, usize)>, Vec<ScanDiagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.extras.line)),
            Err(()) => {
                let slice = lexer.slice();
                let line = lexer.extras.line;

                if slice.starts_with('"') {
                    diagnostics.push(ScanDiagnostic::UnterminatedString { line });
                    break;
                }

                for character in slice.chars() {
                    if character.is_ascii() {
                        diagnostics.push(ScanDiagnostic::UnexpectedCharacter { character, line });
                    } else {
                        diagnostics.push(ScanDiagnostic::NonAsciiCharacter { character, line });
                    }
                }
            },
        }
    }

    (tokens, diagnostics)
}
