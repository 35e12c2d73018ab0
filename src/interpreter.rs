/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// performs arithmetic and string concatenation, manages variable state, and
/// collects printed output. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Owns the environment holding variables and constants.
/// - Reports runtime errors such as division by zero or invalid operands.
pub mod evaluator;
/// The environment module stores variable bindings.
///
/// A single flat namespace maps identifiers to values for the lifetime of
/// one interpreter instance. The math constants `PI` and `E` are installed
/// at construction as ordinary bindings.
///
/// # Responsibilities
/// - Installs, overwrites and looks up bindings.
/// - Distinguishes unbound names from names declared without a value.
pub mod environment;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source location.
/// - Handles numeric and string literals, identifiers, and keywords.
/// - Reports scan diagnostics for invalid or malformed input without ever
///   failing fatally.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. On a grammar violation it records the error and
/// resynchronizes at the next statement boundary, so several errors in one
/// chunk can all be reported.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Recovers per statement and accumulates every error it finds.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the two value types that exist at runtime, numbers
/// and text, together with the typed accessors and the canonical display
/// rule used whenever a value is printed or concatenated.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements typed access with type-mismatch errors.
/// - Implements the canonical textual form of numeric values.
pub mod value;
