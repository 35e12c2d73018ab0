//! # minicalc
//!
//! minicalc is a tree-walking interpreter for a small calculator language:
//! arithmetic with variables, a handful of named math functions, string
//! concatenation, and a print statement. Source text is lexed, parsed by
//! recursive descent, and executed against a mutable environment that
//! persists across submitted chunks.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RuntimeError, ScanDiagnostic},
    interpreter::{evaluator::core::Interpreter, lexer::scan, parser::core::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors and diagnostics that can be raised while
/// processing a chunk of source code. It standardizes error reporting and
/// carries detailed information about failures, including source locations
/// and offending lexemes.
///
/// # Responsibilities
/// - Defines diagnostic/error enums for all failure modes.
/// - Attaches line numbers and lexemes for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation and the environment to provide a complete runtime for the
/// language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The result of running one chunk of source text.
///
/// Everything a front-end needs to render both textual channels: the
/// printed output lines, and the diagnostics of each pipeline phase. No
/// error state lingers in the interpreter between chunks; each run returns
/// a fresh report.
#[derive(Debug)]
pub struct RunOutcome {
    /// Lines printed by print statements and expression statements, in
    /// statement order. On a runtime error, the lines printed before the
    /// failure are retained here.
    pub output: Vec<String>,
    /// Diagnostics reported while tokenizing. These never suppress
    /// execution.
    pub scan_diagnostics: Vec<ScanDiagnostic>,
    /// Grammar errors collected while parsing. Any entry here suppresses
    /// execution of the whole chunk.
    pub parse_errors: Vec<ParseError>,
    /// The first runtime failure, if execution was cut short.
    pub runtime_error: Option<RuntimeError>,
}

impl RunOutcome {
    /// Returns `true` when the chunk parsed and executed without errors.
    ///
    /// Warning-level scan diagnostics do not count as failures.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.parse_errors.is_empty() && self.runtime_error.is_none()
    }
}

/// Runs one chunk of source text against a persistent interpreter.
///
/// The chunk is scanned and parsed; if any parse error was recorded the
/// chunk is not executed at all, otherwise its statements run in order
/// until they finish or the first runtime error. State established in the
/// interpreter's environment remains visible to later chunks either way.
///
/// # Parameters
/// - `interpreter`: The interpreter instance carrying the environment.
/// - `source`: One chunk of source text.
///
/// # Returns
/// A [`RunOutcome`] holding the output lines and all diagnostics.
///
/// # Examples
/// ```
/// use minicalc::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::new();
///
/// let outcome = run(&mut interpreter, "int x = 10; x + 5;");
/// assert!(outcome.succeeded());
/// assert_eq!(outcome.output, vec!["15".to_string()]);
///
/// // 'x' is still bound in the next chunk.
/// let outcome = run(&mut interpreter, "x * 2;");
/// assert_eq!(outcome.output, vec!["20".to_string()]);
/// ```
pub fn run(interpreter: &mut Interpreter, source: &str) -> RunOutcome {
    let (tokens, scan_diagnostics) = scan(source);
    let (statements, parse_errors) = parse(&tokens);

    let mut output = Vec::new();
    let runtime_error = if parse_errors.is_empty() {
        interpreter.interpret(&statements, &mut output).err()
    } else {
        None
    };

    RunOutcome { output,
                 scan_diagnostics,
                 parse_errors,
                 runtime_error }
}
