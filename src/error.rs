/// Scan diagnostics.
///
/// Defines the diagnostics the lexer can report while tokenizing a chunk.
/// Scan diagnostics are never fatal: offending characters are skipped (or,
/// for an unterminated string, the rest of the chunk is left untokenized)
/// and the pipeline continues with whatever tokens were produced.
pub mod scan_diagnostic;
/// Parsing errors.
///
/// Defines all error types that can occur while parsing the token stream.
/// Parse errors include missing terminators, malformed call forms, invalid
/// assignment targets, and any other grammar violations detected before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, undefined variables, division by zero,
/// and the domain violations of the named math functions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use scan_diagnostic::ScanDiagnostic;
