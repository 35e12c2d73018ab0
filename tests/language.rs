use std::fs;

use minicalc::{RunOutcome, error::RuntimeError, interpreter::evaluator::core::Interpreter, run};
use walkdir::WalkDir;

/// Runs one chunk against a fresh interpreter.
fn run_chunk(source: &str) -> RunOutcome {
    let mut interpreter = Interpreter::new();
    run(&mut interpreter, source)
}

fn assert_prints(source: &str, expected: &[&str]) {
    let outcome = run_chunk(source);
    assert!(outcome.succeeded(), "Chunk failed: {source}\n{outcome:?}");
    assert_eq!(outcome.output, expected, "Wrong output for: {source}");
}

fn assert_runtime_error(source: &str) -> RuntimeError {
    let outcome = run_chunk(source);
    assert!(outcome.parse_errors.is_empty(),
            "Expected a runtime error but parsing failed: {source}\n{outcome:?}");
    outcome.runtime_error
           .unwrap_or_else(|| panic!("Expected a runtime error for: {source}"))
}

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let outcome = run_chunk(&script);
        assert!(outcome.succeeded(), "Demo script {path:?} failed:\n{outcome:?}");
    }

    assert!(count > 0, "No demo scripts found in demos/");
}

#[test]
fn arithmetic_and_precedence() {
    assert_prints("1 + 2;", &["3"]);
    assert_prints("10 / 4;", &["2.5"]);
    assert_prints("1 + 2 * 3;", &["7"]);
    assert_prints("(1 + 2) * 3;", &["9"]);
    assert_prints("2 * 3 - 1;", &["5"]);
    assert_prints("-5 + 3;", &["-2"]);
    assert_prints("--5;", &["5"]);
}

#[test]
fn math_constants_print_canonically() {
    assert_prints("PI;", &["3.141592653589793"]);
    assert_prints("E;", &["2.718281828459045"]);
}

#[test]
fn numeric_display_is_canonicalized() {
    // Near-zero collapses to 0, near-integers lose their fractional suffix,
    // everything else keeps full precision.
    assert_prints("sin(PI);", &["0"]);
    assert_prints("sin(PI / 2);", &["1"]);
    assert_prints("2.5 + 2.5;", &["5"]);
    assert_prints("0.1 + 0.2;", &["0.30000000000000004"]);
}

#[test]
fn square_root() {
    assert_prints("sqrt(16);", &["4"]);
    assert_prints("sqrt(2 + 2);", &["2"]);

    let outcome = run_chunk("sqrt(-1);");
    assert!(outcome.output.is_empty());
    assert!(matches!(outcome.runtime_error, Some(RuntimeError::NegativeSqrt { .. })));
}

#[test]
fn natural_logarithm() {
    assert_prints("log(E);", &["1"]);

    let outcome = run_chunk("log(10);");
    let value: f64 = outcome.output[0].parse().unwrap();
    assert!((value - std::f64::consts::LN_10).abs() < 1e-12);

    assert!(matches!(assert_runtime_error("log(0);"), RuntimeError::NonPositiveLog { .. }));
    assert!(matches!(assert_runtime_error("log(-1);"), RuntimeError::NonPositiveLog { .. }));
}

#[test]
fn trigonometric_functions_use_radians() {
    assert_prints("cos(0);", &["1"]);
    assert_prints("tan(0);", &["0"]);

    // sin(90) is the sine of 90 radians, not of a right angle.
    let outcome = run_chunk("sin(90);");
    assert!(outcome.succeeded());
    assert_ne!(outcome.output, vec!["1".to_string()]);
}

#[test]
fn absolute_value() {
    assert_prints("abs(-5);", &["5"]);
    assert_prints("abs(5);", &["5"]);
    assert_prints("abs(0);", &["0"]);
}

#[test]
fn exponentiation() {
    assert_prints("pow(2, 10);", &["1024"]);

    let outcome = run_chunk("pow(2, 0.5);");
    let value: f64 = outcome.output[0].parse().unwrap();
    assert!((value - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn triangle_area() {
    assert_prints("triangleArea(3, 4, 5);", &["6"]);

    let outcome = run_chunk("triangleArea(2.5, 2.5, 2.5);");
    let value: f64 = outcome.output[0].parse().unwrap();
    assert!((value - 2.706_329_386_826_371).abs() < 1e-12);

    assert!(matches!(assert_runtime_error("triangleArea(1, 1, 5);"),
                     RuntimeError::TriangleInequality { .. }));
    assert!(matches!(assert_runtime_error("triangleArea(0, 4, 5);"),
                     RuntimeError::NonPositiveSide { .. }));
    assert!(matches!(assert_runtime_error("triangleArea(-3, 4, 5);"),
                     RuntimeError::NonPositiveSide { .. }));
}

#[test]
fn declarations_bind_variables() {
    assert_prints("int x = 10; x + 5;", &["15"]);
    assert_prints("double y = 2.5; y * 2;", &["5"]);
    assert_prints("int x = 1; double x = 2; x;", &["2"]);
}

#[test]
fn declared_type_keyword_has_no_runtime_effect() {
    // 'int' does not truncate; the keyword is syntactic only.
    assert_prints("int x = 2.5; x;", &["2.5"]);
    assert_prints("double y = 7; y;", &["7"]);
}

#[test]
fn declaration_without_initializer_holds_no_value() {
    // Reading the empty binding produces no output line; using it in an
    // operation or print statement is a runtime error.
    assert_prints("int x; x;", &[]);
    assert!(matches!(assert_runtime_error("int x; x + 1;"), RuntimeError::MissingValue { .. }));
    assert!(matches!(assert_runtime_error("int x; print x;"), RuntimeError::MissingValue { .. }));
}

#[test]
fn assignment_requires_prior_declaration() {
    assert!(matches!(assert_runtime_error("x = 20;"),
                     RuntimeError::UndefinedVariable { .. }));
    assert_prints("int x = 1; x = 20;", &["20"]);
}

#[test]
fn assignment_is_right_associative_and_echoes() {
    assert_prints("int a = 1; int b = 2; a = b = 5; a; b;", &["5", "5", "5"]);
}

#[test]
fn constants_are_ordinary_bindings() {
    // PI and E are not protected from reassignment.
    assert_prints("PI = 1; PI;", &["1", "1"]);
    assert_prints("E = 0; E;", &["0", "0"]);
}

#[test]
fn environment_persists_across_chunks() {
    let mut interpreter = Interpreter::new();

    assert!(run(&mut interpreter, "int x = 10;").succeeded());

    let outcome = run(&mut interpreter, "x * 2;");
    assert_eq!(outcome.output, vec!["20".to_string()]);
}

#[test]
fn string_concatenation() {
    assert_prints("\"a\" + \"b\" + \"c\";", &["abc"]);
    assert_prints("1 + \"a\";", &["1a"]);
    assert_prints("print \"结果: \" + 10;", &["结果: 10"]);
    assert_prints("print \"area: \" + triangleArea(3, 4, 5);", &["area: 6"]);
}

#[test]
fn non_numeric_operands_are_type_errors() {
    assert!(matches!(assert_runtime_error("\"a\" - 1;"), RuntimeError::ExpectedNumber { .. }));
    assert!(matches!(assert_runtime_error("2 * \"a\";"), RuntimeError::ExpectedNumber { .. }));
    assert!(matches!(assert_runtime_error("-\"a\";"), RuntimeError::ExpectedNumber { .. }));
    assert!(matches!(assert_runtime_error("sin(\"a\");"), RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(assert_runtime_error("5 / 0;"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(assert_runtime_error("5 / (2 - 2);"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn runtime_error_reports_line_and_lexeme() {
    let error = assert_runtime_error("int x = 1;\n5 / 0;");
    assert!(matches!(error, RuntimeError::DivisionByZero { line: 2 }));
    assert_eq!(error.lexeme(), Some("/"));
}

#[test]
fn runtime_error_keeps_earlier_effects() {
    let mut interpreter = Interpreter::new();

    let outcome = run(&mut interpreter, "print 1; int x = 7; 5 / 0; print 2;");
    assert_eq!(outcome.output, vec!["1".to_string()]);
    assert!(matches!(outcome.runtime_error, Some(RuntimeError::DivisionByZero { .. })));

    // The binding installed before the failure survives into the next chunk.
    let outcome = run(&mut interpreter, "x;");
    assert_eq!(outcome.output, vec!["7".to_string()]);
}

#[test]
fn parse_errors_suppress_the_whole_chunk() {
    let outcome = run_chunk("1 + ; print 2;");
    assert_eq!(outcome.parse_errors.len(), 1);
    assert!(outcome.output.is_empty());
}

#[test]
fn recovery_reports_every_error_in_a_chunk() {
    let outcome = run_chunk("1 + ; 2 * ; print 3;");
    assert_eq!(outcome.parse_errors.len(), 2);
    assert!(outcome.output.is_empty());
}

#[test]
fn invalid_assignment_target_is_a_parse_error() {
    let outcome = run_chunk("1 + 2 = 3;");
    assert!(outcome.parse_errors
                   .iter()
                   .any(|e| matches!(e, minicalc::error::ParseError::InvalidAssignmentTarget { .. })));
    assert!(outcome.output.is_empty());
}

#[test]
fn statements_require_a_terminator() {
    let outcome = run_chunk("1 + 2");
    assert!(!outcome.parse_errors.is_empty());
    assert!(outcome.output.is_empty());
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    // `123.` lexes as the number 123 followed by a stray dot.
    let outcome = run_chunk("123.;");
    assert!(!outcome.parse_errors.is_empty());
}

#[test]
fn comments_are_ignored() {
    assert_prints("1 + 2; // the rest of this line is a comment", &["3"]);
}

#[test]
fn unexpected_ascii_characters_are_skipped() {
    let outcome = run_chunk("@ 1 + 2;");
    assert_eq!(outcome.output, vec!["3".to_string()]);
    assert_eq!(outcome.scan_diagnostics.len(), 1);
    assert!(!outcome.scan_diagnostics[0].is_warning());
}

#[test]
fn non_ascii_characters_are_skipped_with_a_warning() {
    let outcome = run_chunk("1 + 2; 你好");
    assert_eq!(outcome.output, vec!["3".to_string()]);
    assert_eq!(outcome.scan_diagnostics.len(), 2);
    assert!(outcome.scan_diagnostics.iter().all(minicalc::error::ScanDiagnostic::is_warning));
}

#[test]
fn unterminated_string_halts_scanning() {
    let outcome = run_chunk("print \"abc; print 5;");
    assert!(outcome.scan_diagnostics
                   .iter()
                   .any(|d| matches!(d, minicalc::error::ScanDiagnostic::UnterminatedString { .. })));
    assert!(!outcome.parse_errors.is_empty());
    assert!(outcome.output.is_empty());
}
