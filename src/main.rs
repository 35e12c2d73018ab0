use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use minicalc::{RunOutcome, interpreter::evaluator::core::Interpreter, run};

/// minicalc is an easy to use calculator language with variables, math
/// functions, string concatenation and print statements.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells minicalc to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Source text to execute; starts an interactive prompt when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) => {
            let script = if args.file {
                fs::read_to_string(&contents).unwrap_or_else(|_| {
                    eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                    std::process::exit(1);
                })
            } else {
                contents
            };

            let mut interpreter = Interpreter::new();
            report(&run(&mut interpreter, &script));
        },
        None => run_prompt(),
    }
}

/// The interactive read loop.
///
/// One interpreter instance serves the whole session, so variables declared
/// on one line stay available on later lines. A missing trailing `;` is
/// appended before the line is submitted.
fn run_prompt() {
    println!("minicalc interactive calculator");
    println!("Supports +, -, *, /, sin(), cos(), tan(), sqrt(), pow(), log(), abs(), triangleArea()");
    println!("Supports the math constants PI and E");
    println!("Supports variable declarations (e.g. int a = 5; or double b = 3.14;)");
    println!("Supports print statements (e.g. print \"result: \" + 10;)");
    println!("Type 'help' for more, 'exit' to quit");
    println!();

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {},
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        if line == "help" {
            print_help();
            continue;
        }

        let chunk = if line.ends_with(';') {
            line.to_string()
        } else {
            format!("{line};")
        };

        report(&run(&mut interpreter, &chunk));
        println!();
    }
}

/// Renders one run's report: output lines to stdout, diagnostics to stderr.
fn report(outcome: &RunOutcome) {
    for diagnostic in &outcome.scan_diagnostics {
        eprintln!("{diagnostic}");
    }

    for error in &outcome.parse_errors {
        eprintln!("{error}");
    }
    if !outcome.parse_errors.is_empty() {
        eprintln!("Syntax error, nothing was executed.");
    }

    for line in &outcome.output {
        println!("{line}");
    }

    if let Some(error) = &outcome.runtime_error {
        eprintln!("{error}");
        if let Some(lexeme) = error.lexeme() {
            eprintln!("Error occurred at '{lexeme}'.");
        }
    }
}

fn print_help() {
    println!();
    println!("===== minicalc language help =====");
    println!("Syntax rules:");
    println!("  1. Every statement ends with a semicolon (;) - the prompt adds a missing one");
    println!("  2. Basic arithmetic: +, -, *, /");
    println!("  3. Math functions: sin, cos, tan, sqrt, pow, log, abs, triangleArea");
    println!("  4. Variable declarations: int x = 10; or double y = 3.14;");
    println!("  5. Print statements: print \"result: \" + x;");
    println!();
    println!("Available math constants:");
    println!("  PI - circle constant (3.141592...)");
    println!("  E - base of the natural logarithm (2.718281...)");
    println!();
    println!("Function examples:");
    println!("  sin(PI / 2) - sine of PI/2 radians");
    println!("  cos(0) - cosine of 0 radians");
    println!("  tan(PI / 4) - tangent of PI/4 radians");
    println!("  sqrt(16) - square root of 16");
    println!("  pow(2, 3) - 2 raised to the 3rd power");
    println!("  log(10) - natural logarithm of 10");
    println!("  abs(-5) - absolute value of -5");
    println!("  triangleArea(3, 4, 5) - triangle area from the three side lengths");
    println!();
    println!("Special commands:");
    println!("  help - show this help text");
    println!("  exit - quit the program");
    println!("==================================");
    println!();
}
