//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io::{self, Read};

use super::{CliError, CliResult, ExitCode};

/// Usage text printed by `sol25 --help`.
pub const USAGE: &str = "\
Usage: sol25 [--help] < input_file > output_file

Reads a SOL25 program from standard input, checks it lexically, syntactically
and semantically, and writes its XML representation to standard output.

Options:
  --help    Print this help and exit.

Exit codes:
  0   success
  10  missing parameter or forbidden parameter combination
  11  input could not be read
  21  lexical error
  22  syntax error
  31  missing class Main or its method run
  32  undefined class, method or variable
  33  wrong arity
  34  local variable collides with a parameter
  35  other semantic error
";

/// Print usage to stdout.
pub fn print_help() -> CliResult<ExitCode> {
    print!("{USAGE}");
    Ok(ExitCode::SUCCESS)
}

/// Compile the program on stdin and print the XML document to stdout.
pub fn compile_stdin() -> CliResult<ExitCode> {
    let mut source = String::new();
    io::stdin()
        .read_to_string(&mut source)
        .map_err(|e| CliError::new(format!("Error reading standard input: {e}"), ExitCode::INPUT_ERROR))?;

    let xml = compile_source(&source)?;
    print!("{xml}");
    Ok(ExitCode::SUCCESS)
}

/// Compile `source`, converting compile errors into CLI errors.
pub fn compile_source(source: &str) -> CliResult<String> {
    tracing::debug!(bytes = source.len(), "compiling program");
    crate::compile(source).map_err(CliError::from)
}
