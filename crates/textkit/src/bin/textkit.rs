//! `textkit` - run one text operation over stdin.
//!
//! Usage:
//!   textkit <command> [arg]
//!
//! The input text is read from stdin, minus one trailing line ending, and
//! the result is written to stdout. Run without arguments for the command
//! list. Diagnostics go to stderr, filtered by `RUST_LOG`.

use std::io::{self, Read, Write};

use textkit::cli::{strip_trailing_newline, CliError, Command};

/// Initializes a tracing subscriber that logs to stderr.
fn subscriber() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let command = Command::parse(std::env::args().skip(1))?;

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;

    let output = command.run(strip_trailing_newline(&buf))?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn main() {
    subscriber();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
