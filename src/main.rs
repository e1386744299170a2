//! Entry point for tellm, a terminal front end for local language models.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! runs one request, and prints the result on stdout. Every status message
//! and error goes to stderr.

mod chunk;
mod cli;
mod compose;
mod config;
mod constants;
mod error;
mod input;
mod logging;
mod output;
mod pipeline;
mod provider;
mod summarize;
mod tokens;

#[cfg(test)]
mod testing;

use std::io::Write;
use std::process::ExitCode;

use output::{StatusSink, StderrStatus};

/// Runs the tellm CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments, and exits with `1` on any failure.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version land here too.
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    logging::init(cli.verbose);

    let mut status = StderrStatus::new();
    let result = match input::read_stdin() {
        Ok(payload) => cli::run(cli, payload, &mut status).await,
        Err(err) => Err(err.into()),
    };
    match result {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            match writeln!(stdout, "{text}").and_then(|_| stdout.flush()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            }
        }
        Err(err) => {
            tracing::debug!(error = ?err, "invocation failed");
            status.error(&err);
            ExitCode::from(err.exit_code())
        }
    }
}
