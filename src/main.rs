//! # todo - a small file-backed task tracker
//!
//! Add, list, toggle and delete short tasks kept in a JSON file between runs.
//!
//! ```bash
//! todo todo --add "Buy milk, 9am"
//! todo todo --show
//! todo todo --update 1      # toggle done/pending
//! todo todo --delete 2
//! todo todo -dA             # clear everything
//! ```
//!
//! Tasks are addressed by their number in `--show`, which shifts after a
//! delete. Data lives in `./todos.json` unless `--db <PATH>` is given.
//!
//! Exit status is 0 on success, 2 when no operation was given, 3 for an
//! invalid task number, 4 for a malformed `--add` value, 5 when the task
//! file cannot be read or parsed and 6 when it cannot be written.

use std::io::{IsTerminal, Write};

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod db;
pub mod error;
pub mod fields;
pub mod logging;
pub mod render;
pub mod task;

use cli::{normalise_args, Cli};
use cmd::*;

fn main() {
    logging::init_logging();
    let cli = Cli::parse_from(normalise_args(std::env::args_os()));

    let stdout = std::io::stdout();
    let color = stdout.is_terminal();
    let code = run(cli, &mut stdout.lock(), &mut std::io::stderr(), color);
    std::process::exit(code);
}

/// Run one parsed invocation and return the process exit status.
///
/// Results and user-input errors go to `out`; store failures go to `err`.
fn run(cli: Cli, out: &mut impl Write, err: &mut impl Write, color: bool) -> i32 {
    let args = match cli.command {
        Commands::Completions { shell } => {
            cmd_completions(shell, out);
            return 0;
        }
        Commands::Todo(args) => args,
    };

    match cmd_todo(&cli.db, args) {
        Ok(report) => match render::write_report(out, &report, color) {
            Ok(()) => 0,
            Err(e) => {
                let _ = writeln!(err, "Failed to write output: {e}");
                1
            }
        },
        Err(e) if e.is_user_error() => {
            if let Err(write_err) = render::write_user_error(out, &e, color) {
                let _ = writeln!(err, "Failed to write output: {write_err}");
            }
            e.exit_code()
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {e}");
            e.exit_code()
        }
    }
}
