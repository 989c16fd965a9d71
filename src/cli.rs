use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::db::DEFAULT_DB_FILE;

/// Simple, file-backed todo CLI.
/// Storage defaults to ./todos.json or a path passed via --db.
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "CLI to show, add, update and delete todos")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true, default_value = DEFAULT_DB_FILE)]
    pub db: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Rewrite the two-letter `-dA` short flag, which clap cannot declare, to `--deleteAll`.
pub fn normalise_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| if arg == "-dA" { OsString::from("--deleteAll") } else { arg })
        .collect()
}
