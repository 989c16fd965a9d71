//! Command implementations for the CLI interface.
//!
//! `todo` takes five operation flags. Exactly one operation runs per
//! invocation; when several flags are given the first in the order
//! add > show > update > delete > delete-all wins. Handlers work on an
//! in-memory `Database` and return a `Report` describing what happened, so
//! nothing here prints or styles output.

use std::io::Write;
use std::path::Path;

use clap::{Args, Subcommand};
use clap_complete::{generate, Shell};
use tracing::{debug, info};

use crate::db::*;
use crate::error::{Result, TodoError};
use crate::fields::Status;
use crate::task::Task;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage your todos.
    Todo(TodoArgs),

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Operation flags for the `todo` subcommand.
#[derive(Args, Debug, Default, Clone)]
pub struct TodoArgs {
    /// Add a task to the list, given as "<taskName>,<taskTime>".
    #[arg(short = 'a', long = "add", value_name = "TASK,TIME", allow_hyphen_values = true)]
    pub add: Option<String>,

    /// Show all tasks.
    #[arg(short = 's', long = "show")]
    pub show: bool,

    /// Mark a task as done/undone.
    #[arg(short = 'u', long = "update", value_name = "NUM", allow_hyphen_values = true)]
    pub update: Option<String>,

    /// Delete a task.
    #[arg(short = 'd', long = "delete", value_name = "NUM", allow_hyphen_values = true)]
    pub delete: Option<String>,

    /// Delete the entire list (also -dA).
    #[arg(long = "deleteAll", visible_alias = "delete-all")]
    pub delete_all: bool,
}

/// The single operation selected for this invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add(String),
    Show,
    Update(String),
    Delete(String),
    DeleteAll,
}

impl TodoArgs {
    /// Pick the operation to run, first flag wins.
    pub fn operation(self) -> Option<Operation> {
        if let Some(spec) = self.add {
            Some(Operation::Add(spec))
        } else if self.show {
            Some(Operation::Show)
        } else if let Some(num) = self.update {
            Some(Operation::Update(num))
        } else if let Some(num) = self.delete {
            Some(Operation::Delete(num))
        } else if self.delete_all {
            Some(Operation::DeleteAll)
        } else {
            None
        }
    }
}

impl Operation {
    /// Whether a successful run must be written back to the store.
    pub fn mutates(&self) -> bool {
        !matches!(self, Operation::Show)
    }
}

/// Outcome of an operation, rendered by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Added { task: String, time: String },
    Listing(Vec<Row>),
    Toggled { number: usize, status: Status },
    Removed(Task),
    Cleared,
}

/// Append a new pending task parsed from `<taskName>,<taskTime>`.
pub fn cmd_add(db: &mut Database, spec: &str) -> Result<Report> {
    let (task, time) = parse_task_spec(spec)?;
    db.tasks.push(Task::new(task.clone(), time.clone()));
    info!(task = %task, time = %time, "added task");
    Ok(Report::Added { task, time })
}

/// List all tasks as table rows.
pub fn cmd_show(db: &Database) -> Report {
    if db.is_empty() {
        debug!("no tasks to show");
    }
    Report::Listing(db.rows())
}

/// Toggle completion of the task at a 1-based position.
pub fn cmd_update(db: &mut Database, table_num: &str) -> Result<Report> {
    let idx = db.position(table_num)?;
    let status = db.tasks[idx].toggle();
    info!(number = idx + 1, ?status, "toggled task");
    Ok(Report::Toggled { number: idx + 1, status })
}

/// Remove the task at a 1-based position; later tasks shift down by one.
pub fn cmd_delete(db: &mut Database, table_num: &str) -> Result<Report> {
    let idx = db.position(table_num)?;
    let removed = db.tasks.remove(idx);
    info!(number = idx + 1, task = %removed.description, "removed task");
    Ok(Report::Removed(removed))
}

/// Replace the whole list with an empty one.
pub fn cmd_delete_all(db: &mut Database) -> Report {
    info!(count = db.len(), "cleared all tasks");
    db.tasks.clear();
    Report::Cleared
}

/// Apply one operation to an in-memory database.
pub fn apply(db: &mut Database, op: &Operation) -> Result<Report> {
    match op {
        Operation::Add(spec) => cmd_add(db, spec),
        Operation::Show => Ok(cmd_show(db)),
        Operation::Update(num) => cmd_update(db, num),
        Operation::Delete(num) => cmd_delete(db, num),
        Operation::DeleteAll => Ok(cmd_delete_all(db)),
    }
}

/// Run the `todo` subcommand against the store at `db_path`.
///
/// Load, apply, and save only when the operation succeeded and mutates.
/// Clearing never reads the old file.
pub fn cmd_todo(db_path: &Path, args: TodoArgs) -> Result<Report> {
    let Some(op) = args.operation() else {
        debug!("no operation flag given");
        return Err(TodoError::NoOperation);
    };

    let mut db = match op {
        Operation::DeleteAll => Database::default(),
        _ => Database::load(db_path)?,
    };

    let report = apply(&mut db, &op).inspect_err(|e| debug!(error = ?e, "rejected input"))?;
    if op.mutates() {
        db.save(db_path)?;
    }
    Ok(report)
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell, out: &mut impl Write) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, out);
}
