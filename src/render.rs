//! Terminal rendering of reports and errors.
//!
//! Everything upstream produces plain rows and reports; colour and column
//! widths are applied here only. With `color` off the output is plain text.

use std::fmt::Display;
use std::io::{self, Write};

use crossterm::style::{Color, StyledContent, Stylize};

use crate::cmd::Report;
use crate::db::{pad, Row};
use crate::error::TodoError;
use crate::fields::{format_status_marked, Status};

/// Table header colour.
pub const HEADER_GREEN: Color = Color::Rgb { r: 0x3a, g: 0x70, b: 0x07 };

/// Column widths for NO., TASK, TIME, STATUS.
pub const COL_WIDTHS: [usize; 4] = [10, 20, 20, 20];

const HEADERS: [&str; 4] = ["NO.", "TASK", "TIME", "STATUS"];

fn paint<D: Display>(color: bool, styled: StyledContent<D>) -> String {
    if color {
        styled.to_string()
    } else {
        styled.content().to_string()
    }
}

fn paint_status(color: bool, status: Status) -> String {
    let label = format_status_marked(status);
    match status {
        Status::Completed => paint(color, label.green().bold()),
        Status::Pending => paint(color, label.yellow().bold()),
    }
}

/// Write the task table, or a hint when there is nothing to show.
pub fn write_table(out: &mut impl Write, rows: &[Row], color: bool) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "{}", paint(color, "No todos found. Add some tasks!".yellow()));
    }

    let last = HEADERS.len() - 1;
    let header: Vec<String> = HEADERS
        .iter()
        .zip(COL_WIDTHS)
        .enumerate()
        .map(|(i, (h, w))| {
            let cell = if i == last { h.to_string() } else { pad(h, w) };
            paint(color, cell.with(HEADER_GREEN).bold())
        })
        .collect();
    writeln!(out, "{}", header.join(" | "))?;

    let separator: Vec<String> = COL_WIDTHS.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(out, "{}", separator.join("-|-"))?;

    for row in rows {
        let status = paint_status(color, row.status);
        writeln!(
            out,
            "{} | {} | {} | {}",
            paint(color, pad(&row.number.to_string(), COL_WIDTHS[0]).blue()),
            pad(&row.task, COL_WIDTHS[1]),
            pad(&row.time, COL_WIDTHS[2]),
            status
        )?;
    }

    writeln!(out, "{}", paint(color, format!("Total tasks: {}", rows.len()).dim()))
}

/// Write the human-readable result of an operation.
pub fn write_report(out: &mut impl Write, report: &Report, color: bool) -> io::Result<()> {
    match report {
        Report::Added { task, time } => {
            writeln!(out, "{}", paint(color, format!("Added task: {task} at {time}").green()))
        }
        Report::Listing(rows) => write_table(out, rows, color),
        Report::Toggled { number, status } => writeln!(
            out,
            "{}{}",
            paint(color, format!("Updated Todo #{number} status to: ").red().bold()),
            paint(color, format_status_marked(*status).cyan().underlined())
        ),
        Report::Removed(task) => writeln!(
            out,
            "{}{}",
            paint(color, "Removed Todo: ".red().bold()),
            paint(color, task.description.as_str().cyan().underlined())
        ),
        Report::Cleared => {
            writeln!(out, "{}", paint(color, "All tasks have been deleted.".red().bold()))
        }
    }
}

/// Write a user-input error message ("Invalid input." and friends).
pub fn write_user_error(out: &mut impl Write, err: &TodoError, color: bool) -> io::Result<()> {
    writeln!(out, "{}", paint(color, err.to_string().red()))
}
