//! Derived field types for tasks.

/// Task completion status as shown to the user.
///
/// The store only keeps a `done` flag; this is the display-side view of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    pub fn from_done(done: bool) -> Self {
        if done {
            Status::Completed
        } else {
            Status::Pending
        }
    }

    /// Marker glyph shown in front of the label.
    pub fn marker(self) -> char {
        match self {
            Status::Completed => '✓',
            Status::Pending => '⧖',
        }
    }
}

/// Format a status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Completed => "Completed",
        Status::Pending => "Pending",
    }
}

/// Format a status with its marker, e.g. "✓ Completed".
pub fn format_status_marked(s: Status) -> String {
    format!("{} {}", s.marker(), format_status(s))
}
