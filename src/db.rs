//! Task store and table helpers.
//!
//! This module provides the `Database` struct holding the ordered task list,
//! its JSON persistence, position parsing for 1-based task numbers, and the
//! plain rows used to render the task table.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::fields::Status;
use crate::task::Task;

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "todos.json";

/// In-memory task list. Serialises as a bare JSON array.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Database {
    pub tasks: Vec<Task>,
}

impl Database {
    /// Load the task list from a JSON file. A missing file is an empty list.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no task file yet, starting empty");
                return Ok(Database::default());
            }
            Err(source) => {
                return Err(TodoError::StorageRead { path: path.to_path_buf(), source });
            }
        };
        let db: Database = serde_json::from_str(&buf)
            .map_err(|source| TodoError::MalformedStore { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), count = db.tasks.len(), "loaded tasks");
        Ok(db)
    }

    /// Save the full list, replacing the previous contents (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<()> {
        let write_err =
            |source: std::io::Error| TodoError::StorageWrite { path: path.to_path_buf(), source };
        let tmp = path.with_extension("json.tmp");
        let data = serde_json::to_string_pretty(self).map_err(|e| write_err(e.into()))?;
        if let Err(e) = write_then_rename(&tmp, path, data.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }
        debug!(path = %path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Resolve a 1-based task number given as text to a zero-based index.
    pub fn position(&self, table_num: &str) -> Result<usize> {
        let n: usize = table_num
            .trim()
            .parse()
            .map_err(|_| TodoError::InvalidIndex(table_num.to_string()))?;
        if n == 0 || n > self.tasks.len() {
            return Err(TodoError::InvalidIndex(table_num.to_string()));
        }
        Ok(n - 1)
    }

    /// Plain table rows in display order.
    pub fn rows(&self) -> Vec<Row> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, t)| Row {
                number: i + 1,
                task: t.description.clone(),
                time: t.scheduled_time.clone(),
                status: t.status(),
            })
            .collect()
    }
}

fn write_then_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(tmp)?;
    f.write_all(data)?;
    f.flush()?;
    drop(f);
    fs::rename(tmp, path)
}

/// One line of the task table, before any styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub number: usize,
    pub task: String,
    pub time: String,
    pub status: Status,
}

/// Split an `--add` value into trimmed name and time at the first comma.
pub fn parse_task_spec(raw: &str) -> Result<(String, String)> {
    let (name, time) = raw
        .split_once(',')
        .ok_or_else(|| TodoError::InvalidTaskSpec(raw.to_string()))?;
    Ok((name.trim().to_string(), time.trim().to_string()))
}

/// Pad a cell to a column width, counting characters rather than bytes.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Database {
        Database {
            tasks: vec![
                Task::new("Write report", "5pm"),
                Task { done: true, ..Task::new("Call mum", "tomorrow, after lunch") },
                Task::new("Gym", ""),
            ],
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let db = Database::load(&dir.path().join("todos.json")).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Database::load(&path).unwrap_err();
        assert!(matches!(err, TodoError::MalformedStore { .. }));
    }

    #[test]
    fn test_load_wrong_shape_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, r#"[{ "task": "x" }]"#).unwrap();
        assert!(matches!(Database::load(&path), Err(TodoError::MalformedStore { .. })));
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let dir = tempdir().unwrap();
        let err = Database::load(dir.path()).unwrap_err();
        assert!(matches!(err, TodoError::StorageRead { .. }));
    }

    #[test]
    fn test_save_then_load_preserves_order_and_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let db = sample();
        db.save(&path).unwrap();
        let loaded = Database::load(&path).unwrap();
        assert_eq!(loaded, db);

        loaded.save(&path).unwrap();
        assert_eq!(Database::load(&path).unwrap(), db);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_save_writes_bare_array_and_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        sample().save(&path).unwrap();
        Database { tasks: vec![Task::new("Write report", "5pm")] }.save(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "task": "Write report", "taskTime": "5pm", "done": false }])
        );
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("todos.json");
        assert!(matches!(sample().save(&path), Err(TodoError::StorageWrite { .. })));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        assert!(matches!(sample().save(&path), Err(TodoError::StorageWrite { .. })));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_position_bounds() {
        let db = sample();
        assert_eq!(db.position("1").unwrap(), 0);
        assert_eq!(db.position(" 3 ").unwrap(), 2);
        for bad in ["0", "4", "-1", "abc", "", "1.5"] {
            assert!(matches!(db.position(bad), Err(TodoError::InvalidIndex(_))), "{bad}");
        }
        assert!(Database::default().position("1").is_err());
    }

    #[test]
    fn test_rows_are_numbered_from_one() {
        let rows = sample().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].status, Status::Completed);
        assert_eq!(rows[2].task, "Gym");
    }

    #[test]
    fn test_parse_task_spec() {
        assert_eq!(
            parse_task_spec(" Buy milk , 9am ").unwrap(),
            ("Buy milk".to_string(), "9am".to_string())
        );
        assert_eq!(
            parse_task_spec("Call mum,tomorrow, after lunch").unwrap().1,
            "tomorrow, after lunch"
        );
        assert!(matches!(parse_task_spec("no comma"), Err(TodoError::InvalidTaskSpec(_))));
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("✓ ok", 5), "✓ ok ");
        assert_eq!(pad("toolong", 3), "toolong");
    }
}
