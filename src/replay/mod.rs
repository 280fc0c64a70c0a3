//! Feed a JSON-lines file of executed test cases through a [`Manager`].
//!
//! Each non-blank line is an object carrying `db_id`, `question_id`,
//! `evaluation_for` and the result fields `exec_res` / `exec_err`.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::manager::Manager;

/// Returns the number of records applied. Stops at the first bad line; records
/// before it stay in the ledger.
pub fn replay_file(manager: &mut Manager, path: &Path) -> Result<usize> {
    let file = File::open(path).with_context(|| format!("opening results file: {}", path.display()))?;
    replay_reader(manager, BufReader::new(file))
        .with_context(|| format!("replaying results file: {}", path.display()))
}

pub fn replay_reader<R: BufRead>(manager: &mut Manager, reader: R) -> Result<usize> {
    let mut applied = 0;
    for (i, line) in reader.lines().enumerate() {
        let lineno = i + 1;
        let line = line.with_context(|| format!("reading line {}", lineno))?;
        if line.trim().is_empty() {
            continue;
        }
        let entry: Value =
            serde_json::from_str(&line).with_context(|| format!("parsing line {}", lineno))?;
        apply_entry(manager, &entry).with_context(|| format!("line {}", lineno))?;
        applied += 1;
    }
    debug!(applied, "replay finished");
    Ok(applied)
}

fn apply_entry(manager: &mut Manager, entry: &Value) -> Result<()> {
    let db_id = str_field(entry, "db_id")?;
    let question_id = str_field(entry, "question_id")?;
    let context = str_field(entry, "evaluation_for")?;
    manager.update_from_value(db_id, question_id, context, entry)
}

fn str_field<'a>(entry: &'a Value, key: &str) -> Result<&'a str> {
    match entry.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
        Some(Value::String(_)) => Err(anyhow!("field `{}` must not be empty", key)),
        Some(other) => Err(anyhow!("field `{}` must be a string, got: {}", key, other)),
        None => Err(anyhow!("missing field `{}`", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    const LINES: &str = r#"{"db_id": "db1", "question_id": "q1", "evaluation_for": "baseline", "exec_res": 1, "exec_err": null}

{"db_id": "db1", "question_id": "q2", "evaluation_for": "baseline", "exec_res": 0, "exec_err": "incorrect answer"}
{"db_id": "db2", "question_id": "q1", "evaluation_for": "tuned", "exec_res": 0, "exec_err": "timeout"}
"#;

    #[test]
    fn test_replay_applies_every_line() {
        let dir = tempdir().unwrap();
        let mut m = Manager::new(dir.path()).unwrap();
        let n = replay_reader(&mut m, Cursor::new(LINES)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(m.ledger().total_for("baseline"), 2);
        assert_eq!(m.ledger().errors_for("tuned").len(), 1);
    }

    #[test]
    fn test_replay_reports_bad_line() {
        let dir = tempdir().unwrap();
        let mut m = Manager::new(dir.path()).unwrap();
        let input = format!("{}{}\n", LINES, r#"{"db_id": "db3", "evaluation_for": "x", "exec_res": 1, "exec_err": null}"#);
        let err = replay_reader(&mut m, Cursor::new(input)).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("line 5"), "Got: {}", msg);
        assert!(msg.contains("question_id"), "Got: {}", msg);
        assert_eq!(m.ledger().total_for("baseline"), 2);
    }

    #[test]
    fn test_replay_rejects_non_string_ids() {
        let dir = tempdir().unwrap();
        let mut m = Manager::new(dir.path()).unwrap();
        let line = r#"{"db_id": 7, "question_id": "q", "evaluation_for": "x", "exec_res": 1, "exec_err": null}"#;
        assert!(replay_reader(&mut m, Cursor::new(line)).is_err());
        assert!(m.ledger().is_empty());
    }
}
