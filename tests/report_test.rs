use anyhow::Result;
use exec_stats::{replay, ExecResult, Manager};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_report_samples_first_five_sorted() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = Manager::new(dir.path())?;
    // insert in reverse so the sample has to come from the sorted order
    for i in (0..12).rev() {
        manager.update("db", &format!("q{:02}", i), "ctx", &ExecResult::success());
    }

    let report = manager.render_report();
    let line = report
        .lines()
        .find(|l| l.contains("Correct IDs (sample)"))
        .expect("sample line present");
    assert_eq!(line.matches("(\"db\"").count(), 5);
    assert!(line.contains("\"q00\"") && line.contains("\"q04\""));
    assert!(!line.contains("\"q05\""));
    assert!(report.contains("  Total     : 12\n"));
    Ok(())
}

#[test]
fn test_report_lists_contexts_sorted_and_is_repeatable() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = Manager::new(dir.path())?;
    manager.update("db", "q1", "zeta", &ExecResult::error("division by zero"));
    manager.update("db", "q1", "alpha", &ExecResult::incorrect());

    let first = manager.render_report();
    let second = manager.render_report();
    assert_eq!(first, second);

    let alpha = first.find("Evaluation Context: alpha").expect("alpha listed");
    let zeta = first.find("Evaluation Context: zeta").expect("zeta listed");
    assert!(alpha < zeta);
    assert!(first.contains("! Error IDs (sample): [(\"db\", \"q1\", \"division by zero\")]"));
    assert!(!first.contains("Correct IDs"));
    Ok(())
}

#[test]
fn test_replay_file_end_to_end() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("results.jsonl");
    fs::write(
        &input,
        concat!(
            r#"{"db_id": "db1", "question_id": "q1", "evaluation_for": "baseline", "exec_res": 1, "exec_err": null}"#, "\n",
            r#"{"db_id": "db1", "question_id": "q2", "evaluation_for": "baseline", "exec_res": 0, "exec_err": "incorrect answer"}"#, "\n",
            r#"{"db_id": "db2", "question_id": "q1", "evaluation_for": "baseline", "exec_res": 0, "exec_err": "timeout"}"#, "\n",
        ),
    )?;

    let mut manager = Manager::new(dir.path())?;
    assert_eq!(replay::replay_file(&mut manager, &input)?, 3);
    let summary = manager.summary();
    let counts = summary.counts["baseline"];
    assert_eq!((counts.correct, counts.incorrect, counts.error, counts.total), (1, 1, 1, 3));
    Ok(())
}

#[test]
fn test_replay_missing_file_is_an_error() -> Result<()> {
    let dir = tempdir()?;
    let mut manager = Manager::new(dir.path())?;
    let err = replay::replay_file(&mut manager, &dir.path().join("missing.jsonl")).unwrap_err();
    assert!(format!("{:#}", err).contains("missing.jsonl"));
    Ok(())
}
