//! Statistics manager: owns the ledger and the `-statistics.json` snapshot.

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tracing::debug;

use crate::{
    printer::ReportPrinter,
    record::ExecResult,
    stats::{Ledger, Summary},
};

pub const STATISTICS_FILE_NAME: &str = "-statistics.json";

#[derive(Debug)]
pub struct Manager {
    ledger: Ledger,
    statistics_file_path: PathBuf,
}

impl Manager {
    /// Starts with an empty ledger. When the snapshot file does not exist yet
    /// it is created and an empty snapshot written to it right away; an
    /// existing file is left alone until the next dump.
    pub fn new(result_directory: impl AsRef<Path>) -> Result<Self> {
        let statistics_file_path = result_directory.as_ref().join(STATISTICS_FILE_NAME);
        let manager = Self { ledger: Ledger::new(), statistics_file_path };
        if !manager.statistics_file_path.exists() {
            fs::File::create(&manager.statistics_file_path).with_context(|| {
                format!("creating statistics file: {}", manager.statistics_file_path.display())
            })?;
            manager.dump_to_file()?;
        }
        debug!(path = %manager.statistics_file_path.display(), "statistics manager ready");
        Ok(manager)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn statistics_file_path(&self) -> &Path {
        &self.statistics_file_path
    }

    pub fn update(&mut self, db_id: &str, question_id: &str, context: &str, result: &ExecResult) {
        self.ledger.record(db_id, question_id, context, result.outcome());
    }

    /// Like [`Manager::update`] for an untyped JSON result. A malformed record
    /// is returned as an error and nothing is recorded.
    pub fn update_from_value(
        &mut self,
        db_id: &str,
        question_id: &str,
        context: &str,
        result: &Value,
    ) -> Result<()> {
        let result = ExecResult::from_value(result)
            .with_context(|| format!("invalid result for {}/{} ({})", db_id, question_id, context))?;
        self.update(db_id, question_id, context, &result);
        Ok(())
    }

    pub fn summary(&self) -> Summary {
        self.ledger.to_summary()
    }

    /// Overwrites the snapshot file with the current summary (4-space indented
    /// JSON, non-ASCII kept verbatim). The write is not atomic.
    pub fn dump_to_file(&self) -> Result<()> {
        let path = &self.statistics_file_path;
        let summary = self.summary();
        let file = fs::File::create(path)
            .with_context(|| format!("opening statistics file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        let mut ser = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        summary
            .serialize(&mut ser)
            .with_context(|| format!("writing statistics file: {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("writing statistics file: {}", path.display()))?;
        debug!(path = %path.display(), contexts = summary.counts.len(), "statistics dumped");
        Ok(())
    }

    pub fn render_report(&self) -> String {
        ReportPrinter::default().render(&self.summary())
    }

    pub fn print_report(&self) {
        self.print_report_with(&ReportPrinter::default());
    }

    pub fn print_report_with(&self, printer: &ReportPrinter) {
        printer.print(&self.summary());
    }
}
