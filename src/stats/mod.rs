//! Per-context outcome ledger and its summary form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Outcome;

/// `(db_id, question_id)`
pub type CaseId = (String, String);
/// `(db_id, question_id, error_message)`; a null message sorts first.
pub type ErrorCase = (String, String, Option<String>);

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    corrects: BTreeMap<String, Vec<CaseId>>,
    incorrects: BTreeMap<String, Vec<CaseId>>,
    errors: BTreeMap<String, Vec<ErrorCase>>,
    total: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    pub correct: usize,
    pub incorrect: usize,
    pub error: usize,
    pub total: usize,
}

/// Sorted id lists for one context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ids {
    pub correct: Vec<CaseId>,
    pub incorrect: Vec<CaseId>,
    pub error: Vec<ErrorCase>,
}

/// Snapshot shape written to `-statistics.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub counts: BTreeMap<String, Counts>,
    pub ids: BTreeMap<String, Ids>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the manager mutates the ledger, so the total always moves together
    /// with exactly one outcome list.
    pub(crate) fn record(&mut self, db_id: &str, question_id: &str, context: &str, outcome: Outcome) {
        *self.total.entry(context.to_string()).or_default() += 1;
        let id = (db_id.to_string(), question_id.to_string());
        match outcome {
            Outcome::Correct => self.corrects.entry(context.to_string()).or_default().push(id),
            Outcome::Incorrect => self.incorrects.entry(context.to_string()).or_default().push(id),
            Outcome::Error(msg) => self
                .errors
                .entry(context.to_string())
                .or_default()
                .push((id.0, id.1, msg)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }

    /// Context labels in sorted order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.total.keys().map(String::as_str)
    }

    pub fn total_for(&self, context: &str) -> usize {
        self.total.get(context).copied().unwrap_or(0)
    }

    pub fn corrects_for(&self, context: &str) -> &[CaseId] {
        self.corrects.get(context).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn incorrects_for(&self, context: &str) -> &[CaseId] {
        self.incorrects.get(context).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn errors_for(&self, context: &str) -> &[ErrorCase] {
        self.errors.get(context).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Counts and sorted id lists for every context seen so far.
    pub fn to_summary(&self) -> Summary {
        let mut summary = Summary::default();
        for context in self.contexts() {
            let correct = sorted(self.corrects_for(context));
            let incorrect = sorted(self.incorrects_for(context));
            let error = sorted(self.errors_for(context));
            summary.counts.insert(
                context.to_string(),
                Counts {
                    correct: correct.len(),
                    incorrect: incorrect.len(),
                    error: error.len(),
                    total: self.total_for(context),
                },
            );
            summary.ids.insert(context.to_string(), Ids { correct, incorrect, error });
        }
        summary
    }
}

// Tuple ordering compares db_id, then question_id, then the error message.
fn sorted<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut v = items.to_vec();
    v.sort();
    v
}
